mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "framecast", version, about = "Farcaster frames CLI")]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(long, value_name = "LEVEL", default_value = "info", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    let result = cmd::run(cli.command, format);

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_inspect_subcommand() {
        let cli = Cli::try_parse_from(["framecast", "inspect", "callback.json", "--lenient"])
            .expect("inspect args should parse");
        assert!(matches!(cli.command, Command::Inspect(_)));
    }

    #[test]
    fn parses_render_subcommand() {
        let cli = Cli::try_parse_from([
            "framecast",
            "render",
            "--image",
            "https://x/img.png",
            "--button",
            "hello",
            "--button",
            "github,link,https://github.com/x/y",
        ])
        .expect("render args should parse");
        assert!(matches!(cli.command, Command::Render(_)));
    }

    #[test]
    fn rejects_conflicting_backend_args() {
        let err = Cli::try_parse_from([
            "framecast",
            "validate",
            "callback.json",
            "--hub",
            "https://hub.example:2281",
            "--indexer",
        ])
        .expect_err("conflicting backends should fail");
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn parses_validate_with_mock() {
        let cli = Cli::try_parse_from(["framecast", "validate", "-", "--mock"])
            .expect("validate args should parse");
        assert!(matches!(cli.command, Command::Validate(_)));
    }
}
