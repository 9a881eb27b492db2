use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod inspect;
pub mod render;
pub mod validate;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse an inbound interaction callback and print its fields.
    Inspect(InspectArgs),
    /// Build a frame descriptor from options and print its meta tags.
    Render(RenderArgs),
    /// Validate a captured interaction callback against a trust backend.
    Validate(ValidateArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Inspect(args) => inspect::run(args, format),
        Command::Render(args) => render::run(args, format),
        Command::Validate(args) => validate::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Callback body file, or `-` for stdin.
    pub path: PathBuf,
    /// Skip field constraint checks (button range, hex validity).
    #[arg(long)]
    pub lenient: bool,
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Frame image URL.
    #[arg(long)]
    pub image: String,
    /// Aspect ratio: 1.91:1 (default) or 1:1.
    #[arg(long, value_name = "RATIO")]
    pub aspect_ratio: Option<String>,
    /// Post-back URL for button interactions.
    #[arg(long)]
    pub post_url: Option<String>,
    /// Input field placeholder text.
    #[arg(long)]
    pub input_text: Option<String>,
    /// Button spec `label[,action[,target]]`; repeat for slots 1..4.
    #[arg(long, value_name = "SPEC")]
    pub button: Vec<String>,
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Callback body file, or `-` for stdin.
    pub path: PathBuf,
    /// Validate against this hub base URL.
    #[arg(long, value_name = "URL", env = "FRAMECAST_HUB_URL", conflicts_with = "indexer")]
    pub hub: Option<String>,
    /// Validate against the indexer (API key from FRAMECAST_INDEXER_KEY).
    #[arg(long)]
    pub indexer: bool,
    /// Indexer API key.
    #[arg(long, value_name = "KEY", env = "FRAMECAST_INDEXER_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
    /// Bypass validation and synthesize a mock record.
    #[arg(long, conflicts_with_all = ["hub", "indexer"])]
    pub mock: bool,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
