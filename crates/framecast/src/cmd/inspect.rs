use std::io::Read;
use std::path::Path;

use framecast_message::{parse_with_config, InboundMessage, ParseConfig};

use crate::cmd::InspectArgs;
use crate::exit::{io_error, message_error, CliResult, SUCCESS};
use crate::output::{print_message, OutputFormat};

pub fn run(args: InspectArgs, format: OutputFormat) -> CliResult<i32> {
    let message = read_message(&args.path, args.lenient)?;
    print_message(&message, format);
    Ok(SUCCESS)
}

pub(crate) fn read_message(path: &Path, lenient: bool) -> CliResult<InboundMessage> {
    let body = read_body(path)?;
    let config = ParseConfig { strict: !lenient };
    parse_with_config(&body, &config).map_err(|err| message_error("parse callback body", err))
}

fn read_body(path: &Path) -> CliResult<Vec<u8>> {
    if path.as_os_str() == "-" {
        let mut body = Vec::new();
        std::io::stdin()
            .read_to_end(&mut body)
            .map_err(|err| io_error("read stdin", err))?;
        Ok(body)
    } else {
        std::fs::read(path).map_err(|err| io_error("read callback file", err))
    }
}
