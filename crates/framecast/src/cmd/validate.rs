use framecast_validate::{
    HubConfig, IndexerConfig, ValidationMode, Validator,
};

use crate::cmd::{inspect, ValidateArgs};
use crate::exit::{validate_error, CliError, CliResult, INTERNAL, SUCCESS, USAGE};
use crate::output::{print_record, OutputFormat};

pub fn run(args: ValidateArgs, format: OutputFormat) -> CliResult<i32> {
    // Lenient parse only for mock runs; live validation gets strict input.
    let message = inspect::read_message(&args.path, args.mock)?;

    let validator = build_validator(&args)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| CliError::new(INTERNAL, format!("start runtime: {err}")))?;

    let record = runtime
        .block_on(validator.validate(&message))
        .map_err(|err| validate_error("validate message", err))?;

    print_record(&record, format);
    Ok(SUCCESS)
}

fn build_validator(args: &ValidateArgs) -> CliResult<Validator> {
    if args.mock {
        // Any backend works; mock mode never touches it.
        let config = HubConfig::new("http://localhost");
        return Ok(Validator::hub(config)
            .map_err(|err| validate_error("configure validator", err))?
            .with_mode(ValidationMode::Mock));
    }

    if let Some(hub_url) = &args.hub {
        let validator = Validator::hub(HubConfig::new(hub_url))
            .map_err(|err| validate_error("configure hub validator", err))?;
        return Ok(validator);
    }

    if args.indexer {
        let config = IndexerConfig::new(args.api_key.clone().unwrap_or_default())
            .map_err(|err| validate_error("configure indexer validator", err))?;
        let validator = Validator::indexer(config)
            .map_err(|err| validate_error("configure indexer validator", err))?;
        return Ok(validator);
    }

    Err(CliError::new(
        USAGE,
        "choose a backend: --hub <URL>, --indexer, or --mock",
    ))
}
