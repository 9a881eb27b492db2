use framecast_frame::{AspectRatio, ButtonAction, ButtonConfig, FrameConfig, MAX_BUTTONS};

use crate::cmd::RenderArgs;
use crate::exit::{frame_error, CliError, CliResult, SUCCESS, USAGE};
use crate::output::{print_frame, OutputFormat};

pub fn run(args: RenderArgs, format: OutputFormat) -> CliResult<i32> {
    let mut config = FrameConfig::new(args.image);

    if let Some(ratio) = args.aspect_ratio.as_deref() {
        config.aspect_ratio = parse_aspect_ratio(ratio)?;
    }
    config.post_url = args.post_url;
    config.input_text = args.input_text;

    if args.button.len() > MAX_BUTTONS {
        return Err(CliError::new(
            USAGE,
            format!("at most {MAX_BUTTONS} buttons, got {}", args.button.len()),
        ));
    }
    for (slot, spec) in args.button.iter().enumerate() {
        config.buttons[slot] = Some(parse_button_spec(spec)?);
    }

    let descriptor = config
        .build()
        .map_err(|err| frame_error("build frame", err))?;
    print_frame(&descriptor, format);
    Ok(SUCCESS)
}

fn parse_aspect_ratio(ratio: &str) -> CliResult<AspectRatio> {
    match ratio {
        "1.91:1" => Ok(AspectRatio::Widescreen),
        "1:1" => Ok(AspectRatio::Square),
        other => Err(CliError::new(
            USAGE,
            format!("unknown aspect ratio '{other}' (expected 1.91:1 or 1:1)"),
        )),
    }
}

/// Parse `label[,action[,target]]` into a button slot.
fn parse_button_spec(spec: &str) -> CliResult<ButtonConfig> {
    let mut parts = spec.splitn(3, ',');
    let label = parts
        .next()
        .filter(|label| !label.is_empty())
        .ok_or_else(|| CliError::new(USAGE, "button spec needs a label"))?;

    let action = match parts.next() {
        None | Some("") | Some("post") => ButtonAction::Post,
        Some("link") => ButtonAction::Link,
        Some("tx") => ButtonAction::Tx,
        Some("mint") => ButtonAction::Mint,
        Some(other) => {
            return Err(CliError::new(
                USAGE,
                format!("unknown button action '{other}' (expected post, link, tx, or mint)"),
            ))
        }
    };

    Ok(ButtonConfig {
        label: label.to_string(),
        action,
        target: parts.next().map(str::to_string),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_label_as_post() {
        let button = parse_button_spec("hello").unwrap();
        assert_eq!(button.label, "hello");
        assert_eq!(button.action, ButtonAction::Post);
        assert!(button.target.is_none());
    }

    #[test]
    fn parses_action_and_target() {
        let button = parse_button_spec("github,link,https://github.com/x/y").unwrap();
        assert_eq!(button.action, ButtonAction::Link);
        assert_eq!(button.target.as_deref(), Some("https://github.com/x/y"));
    }

    #[test]
    fn target_may_contain_commas() {
        let button = parse_button_spec("go,link,https://x/y?a=1,2").unwrap();
        assert_eq!(button.target.as_deref(), Some("https://x/y?a=1,2"));
    }

    #[test]
    fn rejects_unknown_action() {
        let result = parse_button_spec("go,teleport");
        assert!(result.is_err());
    }

    #[test]
    fn rejects_empty_label() {
        assert!(parse_button_spec("").is_err());
        assert!(parse_button_spec(",link,https://x").is_err());
    }
}
