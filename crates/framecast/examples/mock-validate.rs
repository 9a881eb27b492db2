//! Parse a captured interaction callback and run it through mock
//! validation, the way a local development server would.

use framecast::message::parse_str;
use framecast::validate::{HubConfig, ValidationMode, Validator};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let body = serde_json::json!({
        "trustedData": {"messageBytes": "0a1b2c"},
        "untrustedData": {
            "fid": 417,
            "url": "https://frames.example/start",
            "messageHash": "0xabc123",
            "timestamp": 1706243218,
            "network": 1,
            "buttonIndex": 1
        }
    });

    let message = parse_str(&body.to_string())?;

    // Mock is selected from an explicit deployment signal; a missing
    // signal would mean live validation against the hub.
    let mode = ValidationMode::from_deployment(Some("development"));
    let validator =
        Validator::hub(HubConfig::new("https://nemes.farcaster.xyz:2281"))?.with_mode(mode);

    let record = validator.validate(&message).await?;
    println!(
        "fid={} button={:?} mock={}",
        record.interactor.fid,
        record.tapped_button,
        record.is_mock()
    );

    Ok(())
}
