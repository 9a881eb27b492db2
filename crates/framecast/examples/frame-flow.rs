//! Build a two-button frame, render its meta tags, then build the
//! typed-data signing request the second button leads to.

use framecast::frame::{ButtonConfig, FrameConfig};
use framecast::signing::signing_request;

fn main() -> Result<(), framecast::Error> {
    let descriptor = FrameConfig {
        image: "https://frames.example/img/start.png".to_string(),
        post_url: Some("https://frames.example/hello".to_string()),
        input_text: Some("enter a message to sign".to_string()),
        buttons: [
            Some(ButtonConfig::post("hello")),
            Some(ButtonConfig::tx("sign", "https://frames.example/signature")),
            None,
            None,
        ],
        ..FrameConfig::default()
    }
    .build()?;

    println!("{}", descriptor.to_html());

    let request = signing_request(
        8453,
        &serde_json::json!({
            "timestamp": 1706243218,
            "text": "hello frames",
        }),
        "playground",
        "v1",
    )?;
    println!("{}", serde_json::to_string_pretty(&request).expect("serializable"));

    Ok(())
}
