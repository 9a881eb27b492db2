use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use framecast_frame::FrameDescriptor;
use framecast_message::InboundMessage;
use framecast_validate::ValidatedInteraction;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

pub fn print_message(message: &InboundMessage, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(message),
        OutputFormat::Table => {
            let untrusted = &message.untrusted_data;
            let mut table = field_table();
            table
                .add_row(vec!["fid".to_string(), untrusted.fid.to_string()])
                .add_row(vec!["url".to_string(), untrusted.url.clone()])
                .add_row(vec![
                    "button".to_string(),
                    optional(untrusted.button_index.map(|b| b.to_string())),
                ])
                .add_row(vec![
                    "input".to_string(),
                    optional(untrusted.input_text.clone()),
                ])
                .add_row(vec![
                    "address".to_string(),
                    optional(untrusted.address.clone()),
                ])
                .add_row(vec![
                    "transaction".to_string(),
                    optional(untrusted.transaction_id.clone()),
                ])
                .add_row(vec![
                    "state".to_string(),
                    optional(untrusted.state.clone()),
                ])
                .add_row(vec![
                    "message bytes".to_string(),
                    format!("{} hex chars", message.trusted_data.message_bytes.len()),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!(
                "fid={} url={} button={} input={}",
                message.untrusted_data.fid,
                message.untrusted_data.url,
                optional(message.untrusted_data.button_index.map(|b| b.to_string())),
                optional(message.untrusted_data.input_text.clone()),
            );
        }
    }
}

pub fn print_record(record: &ValidatedInteraction, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(record),
        OutputFormat::Table => {
            let mut table = field_table();
            table
                .add_row(vec!["fid".to_string(), record.interactor.fid.to_string()])
                .add_row(vec![
                    "username".to_string(),
                    optional(record.interactor.username.clone()),
                ])
                .add_row(vec![
                    "tapped button".to_string(),
                    optional(record.tapped_button.map(|b| b.to_string())),
                ])
                .add_row(vec![
                    "provenance".to_string(),
                    format!("{:?}", record.provenance).to_lowercase(),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!(
                "fid={} username={} button={} provenance={:?}",
                record.interactor.fid,
                optional(record.interactor.username.clone()),
                optional(record.tapped_button.map(|b| b.to_string())),
                record.provenance,
            );
        }
    }
}

pub fn print_frame(descriptor: &FrameDescriptor, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&descriptor.meta_tags()),
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["PROPERTY", "CONTENT"]);
            for (property, content) in descriptor.meta_tags() {
                table.add_row(vec![property, content]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            print!("{}", descriptor.to_html());
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    println!(
        "{}",
        serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
    );
}

fn field_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["FIELD", "VALUE"]);
    table
}

fn optional(value: Option<String>) -> String {
    value.unwrap_or_else(|| "-".to_string())
}
