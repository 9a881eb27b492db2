//! Meta-tag serialization of a frame descriptor.
//!
//! Frame clients discover a frame by scanning the response document for
//! `fc:frame*` meta properties. The property set must be exact: clients
//! treat missing required tags and unknown button indices as a broken frame.

use crate::descriptor::FrameDescriptor;

/// Protocol version advertised in the `fc:frame` tag.
pub const FRAME_VERSION: &str = "vNext";

impl FrameDescriptor {
    /// Serialize to `(property, content)` meta-tag pairs in render order.
    ///
    /// Absent optional fields are omitted entirely. The default aspect
    /// ratio is still emitted explicitly so the document is self-describing.
    pub fn meta_tags(&self) -> Vec<(String, String)> {
        let mut tags = vec![
            ("fc:frame".to_string(), FRAME_VERSION.to_string()),
            ("fc:frame:image".to_string(), self.image_url.clone()),
            (
                "fc:frame:image:aspect_ratio".to_string(),
                self.aspect_ratio.as_str().to_string(),
            ),
            ("og:image".to_string(), self.image_url.clone()),
        ];

        if let Some(post_url) = &self.post_url {
            tags.push(("fc:frame:post_url".to_string(), post_url.clone()));
        }

        if let Some(placeholder) = &self.input_placeholder {
            tags.push(("fc:frame:input:text".to_string(), placeholder.clone()));
        }

        for (slot, button) in self.buttons.iter().enumerate() {
            let index = slot + 1;
            tags.push((format!("fc:frame:button:{index}"), button.label.clone()));
            tags.push((
                format!("fc:frame:button:{index}:action"),
                button.action.as_str().to_string(),
            ));
            if let Some(target) = &button.target {
                tags.push((format!("fc:frame:button:{index}:target"), target.clone()));
            }
        }

        tags
    }

    /// Render a minimal HTML document carrying the frame meta tags.
    pub fn to_html(&self) -> String {
        let mut html = String::from("<!DOCTYPE html>\n<html>\n<head>\n");
        for (property, content) in self.meta_tags() {
            html.push_str(&format!(
                "<meta property=\"{}\" content=\"{}\" />\n",
                escape_attribute(&property),
                escape_attribute(&content)
            ));
        }
        html.push_str("</head>\n<body></body>\n</html>\n");
        html
    }
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
