//! Statement rendering.
//!
//! Renderers only format values already present in
//! [`StatementData`]; they never recompute fees or credits.

mod currency;
mod html;
mod plain_text;

use serde::{Deserialize, Serialize};

use crate::models::StatementData;

pub use currency::usd;
pub use html::render_html;
pub use plain_text::render_plain_text;

/// The available statement output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementFormat {
    /// Plain text, one line per performance.
    PlainText,
    /// HTML fragment.
    Html,
}

impl StatementFormat {
    /// Renders statement data in this format.
    pub fn render(self, data: &StatementData<'_>) -> String {
        match self {
            StatementFormat::PlainText => render_plain_text(data),
            StatementFormat::Html => render_html(data),
        }
    }

    /// Returns the MIME type for this format.
    pub fn content_type(self) -> &'static str {
        match self {
            StatementFormat::PlainText => "text/plain; charset=utf-8",
            StatementFormat::Html => "text/html; charset=utf-8",
        }
    }
}
