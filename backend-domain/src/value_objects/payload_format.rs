// Payload format value object

use serde::{Deserialize, Serialize};

/// Recognized shapes of a scanned QR payload. Classification is total:
/// every input string maps to exactly one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayloadFormat {
    UrlWithId,
    PrefixedId,
    ShortCode,
    DirectId,
    Unrecognized,
}

impl PayloadFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayloadFormat::UrlWithId => "url_with_id",
            PayloadFormat::PrefixedId => "prefixed_id",
            PayloadFormat::ShortCode => "short_code",
            PayloadFormat::DirectId => "direct_id",
            PayloadFormat::Unrecognized => "unrecognized",
        }
    }
}
