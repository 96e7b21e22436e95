// Common models shared between the api service and the GUI
use serde::{Deserialize, Serialize};

/// One amphibian as served by the endpoint.
///
/// `name` is used as a display label only; the endpoint does not promise it is unique.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Amphibian {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub img_src: String,
}

impl Amphibian {
    /// Heading shown on an expanded card, e.g. "Great Basin Spadefoot (Toad)".
    pub fn heading(&self) -> String {
        format!("{} ({})", self.name, self.kind)
    }
}
