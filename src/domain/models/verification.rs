use serde::{Deserialize, Serialize};

/// Name of the response header carrying the JSON-encoded [`VerificationResult`].
pub const VERIFICATION_HEADER: &str = "X-Font-Verification";

/// What the conversion service found when it re-opened the converted font.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    pub filename: String,
    pub format: String,
    /// Table tags in the order the service listed them.
    #[serde(default)]
    pub tables: Vec<String>,
    #[serde(default)]
    pub details: VerificationDetails,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fullname: Option<String>,
}

impl VerificationResult {
    /// Decodes the header value. The service sends JSON `null` when its own
    /// verification step failed, which decodes to `Ok(None)`.
    pub fn from_header_value(raw: &[u8]) -> Result<Option<Self>, serde_json::Error> {
        serde_json::from_slice::<Option<Self>>(raw)
    }
}

impl VerificationDetails {
    /// Present details as `(label, value)` pairs, in display order.
    pub fn present(&self) -> Vec<(&'static str, &str)> {
        [
            ("Family", self.family.as_deref()),
            ("Style", self.style.as_deref()),
            ("Full name", self.fullname.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.map(|v| (label, v)))
        .collect()
    }
}
