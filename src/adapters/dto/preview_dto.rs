use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PreviewTextForm {
    #[serde(default)]
    pub text: String,
}
