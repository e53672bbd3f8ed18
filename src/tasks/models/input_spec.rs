use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct InputSpec {
    pub model: String,
    pub input: InputSpecInput,
    pub parameters: InputSpecParams,
}

/// `prompt` and `template` are mutually exclusive on the wire; the absent one
/// must be omitted entirely, not sent as null.
#[derive(Debug, Serialize)]
pub struct InputSpecInput {
    pub img_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    pub negative_prompt: String,
}

#[derive(Debug, Serialize)]
pub struct InputSpecParams {
    pub resolution: String,
    pub seed: u32,
}
