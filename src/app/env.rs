use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    pub dashscope_api_key: String,

    pub wan_output_dir: Option<String>,
}
