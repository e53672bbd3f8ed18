use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GetTaskResponse {
    pub output: Option<GetTaskOutput>,
    pub request_id: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GetTaskOutput {
    pub task_id: Option<String>,
    pub task_status: Option<String>,
    pub video_url: Option<String>,
}
