use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateTaskResponse {
    pub output: Option<CreateTaskOutput>,
    pub request_id: Option<String>,
    pub code: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateTaskOutput {
    pub task_id: String,
    pub task_status: Option<String>,
}
