pub mod create_task_response;
pub mod get_task_response;
