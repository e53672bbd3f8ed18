use validator::Validate;

#[derive(Debug, Clone, Validate)]
pub struct PollVideoTaskDto {
    #[validate(length(min = 1, message = "task_id must not be empty."))]
    pub task_id: String,
    #[validate(range(
        min = 5,
        max = 120,
        message = "poll_interval must be between 5 and 120 seconds."
    ))]
    pub poll_interval: u64,
    #[validate(range(
        min = 1,
        max = 100,
        message = "max_retries must be between 1 and 100."
    ))]
    pub max_retries: u32,
}
