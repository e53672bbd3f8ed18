pub static API_URL: &str =
    "https://dashscope.aliyuncs.com/api/v1/services/aigc/video-generation/video-synthesis";
pub static TASKS_URL: &str = "https://dashscope.aliyuncs.com/api/v1/tasks";

pub static DEFAULT_NEGATIVE_PROMPT: &str = "低分辨率,错误,最差质量,低质量,残缺";

pub const REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DOWNLOAD_TIMEOUT_SECS: u64 = 120;
pub const DOWNLOAD_BLOCK_SIZE: usize = 1024 * 1024;

pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 10;
pub const DEFAULT_MAX_RETRIES: u32 = 30;
