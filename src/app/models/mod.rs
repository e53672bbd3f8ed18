pub mod api_error;
pub mod progress_sink;
