pub mod effect_template;
pub mod task_status;
pub mod video_model;
pub mod video_resolution;
