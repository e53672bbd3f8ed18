pub mod create_video_task_dto;
pub mod poll_video_task_dto;
