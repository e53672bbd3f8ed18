use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use image::DynamicImage;
use reqwest::{header, StatusCode};
use tokio::{fs, io::AsyncWriteExt, time::sleep};
use validator::Validate;

use crate::app::{
    errors::DefaultApiError,
    models::{api_error::ApiError, progress_sink::ProgressSink},
    util::time,
};

use super::{
    config,
    dtos::{create_video_task_dto::CreateVideoTaskDto, poll_video_task_dto::PollVideoTaskDto},
    enums::task_status::TaskStatus,
    models::input_spec::{InputSpec, InputSpecInput, InputSpecParams},
    structs::{create_task_response::CreateTaskResponse, get_task_response::GetTaskResponse},
    util::image::to_data_uri,
};

/// Submits one video-generation task and returns the remote task id.
/// Submission is never retried; every failure comes back as an ApiError.
pub async fn create_video_task(
    dto: &CreateVideoTaskDto,
    frame: &DynamicImage,
    api_key: &str,
) -> Result<String, ApiError> {
    create_video_task_with_url(config::API_URL, dto, frame, api_key).await
}

async fn create_video_task_with_url(
    api_url: &str,
    dto: &CreateVideoTaskDto,
    frame: &DynamicImage,
    api_key: &str,
) -> Result<String, ApiError> {
    if let Err(e) = dto.validate() {
        return Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        });
    }

    let img_url = to_data_uri(frame)?;
    let input_spec = provide_input_spec(dto, img_url);
    let headers = provide_headers(api_key, true)?;

    let client = reqwest::Client::new();
    let result = client
        .post(api_url)
        .headers(headers)
        .json(&input_spec)
        .timeout(Duration::from_secs(config::REQUEST_TIMEOUT_SECS))
        .send()
        .await;

    match result {
        Ok(res) => {
            let code = res.status();

            match res.text().await {
                Ok(text) => {
                    if code != StatusCode::OK {
                        let message = match serde_json::from_str::<CreateTaskResponse>(&text) {
                            Ok(error_response) => error_response
                                .message
                                .unwrap_or_else(|| "unknown error".to_string()),
                            Err(_) => text,
                        };

                        return Err(ApiError {
                            code,
                            message: format!("API error ({}): {}", code.as_u16(), message),
                        });
                    }

                    match serde_json::from_str::<CreateTaskResponse>(&text) {
                        Ok(create_task_response) => match create_task_response.output {
                            Some(output) => Ok(output.task_id),
                            None => Err(ApiError {
                                code: StatusCode::INTERNAL_SERVER_ERROR,
                                message: format!("API returned an unexpected body: {}", text),
                            }),
                        },
                        Err(_) => {
                            tracing::warn!("create_video_task (1): {:?}", text);
                            Err(ApiError {
                                code: StatusCode::INTERNAL_SERVER_ERROR,
                                message: format!("API returned an unexpected body: {}", text),
                            })
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!("create_video_task (2): {:?}", e);
                    Err(DefaultApiError::InternalServerError.value())
                }
            }
        }
        Err(e) => {
            if e.is_timeout() {
                return Err(ApiError {
                    code: StatusCode::REQUEST_TIMEOUT,
                    message: "API request timed out.".to_string(),
                });
            }

            tracing::warn!("create_video_task (3): {:?}", e);
            Err(ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: format!("API request failed: {}", e),
            })
        }
    }
}

// A chosen template replaces the free-text prompt entirely. The payload never
// carries both fields.
fn provide_input_spec(dto: &CreateVideoTaskDto, img_url: String) -> InputSpec {
    let mut input = InputSpecInput {
        img_url,
        prompt: None,
        template: None,
        negative_prompt: dto.negative_prompt.to_string(),
    };

    match dto.template.code() {
        Some(code) => input.template = Some(code.to_string()),
        None => input.prompt = Some(dto.prompt.to_string()),
    }

    InputSpec {
        model: dto.model.value().to_string(),
        input,
        parameters: InputSpecParams {
            resolution: dto.resolution.value().to_string(),
            seed: dto.seed,
        },
    }
}

/// Polls the task until a terminal status, then downloads the resulting
/// video into `output_dir`. Occupies the caller for up to
/// `poll_interval * max_retries` seconds.
pub async fn poll_video_task(
    dto: &PollVideoTaskDto,
    api_key: &str,
    output_dir: &Path,
    progress: &dyn ProgressSink,
) -> Result<PathBuf, ApiError> {
    if let Err(e) = dto.validate() {
        return Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        });
    }

    await_task_completion(
        config::TASKS_URL,
        &dto.task_id,
        Duration::from_secs(dto.poll_interval),
        dto.max_retries,
        api_key,
        output_dir,
        progress,
    )
    .await
}

async fn await_task_completion(
    tasks_url: &str,
    task_id: &str,
    poll_interval: Duration,
    max_retries: u32,
    api_key: &str,
    output_dir: &Path,
    progress: &dyn ProgressSink,
) -> Result<PathBuf, ApiError> {
    let mut last_status: Option<TaskStatus> = None;

    for attempt in 0..max_retries {
        match get_task_by_id(tasks_url, task_id, api_key).await {
            Ok(get_task_response) => {
                let status = match &get_task_response.output {
                    Some(output) => match &output.task_status {
                        Some(value) => TaskStatus::from_value(value),
                        None => TaskStatus::Unknown,
                    },
                    None => TaskStatus::Unknown,
                };

                progress.update(
                    1,
                    &format!("{} ({}/{})", status.value(), attempt + 1, max_retries),
                );
                last_status = Some(status);

                match status {
                    TaskStatus::Succeeded => {
                        let video_url = get_task_response
                            .output
                            .and_then(|output| output.video_url);

                        let Some(video_url) = video_url else {
                            return Err(ApiError {
                                code: StatusCode::INTERNAL_SERVER_ERROR,
                                message: "Task succeeded but returned no video url.".to_string(),
                            });
                        };

                        return download_video(&video_url, output_dir).await;
                    }
                    TaskStatus::Failed | TaskStatus::Canceled => {
                        let message = get_task_response
                            .message
                            .unwrap_or_else(|| "unknown error".to_string());

                        return Err(ApiError {
                            code: StatusCode::INTERNAL_SERVER_ERROR,
                            message: format!("Task {}: {}", status.value(), message),
                        });
                    }
                    _ => {}
                }
            }
            Err(e) => {
                tracing::warn!("await_task_completion attempt {}: {:?}", attempt + 1, e);
                progress.update(
                    1,
                    &format!("status check failed, retrying... ({}/{})", attempt + 1, max_retries),
                );
            }
        }

        sleep(poll_interval).await;
    }

    let last = match last_status {
        Some(status) => status.value(),
        None => TaskStatus::Unknown.value(),
    };

    Err(ApiError {
        code: StatusCode::REQUEST_TIMEOUT,
        message: format!("Task did not complete in time, last status: {}", last),
    })
}

async fn get_task_by_id(
    tasks_url: &str,
    task_id: &str,
    api_key: &str,
) -> Result<GetTaskResponse, ApiError> {
    let headers = provide_headers(api_key, false)?;

    let client = reqwest::Client::new();
    let url = format!("{}/{}", tasks_url, task_id);
    let result = client
        .get(url)
        .headers(headers)
        .timeout(Duration::from_secs(config::REQUEST_TIMEOUT_SECS))
        .send()
        .await;

    match result {
        Ok(res) => {
            if res.status() != StatusCode::OK {
                return Err(ApiError {
                    code: res.status(),
                    message: format!("Status query failed: {}", res.status().as_u16()),
                });
            }

            match res.text().await {
                Ok(text) => match serde_json::from_str(&text) {
                    Ok(get_task_response) => Ok(get_task_response),
                    Err(_) => {
                        tracing::warn!("get_task_by_id (1): {:?}", text);
                        Err(DefaultApiError::InternalServerError.value())
                    }
                },
                Err(e) => {
                    tracing::warn!("get_task_by_id (2): {:?}", e);
                    Err(DefaultApiError::InternalServerError.value())
                }
            }
        }
        Err(e) => {
            tracing::warn!("get_task_by_id (3): {:?}", e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

/// Streams a completed video to `output_dir`, writing in 1 MiB blocks.
/// Interrupted downloads leave a partial file behind; there is no resume.
pub async fn download_video(video_url: &str, output_dir: &Path) -> Result<PathBuf, ApiError> {
    if let Err(e) = fs::create_dir_all(output_dir).await {
        tracing::error!(%e);
        return Err(ApiError {
            code: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("Failed to create output directory: {}", e),
        });
    }

    // Unique per second within this process only; two processes finishing in
    // the same second can collide.
    let filename = format!("wan_video_{}.mp4", time::current_time_in_secs());
    let filepath = output_dir.join(filename);

    let client = reqwest::Client::new();
    let result = client
        .get(video_url)
        .timeout(Duration::from_secs(config::DOWNLOAD_TIMEOUT_SECS))
        .send()
        .await;

    let mut res = match result {
        Ok(res) => res,
        Err(e) => {
            if e.is_timeout() {
                return Err(ApiError {
                    code: StatusCode::REQUEST_TIMEOUT,
                    message: "Video download timed out.".to_string(),
                });
            }

            tracing::warn!("download_video (1): {:?}", e);
            return Err(ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: format!("Video download failed: {}", e),
            });
        }
    };

    if res.status() != StatusCode::OK {
        return Err(ApiError {
            code: res.status(),
            message: format!("Video download failed: {}", res.status().as_u16()),
        });
    }

    let mut file = match fs::File::create(&filepath).await {
        Ok(file) => file,
        Err(e) => {
            tracing::error!(%e);
            return Err(ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: format!("Failed to create video file: {}", e),
            });
        }
    };

    let mut block: Vec<u8> = Vec::with_capacity(config::DOWNLOAD_BLOCK_SIZE);

    loop {
        match res.chunk().await {
            Ok(Some(bytes)) => {
                block.extend_from_slice(&bytes);

                if block.len() >= config::DOWNLOAD_BLOCK_SIZE {
                    if let Err(e) = file.write_all(&block).await {
                        tracing::error!(%e);
                        return Err(ApiError {
                            code: StatusCode::INTERNAL_SERVER_ERROR,
                            message: format!("Failed to write video file: {}", e),
                        });
                    }
                    block.clear();
                }
            }
            Ok(None) => break,
            Err(e) => {
                tracing::warn!("download_video (2): {:?}", e);
                return Err(ApiError {
                    code: StatusCode::INTERNAL_SERVER_ERROR,
                    message: format!("Video download interrupted: {}", e),
                });
            }
        }
    }

    if !block.is_empty() {
        if let Err(e) = file.write_all(&block).await {
            tracing::error!(%e);
            return Err(ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: format!("Failed to write video file: {}", e),
            });
        }
    }

    if let Err(e) = file.flush().await {
        tracing::error!(%e);
        return Err(ApiError {
            code: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("Failed to write video file: {}", e),
        });
    }

    Ok(filepath)
}

fn provide_headers(api_key: &str, async_processing: bool) -> Result<header::HeaderMap, ApiError> {
    let mut headers = header::HeaderMap::new();
    headers.insert("Content-Type", "application/json".parse().unwrap());

    let Ok(authorization) = format!("Bearer {}", api_key).parse() else {
        return Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: "API key contains invalid characters.".to_string(),
        });
    };
    headers.insert("Authorization", authorization);

    if async_processing {
        headers.insert("X-DashScope-Async", "enable".parse().unwrap());
    }

    Ok(headers)
}
