use std::{env, path::PathBuf, process};

use crate::{
    app::{env::Envy, models::progress_sink::ProgressSink},
    tasks::{
        config,
        dtos::{
            create_video_task_dto::CreateVideoTaskDto, poll_video_task_dto::PollVideoTaskDto,
        },
        enums::{
            effect_template::EffectTemplate, video_model::VideoModel,
            video_resolution::VideoResolution,
        },
    },
};

mod app;
mod tasks;

struct TracingProgressSink;

impl ProgressSink for TracingProgressSink {
    fn update(&self, _amount: u32, label: &str) {
        tracing::info!("{}", label);
    }
}

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt::init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("usage: wan-video <image-path> <prompt> [template-name]");
        process::exit(1);
    }

    let frame = match image::open(&args[1]) {
        Ok(frame) => frame,
        Err(e) => {
            eprintln!("failed to open {}: {}", args[1], e);
            process::exit(1);
        }
    };

    let template = match args.get(3) {
        Some(name) => match EffectTemplate::from_display_name(name) {
            Some(template) => template,
            None => {
                eprintln!("unknown template: {}", name);
                process::exit(1);
            }
        },
        None => EffectTemplate::None,
    };

    let dto = CreateVideoTaskDto {
        prompt: args[2].to_string(),
        negative_prompt: config::DEFAULT_NEGATIVE_PROMPT.to_string(),
        model: VideoModel::default(),
        resolution: VideoResolution::default(),
        template,
        seed: 0,
    };

    let task_id = match tasks::service::create_video_task(
        &dto.sanitized(),
        &frame,
        &envy.dashscope_api_key,
    )
    .await
    {
        Ok(task_id) => task_id,
        Err(e) => {
            eprintln!("task submission failed: {}", e);
            process::exit(1);
        }
    };

    println!("created task {}", task_id);

    let poll_dto = PollVideoTaskDto {
        task_id,
        poll_interval: config::DEFAULT_POLL_INTERVAL_SECS,
        max_retries: config::DEFAULT_MAX_RETRIES,
    };

    let output_dir = envy
        .wan_output_dir
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("output/wan_videos"));

    match tasks::service::poll_video_task(
        &poll_dto,
        &envy.dashscope_api_key,
        &output_dir,
        &TracingProgressSink,
    )
    .await
    {
        Ok(filepath) => println!("video saved to {}", filepath.display()),
        Err(e) => {
            eprintln!("task did not produce a video: {}", e);
            process::exit(1);
        }
    }
}
