use validator::Validate;

use crate::tasks::enums::{
    effect_template::EffectTemplate, video_model::VideoModel, video_resolution::VideoResolution,
};

#[derive(Debug, Clone, Validate)]
pub struct CreateVideoTaskDto {
    #[validate(length(
        min = 1,
        max = 800,
        message = "prompt must be between 1 and 800 characters."
    ))]
    pub prompt: String,
    #[validate(length(
        max = 500,
        message = "negative_prompt must be at most 500 characters."
    ))]
    pub negative_prompt: String,
    pub model: VideoModel,
    pub resolution: VideoResolution,
    pub template: EffectTemplate,
    pub seed: u32,
}

impl CreateVideoTaskDto {
    pub fn sanitized(&self) -> Self {
        return Self {
            prompt: self.prompt.trim().replace('\n', "").replace('\r', ""),
            negative_prompt: self.negative_prompt.trim().to_string(),
            model: self.model,
            resolution: self.resolution,
            template: self.template,
            seed: self.seed,
        };
    }
}

#[cfg(test)]
mod tests {
    use validator::Validate;

    use super::*;
    use crate::tasks::config;

    fn dto() -> CreateVideoTaskDto {
        CreateVideoTaskDto {
            prompt: "一只猫在草地上奔跑".to_string(),
            negative_prompt: config::DEFAULT_NEGATIVE_PROMPT.to_string(),
            model: VideoModel::default(),
            resolution: VideoResolution::default(),
            template: EffectTemplate::None,
            seed: 0,
        }
    }

    #[test]
    fn empty_prompt_fails_validation() {
        let mut dto = dto();
        dto.prompt = String::new();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn sanitized_strips_newlines() {
        let mut dto = dto();
        dto.prompt = " a cat\nrunning\r".to_string();
        assert_eq!(dto.sanitized().prompt, "a catrunning");
    }
}
