use std::io::Cursor;

use image::{DynamicImage, ImageOutputFormat};
use reqwest::StatusCode;

use crate::app::models::api_error::ApiError;

/// Encodes a raster frame as the inline data URI the synthesis endpoint
/// expects in `input.img_url`.
pub fn to_data_uri(frame: &DynamicImage) -> Result<String, ApiError> {
    let mut buffer = Cursor::new(Vec::new());

    match frame.write_to(&mut buffer, ImageOutputFormat::Png) {
        Ok(_) => Ok(format!(
            "data:{};base64,{}",
            mime::IMAGE_PNG,
            base64::encode(buffer.into_inner())
        )),
        Err(e) => {
            tracing::error!(%e);
            Err(ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: format!("Failed to encode image: {}", e),
            })
        }
    }
}
