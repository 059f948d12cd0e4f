use crate::error::{EditorError, EditorResult};

/// Largest font size a text element may use, in CSS pixels.
pub(crate) const MAX_FONT_SIZE: f32 = 1_000.0;

/// Largest width or height an image element may be scaled to.
pub(crate) const MAX_IMAGE_SIDE: f32 = 16_384.0;

/// Sizes (font size, image width/height) must be finite, positive and at most `max`.
pub(crate) fn validate_size(what: &str, value: f32, max: f32) -> EditorResult<()> {
    if value.is_finite() && value > 0.0 && value <= max {
        Ok(())
    } else {
        Err(EditorError::InvalidInput(format!(
            "{} must be between 0 and {}, got {}",
            what, max, value
        )))
    }
}

pub(crate) fn validate_coordinate(what: &str, value: f32) -> EditorResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(EditorError::InvalidInput(format!("{} must be a finite number", what)))
    }
}
