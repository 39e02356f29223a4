use crate::ToolError;
use rebrt_types::MAX_MESSAGE_LENGTH;

/// Length in characters, not bytes
pub fn length(text: &str) -> usize {
    text.chars().count()
}

/// `text` repeated `repeats` times, cut to one message
pub fn repeat(text: &str, repeats: usize) -> Result<String, ToolError> {
    if repeats > MAX_MESSAGE_LENGTH {
        return Err(ToolError::TooManyRepeats);
    }
    Ok(text.repeat(repeats).chars().take(MAX_MESSAGE_LENGTH).collect())
}
