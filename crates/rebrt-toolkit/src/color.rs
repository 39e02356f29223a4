use crate::ToolError;

/// `(51, 204, 187)` -> `#33ccbb`
pub fn rgb_to_hex(red: i64, green: i64, blue: i64) -> Result<String, ToolError> {
    let channel = |v: i64| u8::try_from(v).map_err(|_| ToolError::InvalidRgb);
    Ok(format!(
        "#{:02x}{:02x}{:02x}",
        channel(red)?,
        channel(green)?,
        channel(blue)?
    ))
}

/// `#33ccbb` or `33CCBB` -> `51 204 187`
pub fn hex_to_rgb(hex: &str) -> Result<String, ToolError> {
    let hex = hex.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ToolError::InvalidHex);
    }
    let channel = |range| u8::from_str_radix(&hex[range], 16).map_err(|_| ToolError::InvalidHex);
    Ok(format!("{} {} {}", channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
