/// "I'm feeling lucky" search link
pub fn google_search_url(text: &str, language: &str) -> String {
    format!(
        "https://www.google.com/search?btnI=1&hl={}&q={}",
        urlencoding::encode(language),
        urlencoding::encode(text)
    )
}

/// Link to a 1000x1000 QR code image encoding `text`
pub fn qr_code_url(text: &str) -> String {
    format!(
        "https://api.qrserver.com/v1/create-qr-code/?size=1000x1000&qzone=4&data={}",
        urlencoding::encode(text)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_google_search_url() {
        assert_eq!(
            google_search_url("project sekai", "ja"),
            "https://www.google.com/search?btnI=1&hl=ja&q=project%20sekai"
        );
    }

    #[test]
    fn test_qr_code_url_escapes_everything() {
        assert_eq!(
            qr_code_url("https://a.b/?x=1&y=2"),
            "https://api.qrserver.com/v1/create-qr-code/?size=1000x1000&qzone=4\
             &data=https%3A%2F%2Fa.b%2F%3Fx%3D1%26y%3D2"
        );
    }
}
