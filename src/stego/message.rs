use crate::error::{Result, UndertoneError};

/// Convert message text into the single-byte character codes that get
/// embedded.
///
/// Each character contributes its code point as one byte, so only text in
/// the U+0001..=U+00FF range survives a round trip. Anything wider is
/// rejected up front rather than truncated, and NUL is rejected because it
/// would terminate extraction in the middle of the message.
pub fn message_to_bytes(message: &str) -> Result<Vec<u8>> {
    message
        .chars()
        .map(|c| match u32::from(c) {
            0 => Err(UndertoneError::EmbeddedNul),
            code if code <= 0xFF => Ok(code as u8),
            _ => Err(UndertoneError::UnencodableChar(c)),
        })
        .collect()
}

/// Convert extracted byte codes back into message text.
pub fn bytes_to_message(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_message_round_trips() {
        let bytes = message_to_bytes("Making a living selling used jalapenos").unwrap();
        assert_eq!(bytes_to_message(&bytes), "Making a living selling used jalapenos");
    }

    #[test]
    fn test_latin1_range_round_trips() {
        let bytes = message_to_bytes("café ñandú").unwrap();
        assert_eq!(bytes_to_message(&bytes), "café ñandú");
    }

    #[test]
    fn test_rejects_nul() {
        let result = message_to_bytes("before\0after");
        assert!(matches!(result, Err(UndertoneError::EmbeddedNul)));
    }

    #[test]
    fn test_rejects_wide_characters() {
        let result = message_to_bytes("snowman \u{2603}");
        assert!(matches!(
            result,
            Err(UndertoneError::UnencodableChar('\u{2603}'))
        ));
    }

    #[test]
    fn test_empty_message() {
        assert_eq!(message_to_bytes("").unwrap(), Vec::<u8>::new());
        assert_eq!(bytes_to_message(&[]), "");
    }

    #[test]
    fn test_every_single_byte_code_survives() {
        let codes: Vec<u8> = (1..=255).collect();
        let text = bytes_to_message(&codes);
        assert_eq!(message_to_bytes(&text).unwrap(), codes);
    }
}
