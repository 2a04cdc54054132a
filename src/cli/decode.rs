use crate::error::Result;
use crate::stego::bytes_to_message;
use crate::wav::WavCarrier;
use std::path::Path;

/// A message recovered from a carrier file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedMessage {
    pub text: String,
    /// False when the samples ran out before a terminator byte; the text is
    /// then a best-effort prefix of whatever the carrier held.
    pub terminated: bool,
}

/// Read the embedded message out of a WAV file.
pub fn decode_from_file(input_path: &Path) -> Result<DecodedMessage> {
    let carrier = WavCarrier::read(input_path)?;
    let extracted = carrier.extract();

    Ok(DecodedMessage {
        text: bytes_to_message(&extracted.payload),
        terminated: extracted.terminated,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::encode::{encode_to_file, EncodeOptions};
    use crate::wav::{test_carrier, SampleData, WavCarrier};
    use hound::{SampleFormat, WavSpec};
    use tempfile::tempdir;

    #[test]
    fn test_decode_round_trip() {
        let dir = tempdir().unwrap();
        let cover_path = dir.path().join("cover.wav");
        let package_path = dir.path().join("package.wav");

        test_carrier(4000).write(&cover_path).unwrap();

        let options = EncodeOptions {
            message: "the quick brown fox".into(),
        };
        encode_to_file(&cover_path, &package_path, &options).unwrap();

        let decoded = decode_from_file(&package_path).unwrap();
        assert_eq!(
            decoded,
            DecodedMessage {
                text: "the quick brown fox".into(),
                terminated: true,
            }
        );
    }

    #[test]
    fn test_decode_unterminated_carrier() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("noise.wav");

        // Every LSB set: a stream of 0xFF bytes with no terminator
        let spec = WavSpec {
            channels: 1,
            sample_rate: 44100,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let samples = vec![1i16; 80];
        WavCarrier::new(spec, SampleData::I16(samples))
            .write(&path)
            .unwrap();

        let decoded = decode_from_file(&path).unwrap();
        assert!(!decoded.terminated);
        assert_eq!(decoded.text.chars().count(), 10);
        assert!(decoded.text.chars().all(|c| c == '\u{FF}'));
    }

    #[test]
    fn test_decode_missing_file() {
        let dir = tempdir().unwrap();
        let result = decode_from_file(&dir.path().join("nope.wav"));
        assert!(result.is_err());
    }
}
