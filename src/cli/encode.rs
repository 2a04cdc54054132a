use crate::error::Result;
use crate::stego::message_to_bytes;
use crate::wav::WavCarrier;
use std::path::Path;

/// Options for the encode command
#[derive(Debug, Clone)]
pub struct EncodeOptions {
    pub message: String,
}

/// Embed a message into a cover WAV file and write the result.
/// The output file is only created once embedding has succeeded, so a
/// capacity failure leaves nothing behind.
/// Returns the number of message bytes embedded, terminator excluded.
pub fn encode_to_file(
    input_path: &Path,
    output_path: &Path,
    options: &EncodeOptions,
) -> Result<usize> {
    let payload = message_to_bytes(&options.message)?;
    let cover = WavCarrier::read(input_path)?;

    let encoded = cover.embed(&payload)?;
    encoded.write(output_path)?;

    Ok(payload.len())
}
