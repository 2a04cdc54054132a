use crate::error::{Result, UndertoneError};
use crate::sample::CarrierSample;
use crate::stego::bits::message_bits;

/// Embed a payload into the least significant bits of a sample sequence.
///
/// The payload is terminated with a zero byte and expanded into one bit per
/// sample, MSB first within each byte. Each touched sample becomes
/// `(sample & !1) | bit`, so no sample moves by more than 1. Samples past
/// the embedded prefix are copied unchanged, and the input itself is never
/// mutated.
///
/// # Errors
///
/// Returns [`UndertoneError::InsufficientCapacity`] when the carrier has
/// fewer samples than the terminated payload has bits. The check runs
/// before any output is produced.
pub fn embed_message<S: CarrierSample>(samples: &[S], payload: &[u8]) -> Result<Vec<S>> {
    let bits = message_bits(payload);
    if samples.len() < bits.len() {
        return Err(UndertoneError::InsufficientCapacity {
            required: bits.len(),
            available: samples.len(),
        });
    }

    let mut encoded = samples.to_vec();
    for (sample, &bit) in encoded.iter_mut().zip(&bits) {
        *sample = sample.with_lsb(bit);
    }

    Ok(encoded)
}
