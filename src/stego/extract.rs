use crate::sample::CarrierSample;
use crate::stego::bits::{bits_to_byte, TERMINATOR};

/// Result of scanning a sample sequence for an embedded message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    /// Byte codes accumulated before the terminator, terminator excluded.
    pub payload: Vec<u8>,
    /// Whether a terminator byte was actually seen. When false the samples
    /// ran out first and the payload is a best-effort prefix.
    pub terminated: bool,
}

/// Read an embedded message back out of a sample sequence.
///
/// Consecutive non-overlapping groups of 8 samples are recomposed into
/// bytes from their least significant bits, MSB first, until a zero byte is
/// found. Trailing samples that do not fill a full group are ignored.
/// Running out of samples before a terminator is not an error; the caller
/// can tell from [`Extracted::terminated`].
pub fn extract_message<S: CarrierSample>(samples: &[S]) -> Extracted {
    let mut payload = Vec::new();

    for group in samples.chunks_exact(8) {
        let mut bits = [0u8; 8];
        for (bit, sample) in bits.iter_mut().zip(group) {
            *bit = sample.lsb();
        }

        let byte = bits_to_byte(&bits);
        if byte == TERMINATOR {
            return Extracted {
                payload,
                terminated: true,
            };
        }
        payload.push(byte);
    }

    Extracted {
        payload,
        terminated: false,
    }
}
