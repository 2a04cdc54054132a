//! Undertone - LSB steganography for PCM WAV audio
//!
//! Hides a short text message inside a WAV file by overwriting the least
//! significant bit of each sample, one message bit per sample. A touched
//! sample moves by at most 1, which is inaudible in playback, and every
//! other bit of the carrier is preserved exactly.
//!
//! ## Transform Pipeline
//!
//! ```text
//! Encode: Message → Byte codes → Terminator → Bit stream → LSB substitution → WAV
//! Decode: WAV → LSB harvest → Bytes (8 samples each) → Stop at zero byte → Message
//! ```
//!
//! - **Byte codes**: one byte per character; NUL and code points above
//!   U+00FF are rejected so the round trip is exact
//! - **Terminator**: a single zero byte appended before embedding marks the
//!   end of the hidden content
//! - **Bit stream**: 8 bits per byte, most significant first
//! - **LSB substitution**: `(sample & !1) | bit`, higher bits untouched
//!
//! The transforms are pure functions over flat sample slices; reading and
//! writing the audio container lives in [`wav`], and the sample width seam
//! is the [`CarrierSample`] trait, so 8-, 16-, 24- and 32-bit PCM all work.
//!
//! ## Example
//!
//! ```no_run
//! use undertone::cli::{decode_from_file, encode_to_file, EncodeOptions};
//! use std::path::Path;
//!
//! // Hide a message
//! let options = EncodeOptions {
//!     message: "meet at dawn".into(),
//! };
//! encode_to_file(
//!     Path::new("cover.wav"),
//!     Path::new("package.wav"),
//!     &options,
//! ).unwrap();
//!
//! // Recover it
//! let decoded = decode_from_file(Path::new("package.wav")).unwrap();
//! assert_eq!(decoded.text, "meet at dawn");
//! ```

pub mod cli;
pub mod error;
pub mod sample;
pub mod stego;
pub mod wav;

pub use error::{Result, UndertoneError};
pub use sample::CarrierSample;
pub use stego::{embed_message, extract_message, Extracted};
pub use wav::{SampleData, WavCarrier};
