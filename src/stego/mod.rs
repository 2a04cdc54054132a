//! The pure embedding and extraction transforms.
//!
//! Everything in this module operates on in-memory data only: a flat slice
//! of carrier samples in and a new vector out. File handling lives in
//! [`crate::wav`] and [`crate::cli`].

pub mod bits;
pub mod embed;
pub mod extract;
pub mod message;

pub use bits::*;
pub use embed::*;
pub use extract::*;
pub use message::*;
