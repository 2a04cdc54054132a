/// A fixed-width integer audio sample whose least significant bit can be
/// read and replaced without disturbing the higher bits.
///
/// Implemented for every sample width the WAV reader produces. Replacing
/// bit 0 moves a sample by at most 1, which is what keeps the embedding
/// inaudible.
pub trait CarrierSample: Copy {
    /// Returns bit 0 of the sample, as 0 or 1.
    fn lsb(self) -> u8;

    /// Returns the sample with bit 0 forced to `bit` (0 or 1).
    fn with_lsb(self, bit: u8) -> Self;

    /// Returns the sample with bit 0 forced to 0.
    fn clear_lsb(self) -> Self {
        self.with_lsb(0)
    }
}

macro_rules! impl_carrier_sample {
    ($($t:ty),*) => {
        $(
            impl CarrierSample for $t {
                fn lsb(self) -> u8 {
                    (self & 1) as u8
                }

                fn with_lsb(self, bit: u8) -> Self {
                    debug_assert!(bit <= 1, "bit must be 0 or 1, got {}", bit);
                    (self & !1) | bit as $t
                }
            }
        )*
    };
}

impl_carrier_sample!(i8, i16, i32);
