//! WAV container reading and writing.
//!
//! The carrier is held exactly as it appears in the file: the hound
//! [`WavSpec`] plus the interleaved samples at their original bit width.
//! File order is also embedding order, so multi-channel audio needs no
//! channel-aware handling; the spec carries the shape back out at write
//! time.

use crate::error::{Result, UndertoneError};
use crate::stego::{embed_message, extract_message, Extracted};
use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use std::io::{Read, Seek, Write};
use std::path::Path;

/// Interleaved PCM samples at their original width.
///
/// 8-bit files map to `I8`, up to 16 bits to `I16`, and 24- or 32-bit
/// files to `I32`, matching what hound can represent losslessly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleData {
    I8(Vec<i8>),
    I16(Vec<i16>),
    I32(Vec<i32>),
}

impl SampleData {
    /// Total number of samples across all channels.
    pub fn len(&self) -> usize {
        match self {
            SampleData::I8(samples) => samples.len(),
            SampleData::I16(samples) => samples.len(),
            SampleData::I32(samples) => samples.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A WAV file held in memory: format descriptor plus flat sample data.
#[derive(Debug, Clone)]
pub struct WavCarrier {
    spec: WavSpec,
    samples: SampleData,
}

impl WavCarrier {
    pub fn new(spec: WavSpec, samples: SampleData) -> Self {
        Self { spec, samples }
    }

    /// Read a WAV file from disk, preserving bit width and signedness.
    ///
    /// # Errors
    ///
    /// Float PCM is rejected with [`UndertoneError::UnsupportedFormat`]:
    /// its bit 0 is mantissa noise with no stable round-trip guarantee.
    pub fn read(path: &Path) -> Result<Self> {
        let reader = WavReader::open(path)?;
        Self::from_reader(reader)
    }

    fn from_reader<R: Read>(mut reader: WavReader<R>) -> Result<Self> {
        let spec = reader.spec();
        if spec.sample_format != SampleFormat::Int {
            return Err(UndertoneError::UnsupportedFormat(
                "float PCM has no stable least significant bit".into(),
            ));
        }

        let samples = match spec.bits_per_sample {
            1..=8 => SampleData::I8(collect_samples(&mut reader)?),
            9..=16 => SampleData::I16(collect_samples(&mut reader)?),
            17..=32 => SampleData::I32(collect_samples(&mut reader)?),
            bits => {
                return Err(UndertoneError::UnsupportedFormat(format!(
                    "{} bits per sample",
                    bits
                )))
            }
        };

        Ok(Self { spec, samples })
    }

    /// Write the carrier to disk with its original format descriptor.
    /// No resampling, no bit-depth conversion; LSBs round-trip exactly.
    pub fn write(&self, path: &Path) -> Result<()> {
        let mut writer = WavWriter::create(path, self.spec)?;
        match &self.samples {
            SampleData::I8(samples) => write_samples(&mut writer, samples)?,
            SampleData::I16(samples) => write_samples(&mut writer, samples)?,
            SampleData::I32(samples) => write_samples(&mut writer, samples)?,
        }
        writer.finalize()?;
        Ok(())
    }

    /// Embed a payload, returning a new carrier with the same format.
    pub fn embed(&self, payload: &[u8]) -> Result<Self> {
        let samples = match &self.samples {
            SampleData::I8(samples) => SampleData::I8(embed_message(samples, payload)?),
            SampleData::I16(samples) => SampleData::I16(embed_message(samples, payload)?),
            SampleData::I32(samples) => SampleData::I32(embed_message(samples, payload)?),
        };

        Ok(Self {
            spec: self.spec,
            samples,
        })
    }

    /// Extract whatever message the carrier holds.
    pub fn extract(&self) -> Extracted {
        match &self.samples {
            SampleData::I8(samples) => extract_message(samples),
            SampleData::I16(samples) => extract_message(samples),
            SampleData::I32(samples) => extract_message(samples),
        }
    }

    /// How many message bytes fit in this carrier, terminator excluded.
    pub fn capacity_bytes(&self) -> usize {
        (self.samples.len() / 8).saturating_sub(1)
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    pub fn spec(&self) -> WavSpec {
        self.spec
    }

    pub fn samples(&self) -> &SampleData {
        &self.samples
    }
}

fn collect_samples<R, S>(reader: &mut WavReader<R>) -> Result<Vec<S>>
where
    R: Read,
    S: hound::Sample,
{
    let samples: std::result::Result<Vec<S>, hound::Error> = reader.samples::<S>().collect();
    samples.map_err(UndertoneError::from)
}

fn write_samples<W, S>(writer: &mut WavWriter<W>, samples: &[S]) -> Result<()>
where
    W: Write + Seek,
    S: hound::Sample + Copy,
{
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    Ok(())
}

/// A mono 16-bit 440 Hz test tone.
#[cfg(test)]
pub(crate) fn test_carrier(sample_count: usize) -> WavCarrier {
    let spec = WavSpec {
        channels: 1,
        sample_rate: 44100,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let samples: Vec<i16> = (0..sample_count)
        .map(|i| {
            let t = i as f64 / 44100.0;
            (f64::sin(2.0 * std::f64::consts::PI * 440.0 * t) * 16000.0) as i16
        })
        .collect();

    WavCarrier::new(spec, SampleData::I16(samples))
}
