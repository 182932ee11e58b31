//! Canonical WAV container writer.
//!
//! This module writes the fixed 44-byte RIFF/WAVE/fmt/data header followed by
//! sample data as 16-bit signed PCM (format tag 1) or 32-bit IEEE float
//! (format tag 3). All multi-byte fields are little-endian and the output
//! carries no timestamps or variable metadata, so blobs can be compared or
//! hashed byte-for-byte.

use std::io::{self, Write};

/// Size of the canonical header preceding the data chunk payload.
pub const HEADER_LEN: usize = 44;

/// Sample encoding of the data chunk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SampleFormat {
    /// 16-bit signed integer PCM (format tag 1).
    #[default]
    Pcm16,
    /// 32-bit IEEE 754 float (format tag 3).
    Float32,
}

impl SampleFormat {
    /// WAV `AudioFormat` tag.
    pub fn format_tag(self) -> u16 {
        match self {
            SampleFormat::Pcm16 => 1,
            SampleFormat::Float32 => 3,
        }
    }

    /// Bits per sample.
    pub fn bits_per_sample(self) -> u16 {
        match self {
            SampleFormat::Pcm16 => 16,
            SampleFormat::Float32 => 32,
        }
    }

    /// Bytes per sample (per channel).
    pub fn bytes_per_sample(self) -> u16 {
        self.bits_per_sample() / 8
    }
}

/// WAV file format parameters.
#[derive(Debug, Clone, Copy)]
pub struct WavFormat {
    /// Number of channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Sample encoding of the data chunk.
    pub sample_format: SampleFormat,
}

impl WavFormat {
    /// Creates a format descriptor.
    pub fn new(channels: u16, sample_rate: u32, sample_format: SampleFormat) -> Self {
        Self {
            channels,
            sample_rate,
            sample_format,
        }
    }

    /// Creates a mono WAV format.
    pub fn mono(sample_rate: u32, sample_format: SampleFormat) -> Self {
        Self::new(1, sample_rate, sample_format)
    }

    /// Creates a stereo WAV format.
    pub fn stereo(sample_rate: u32, sample_format: SampleFormat) -> Self {
        Self::new(2, sample_rate, sample_format)
    }

    /// Calculates block align (bytes per sample frame).
    fn block_align(&self) -> u16 {
        self.channels * self.sample_format.bytes_per_sample()
    }

    /// Calculates byte rate (bytes per second).
    fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }
}

/// Writes the 44-byte canonical header for `data_len` bytes of sample data.
///
/// The caller must ensure `data_len + 36` fits in 32 bits; the size fields
/// are written unchecked.
pub fn write_header<W: Write>(writer: &mut W, format: &WavFormat, data_len: u32) -> io::Result<()> {
    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&(36 + data_len).to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // Chunk size (no extension)
    writer.write_all(&format.sample_format.format_tag().to_le_bytes())?;
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.sample_format.bits_per_sample().to_le_bytes())?;

    // data chunk header
    writer.write_all(b"data")?;
    writer.write_all(&data_len.to_le_bytes())?;

    Ok(())
}

/// Writes a complete WAV file: header followed by the raw data chunk.
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, data: &[u8]) -> io::Result<()> {
    write_header(writer, format, data.len() as u32)?;
    writer.write_all(data)
}

/// Converts samples to 16-bit signed PCM bytes, little-endian.
///
/// Samples are clamped to [-1.0, 1.0]. Negative values scale by 32768 and
/// non-negative by 32767, so ±1.0 map to the extremes of the i16 range; the
/// scaled value truncates toward zero.
pub fn samples_to_pcm16(samples: &[f32]) -> Vec<u8> {
    let mut data = Vec::with_capacity(samples.len() * 2);

    for &sample in samples {
        let s = sample.clamp(-1.0, 1.0);
        let scaled = if s < 0.0 { s * 32768.0 } else { s * 32767.0 };
        data.extend_from_slice(&(scaled as i16).to_le_bytes());
    }

    data
}

/// Converts samples to 32-bit IEEE float bytes, little-endian.
///
/// No clamping or scaling; out-of-range and non-finite values are preserved
/// bit-for-bit.
pub fn samples_to_float32(samples: &[f32]) -> Vec<u8> {
    let mut data = Vec::with_capacity(samples.len() * 4);

    for &sample in samples {
        data.extend_from_slice(&sample.to_le_bytes());
    }

    data
}

/// Encodes a flat sample sequence as a complete WAV blob.
pub fn encode_samples(samples: &[f32], format: &WavFormat) -> Vec<u8> {
    let data = match format.sample_format {
        SampleFormat::Pcm16 => samples_to_pcm16(samples),
        SampleFormat::Float32 => samples_to_float32(samples),
    };

    let mut buffer = Vec::with_capacity(HEADER_LEN + data.len());
    write_wav(&mut buffer, format, &data).expect("writing to Vec should not fail");
    buffer
}

/// Extracts the payload of the `data` chunk from a WAV blob.
///
/// Used for comparing encoder output by its audio content only. Returns
/// `None` when the blob is not a well-formed RIFF/WAVE file.
pub fn extract_data_chunk(wav_data: &[u8]) -> Option<&[u8]> {
    if wav_data.len() < HEADER_LEN {
        return None;
    }

    if &wav_data[0..4] != b"RIFF" || &wav_data[8..12] != b"WAVE" {
        return None;
    }

    let mut pos = 12;
    while pos + 8 <= wav_data.len() {
        let chunk_id = &wav_data[pos..pos + 4];
        let chunk_size = u32::from_le_bytes([
            wav_data[pos + 4],
            wav_data[pos + 5],
            wav_data[pos + 6],
            wav_data[pos + 7],
        ]) as usize;

        if chunk_id == b"data" {
            let data_start = pos + 8;
            let data_end = data_start + chunk_size;
            if data_end <= wav_data.len() {
                return Some(&wav_data[data_start..data_end]);
            }
        }

        pos += 8 + chunk_size;
        // Chunks are word-aligned
        if !chunk_size.is_multiple_of(2) {
            pos += 1;
        }
    }

    None
}

/// Computes the BLAKE3 hex digest of the data chunk.
///
/// The hash covers audio content only, so it can be used to validate encoder
/// output independently of the header.
pub fn data_hash(wav_data: &[u8]) -> Option<String> {
    extract_data_chunk(wav_data).map(|data| blake3::hash(data).to_hex().to_string())
}
