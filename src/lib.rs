//! wavenc — byte-exact WAV encoding of in-memory audio buffers.
//!
//! This crate converts a multi-channel `f32` audio buffer into a complete
//! canonical WAV file: the fixed 44-byte RIFF/WAVE/fmt/data header followed
//! by sample data as 16-bit signed PCM (format tag 1) or 32-bit IEEE float
//! (format tag 3), all little-endian.
//!
//! # Overview
//!
//! Encoding is a single-stage pipeline of pure functions: the channel
//! combiner flattens the input (stereo interleave or single-channel
//! passthrough), the header writer emits the canonical header, and the sample
//! encoder fills the data chunk in the chosen binary encoding. There is no
//! I/O, no validation, and no configuration beyond the output sample format;
//! callers may invoke the encoder concurrently with no coordination since
//! each call allocates its own output.
//!
//! # Determinism
//!
//! Output contains no timestamps or variable metadata, so encoding the same
//! input twice is byte-identical. [`wav::data_hash`] exposes a BLAKE3 digest
//! of the data chunk for content-level validation.
//!
//! # Example
//!
//! ```
//! use wavenc::{encode, AudioBuffer, EncodeOptions};
//!
//! let buffer = AudioBuffer::mono(vec![0.0, 0.25, -0.25], 44100);
//! let wav = encode(&buffer, &EncodeOptions::default());
//! assert_eq!(wav.len(), 44 + 3 * 2);
//! assert_eq!(&wav[0..4], b"RIFF");
//! ```
//!
//! # Crate structure
//!
//! - [`encode()`] / [`encode_checked()`] - Entry points
//! - [`buffer`] - Audio input and the [`AudioSource`] contract
//! - [`interleave`] - Channel combining
//! - [`wav`] - Header writer, sample encoders, and data-chunk helpers
//! - [`error`] - Errors of the validating entry point

pub mod buffer;
pub mod encode;
pub mod error;
pub mod interleave;
pub mod wav;

// Re-export main types at crate root
pub use buffer::{AudioBuffer, AudioSource};
pub use encode::{encode, encode_checked, EncodeOptions};
pub use error::{EncodeError, EncodeResult};
pub use wav::{SampleFormat, WavFormat};
