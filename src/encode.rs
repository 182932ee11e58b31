//! Public encoding entry points.

use crate::buffer::AudioSource;
use crate::error::{EncodeError, EncodeResult};
use crate::interleave::combine;
use crate::wav::{encode_samples, SampleFormat, WavFormat};

/// Encoder configuration.
///
/// `float32` selects 32-bit IEEE float output (format tag 3); the default is
/// 16-bit signed PCM (format tag 1). This is the only option.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Write samples as 32-bit IEEE floats instead of 16-bit PCM.
    pub float32: bool,
}

impl EncodeOptions {
    fn sample_format(&self) -> SampleFormat {
        if self.float32 {
            SampleFormat::Float32
        } else {
            SampleFormat::Pcm16
        }
    }
}

/// Encodes an audio source as a complete WAV blob.
///
/// The output is always `44 + sample_count * bytes_per_sample` bytes: the
/// canonical header followed by the data chunk. Exactly two channels are
/// interleaved; any other channel count is encoded from channel 0 only, with
/// the source's channel count still written to the header.
///
/// No input validation is performed: out-of-range samples are silently
/// clamped on the PCM path and passed through unclamped on the float path,
/// and the header size fields wrap if the data chunk exceeds the 32-bit
/// limit. Use [`encode_checked`] to reject such inputs instead.
///
/// # Panics
///
/// Panics if the source has no channels.
pub fn encode<S: AudioSource>(source: &S, options: &EncodeOptions) -> Vec<u8> {
    let format = WavFormat::new(
        source.num_channels(),
        source.sample_rate(),
        options.sample_format(),
    );
    let samples = combine(source);
    encode_samples(&samples, &format)
}

/// Validating variant of [`encode`].
///
/// Rejects the input shapes the lenient path silently degrades on: no
/// channels, more than two channels, channel-length mismatch, zero sample
/// rate, and data chunks too large for the 32-bit RIFF size fields. For
/// sources [`encode`] already handles well-formed, the output is
/// byte-identical.
pub fn encode_checked<S: AudioSource>(
    source: &S,
    options: &EncodeOptions,
) -> EncodeResult<Vec<u8>> {
    let channels = source.num_channels();
    if channels == 0 {
        return Err(EncodeError::NoChannels);
    }
    if channels > 2 {
        return Err(EncodeError::UnsupportedChannelCount { channels });
    }

    let expected = source.channel(0).len();
    for channel in 1..channels as usize {
        let found = source.channel(channel).len();
        if found != expected {
            return Err(EncodeError::ChannelLengthMismatch {
                channel,
                expected,
                found,
            });
        }
    }

    let rate = source.sample_rate();
    if rate == 0 {
        return Err(EncodeError::InvalidSampleRate { rate });
    }

    let bytes = expected as u64
        * channels as u64
        * options.sample_format().bytes_per_sample() as u64;
    if bytes > u32::MAX as u64 - 36 {
        return Err(EncodeError::DataTooLarge { bytes });
    }

    Ok(encode(source, options))
}
