//! Error types for the validating encoder entry point.

use thiserror::Error;

/// Result type for checked encoding.
pub type EncodeResult<T> = Result<T, EncodeError>;

/// Errors reported by [`encode_checked`](crate::encode_checked).
///
/// The lenient [`encode`](crate::encode) path defines no error conditions;
/// these are raised only by the validating variant.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    /// The source exposes no channels at all.
    #[error("audio source has no channels")]
    NoChannels,

    /// More channels than the stereo interleave supports.
    #[error("unsupported channel count: {channels} (at most 2)")]
    UnsupportedChannelCount {
        /// Number of channels the source exposes.
        channels: u16,
    },

    /// A channel is shorter or longer than channel 0.
    #[error("channel {channel} has {found} samples, expected {expected}")]
    ChannelLengthMismatch {
        /// Index of the mismatched channel.
        channel: usize,
        /// Length of channel 0.
        expected: usize,
        /// Length of the mismatched channel.
        found: usize,
    },

    /// Zero sample rate.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Data chunk would not fit the 32-bit RIFF size fields.
    #[error("data chunk of {bytes} bytes exceeds the 32-bit WAV size limit")]
    DataTooLarge {
        /// Size the data chunk would have.
        bytes: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_message_names_channel() {
        let err = EncodeError::ChannelLengthMismatch {
            channel: 1,
            expected: 480,
            found: 479,
        };
        assert!(err.to_string().contains("channel 1"));
        assert!(err.to_string().contains("480"));
    }

    #[test]
    fn test_sample_rate_message() {
        let err = EncodeError::InvalidSampleRate { rate: 0 };
        assert!(err.to_string().contains("invalid sample rate: 0"));
    }
}
