//! Channel combining: stereo interleave or single-channel passthrough.

use std::borrow::Cow;

use crate::buffer::AudioSource;

/// Interleaves two channels sample-by-sample (L0, R0, L1, R1, ...).
///
/// The result has length `left.len() + right.len()`. Channels are expected to
/// have equal length; with mismatched lengths, pairs are filled up to the
/// shorter channel and the trailing slots stay zero.
pub fn interleave(left: &[f32], right: &[f32]) -> Vec<f32> {
    let mut result = vec![0.0; left.len() + right.len()];
    for (i, (&l, &r)) in left.iter().zip(right).enumerate() {
        result[2 * i] = l;
        result[2 * i + 1] = r;
    }
    result
}

/// Combines a source's channels into the flat sequence written to the data
/// chunk.
///
/// Exactly two channels are interleaved; any other channel count falls
/// through to channel 0 unchanged, so sources with three or more channels are
/// encoded from their first channel only.
///
/// # Panics
///
/// Panics if the source has no channels.
pub fn combine<S: AudioSource>(source: &S) -> Cow<'_, [f32]> {
    if source.num_channels() == 2 {
        Cow::Owned(interleave(source.channel(0), source.channel(1)))
    } else {
        Cow::Borrowed(source.channel(0))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::buffer::AudioBuffer;

    #[test]
    fn test_interleave_lockstep() {
        let left = [1.0, 2.0, 3.0];
        let right = [4.0, 5.0, 6.0];
        assert_eq!(interleave(&left, &right), vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    }

    #[test]
    fn test_interleave_empty() {
        assert_eq!(interleave(&[], &[]), Vec::<f32>::new());
    }

    #[test]
    fn test_interleave_mismatched_lengths() {
        // Trailing slots beyond the shorter channel stay zero.
        let result = interleave(&[1.0, 2.0, 3.0], &[4.0]);
        assert_eq!(result, vec![1.0, 4.0, 0.0, 0.0]);
    }

    #[test]
    fn test_combine_mono_passthrough() {
        let buffer = AudioBuffer::mono(vec![0.1, 0.2, 0.3], 44100);
        let combined = combine(&buffer);
        assert!(matches!(combined, Cow::Borrowed(_)));
        assert_eq!(combined.as_ref(), &[0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_combine_stereo_interleaves() {
        let buffer = AudioBuffer::stereo(vec![1.0, 2.0], vec![3.0, 4.0], 44100);
        let combined = combine(&buffer);
        assert_eq!(combined.as_ref(), &[1.0, 3.0, 2.0, 4.0]);
    }

    #[test]
    fn test_combine_three_channels_uses_first() {
        let buffer = AudioBuffer::new(
            vec![vec![0.5, 0.5], vec![0.1, 0.1], vec![0.2, 0.2]],
            44100,
        );
        let combined = combine(&buffer);
        assert_eq!(combined.as_ref(), &[0.5, 0.5]);
    }
}
