//! In-memory audio input and the source contract consumed by the encoder.

/// Read-only view of multi-channel audio offered to the encoder.
///
/// This mirrors the minimal surface of a web-audio `AudioBuffer`: channel
/// count, sample rate, and per-channel sample access. All channels are
/// expected to have equal length; the lenient encoder does not check this.
pub trait AudioSource {
    /// Number of channels.
    fn num_channels(&self) -> u16;

    /// Sample rate in Hz.
    fn sample_rate(&self) -> u32;

    /// Samples of one channel, nominally in [-1.0, 1.0] but not clamped.
    ///
    /// # Panics
    ///
    /// Panics if `index >= num_channels()`.
    fn channel(&self, index: usize) -> &[f32];
}

/// Owned multi-channel sample storage.
#[derive(Debug, Clone)]
pub struct AudioBuffer {
    channels: Vec<Vec<f32>>,
    sample_rate: u32,
}

impl AudioBuffer {
    /// Creates a buffer from per-channel sample vectors.
    pub fn new(channels: Vec<Vec<f32>>, sample_rate: u32) -> Self {
        Self {
            channels,
            sample_rate,
        }
    }

    /// Creates a single-channel buffer.
    pub fn mono(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self::new(vec![samples], sample_rate)
    }

    /// Creates a two-channel buffer.
    pub fn stereo(left: Vec<f32>, right: Vec<f32>, sample_rate: u32) -> Self {
        Self::new(vec![left, right], sample_rate)
    }
}

impl AudioSource for AudioBuffer {
    fn num_channels(&self) -> u16 {
        self.channels.len() as u16
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn channel(&self, index: usize) -> &[f32] {
        &self.channels[index]
    }
}
