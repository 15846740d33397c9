use zeroize::Zeroize;

use crate::domain::DomainError;

/// Sample rate the worker expects. Upstream decoding is responsible for
/// resampling to this rate; this module does not resample.
pub const SAMPLE_RATE: u32 = 16_000;

/// Decoded input audio with one or more channels.
/// Sample data is zeroed on drop and never touches disk.
#[derive(Debug, Zeroize)]
#[zeroize(drop)]
pub struct AudioInput {
    /// Per-channel PCM samples in [-1, 1]. All channels have equal length.
    channels: Vec<Vec<f32>>,
    /// Sample rate in Hz.
    sample_rate: u32,
}

impl AudioInput {
    /// Create an input buffer from decoded channel data.
    ///
    /// Returns an error when no channels are given or channel lengths
    /// differ (the frame count would be ambiguous).
    pub fn new(channels: Vec<Vec<f32>>, sample_rate: u32) -> Result<Self, DomainError> {
        let first_len = match channels.first() {
            Some(c) => c.len(),
            None => {
                return Err(DomainError::AudioDecode(
                    "Audio input has no channels".to_string(),
                ))
            }
        };

        if channels.iter().any(|c| c.len() != first_len) {
            return Err(DomainError::AudioDecode(
                "Audio channels have mismatched lengths".to_string(),
            ));
        }

        Ok(Self {
            channels,
            sample_rate,
        })
    }

    /// Number of channels.
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Number of frames (samples per channel).
    pub fn frames(&self) -> usize {
        self.channels.first().map(|c| c.len()).unwrap_or(0)
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Duration in seconds.
    pub fn duration_secs(&self) -> f32 {
        self.frames() as f32 / self.sample_rate as f32
    }

    /// Mix down to a single channel.
    ///
    /// Mono passes through unchanged. Stereo uses an equal-power downmix:
    /// `sqrt(2) * (left + right) / 2`. For more than two channels only the
    /// first channel is used (documented simplification, not a full
    /// downmix). Output length equals the frame count.
    pub fn to_mono(&self) -> Vec<f32> {
        match self.channels.len() {
            2 => {
                let scale = std::f32::consts::SQRT_2 / 2.0;
                let left = &self.channels[0];
                let right = &self.channels[1];
                left.iter()
                    .zip(right.iter())
                    .map(|(l, r)| scale * (l + r))
                    .collect()
            }
            _ => self.channels[0].clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_rejected() {
        assert!(AudioInput::new(vec![], SAMPLE_RATE).is_err());
    }

    #[test]
    fn test_mismatched_channels_rejected() {
        let result = AudioInput::new(vec![vec![0.0; 10], vec![0.0; 9]], SAMPLE_RATE);
        assert!(result.is_err());
    }

    #[test]
    fn test_mono_passthrough() {
        let samples = vec![0.1, -0.2, 0.3, 0.9];
        let input = AudioInput::new(vec![samples.clone()], SAMPLE_RATE).unwrap();
        assert_eq!(input.to_mono(), samples);
    }

    #[test]
    fn test_stereo_equal_power_downmix() {
        let left = vec![0.5, -0.25, 0.0, 1.0];
        let right = vec![0.5, 0.25, 0.0, -1.0];
        let input = AudioInput::new(vec![left.clone(), right.clone()], SAMPLE_RATE).unwrap();

        let mono = input.to_mono();
        assert_eq!(mono.len(), left.len());
        for i in 0..left.len() {
            let expected = 2.0f32.sqrt() * (left[i] + right[i]) / 2.0;
            assert!((mono[i] - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn test_multichannel_uses_first_channel() {
        let first = vec![0.1, 0.2, 0.3];
        let input = AudioInput::new(
            vec![first.clone(), vec![0.9; 3], vec![-0.9; 3]],
            SAMPLE_RATE,
        )
        .unwrap();
        assert_eq!(input.to_mono(), first);
    }

    #[test]
    fn test_duration() {
        let input = AudioInput::new(vec![vec![0.0; 32_000]], SAMPLE_RATE).unwrap();
        assert!((input.duration_secs() - 2.0).abs() < 0.001);
    }
}
