//! Tunable parameters for crop analysis.

use serde::{Deserialize, Serialize};

/// Every numeric knob of the crop analysis.
///
/// The defaults are the classic smartcrop tuning. Raising `step`,
/// `score_down_sample` or lowering `prescale_min` trades accuracy for speed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CropSettings {
    /// Weight of the detail channel in the ranking score.
    pub detail_weight: f64,
    /// Reference skin tone direction in RGB space.
    pub skin_color: [f64; 3],
    /// Added to detail before multiplying the skin channel.
    pub skin_bias: f64,
    /// Normalized luma range in which a pixel may count as skin.
    pub skin_brightness_min: f64,
    pub skin_brightness_max: f64,
    /// Minimum skin likelihood (0 to 1) for a pixel to count as skin.
    pub skin_threshold: f64,
    /// Weight of the skin channel in the ranking score.
    pub skin_weight: f64,
    /// Normalized luma range in which a pixel may count as saturated.
    pub saturation_brightness_min: f64,
    pub saturation_brightness_max: f64,
    /// Minimum HSL saturation (0 to 1) for a pixel to count as saturated.
    pub saturation_threshold: f64,
    /// Added to detail before multiplying the saturation channel.
    pub saturation_bias: f64,
    /// Weight of the saturation channel in the ranking score.
    pub saturation_weight: f64,
    /// Sampling stride (pixels) used by the scorer on both axes.
    pub score_down_sample: u32,
    /// Sliding-window stride (pixels) used by the candidate generator.
    pub step: u32,
    /// Decrement between successive candidate scales.
    pub scale_step: f64,
    /// Smallest candidate scale relative to the largest crop that fits.
    ///
    /// The analyzer never goes below the scale at which the window matches
    /// the requested output size, whatever this is set to.
    pub min_scale: f64,
    /// Largest candidate scale.
    pub max_scale: f64,
    /// Width of the band (in normalized half-extent units) along each
    /// candidate edge that is penalized.
    pub edge_radius: f64,
    /// Strength of the edge penalty (negative).
    pub edge_weight: f64,
    /// Importance of samples outside the candidate (negative).
    pub outside_importance: f64,
    /// Boost samples near the rule-of-thirds lines.
    pub rule_of_thirds: bool,
    /// Downscale large sources before analysis.
    pub prescale: bool,
    /// Smaller source dimension above which prescaling kicks in; the
    /// analysis buffer's smaller side is reduced to this many pixels.
    pub prescale_min: f64,
}

impl Default for CropSettings {
    fn default() -> Self {
        Self {
            detail_weight: 0.2,
            skin_color: [0.78, 0.57, 0.44],
            skin_bias: 0.01,
            skin_brightness_min: 0.2,
            skin_brightness_max: 1.0,
            skin_threshold: 0.8,
            skin_weight: 1.8,
            saturation_brightness_min: 0.05,
            saturation_brightness_max: 0.9,
            saturation_threshold: 0.4,
            saturation_bias: 0.2,
            saturation_weight: 0.3,
            score_down_sample: 8,
            step: 8,
            scale_step: 0.1,
            min_scale: 0.1,
            max_scale: 1.0,
            edge_radius: 0.4,
            edge_weight: -20.0,
            outside_importance: -0.5,
            rule_of_thirds: true,
            prescale: true,
            prescale_min: 400.0,
        }
    }
}

impl CropSettings {
    /// Create settings with the default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if all values are at their defaults
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = CropSettings::new();
        assert!(settings.is_default());
        assert_eq!(settings.step, 8);
        assert_eq!(settings.score_down_sample, 8);
        assert!(settings.rule_of_thirds);
        assert!(settings.prescale);
    }

    #[test]
    fn test_settings_not_default() {
        let mut settings = CropSettings::new();
        settings.step = 4;
        assert!(!settings.is_default());
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        // Deserialization falls back to defaults for missing fields.
        let settings: CropSettings = serde::de::Deserialize::deserialize(
            serde::de::value::MapDeserializer::<_, serde::de::value::Error>::new(
                std::iter::once(("step", 4u32)),
            ),
        )
        .unwrap();
        assert_eq!(settings.step, 4);
        assert_eq!(settings.prescale_min, 400.0);
    }
}
