//! Game settings
//!
//! Owned by the surrounding application, read-only for the simulation. The
//! merge boundary clamps numeric values into the documented ranges; the core
//! loop assumes validated settings.

use serde::{Deserialize, Serialize};

/// Allowed range for the base step interval (ms)
pub const BASE_SPEED_RANGE_MS: (u64, u64) = (500, 2000);
/// Allowed range for the per-tick event probability
pub const CHANGE_FREQUENCY_RANGE: (f64, f64) = (0.1, 0.9);

/// One scoring tier: react within `time_ms` to earn `points`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreWindow {
    pub time_ms: u64,
    pub points: u64,
}

/// Tiered reaction windows, evaluated excellent-first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreWindows {
    pub excellent: ScoreWindow,
    pub good: ScoreWindow,
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Step-loop interval before the level multiplier (ms per step)
    pub base_speed_ms: u64,
    /// Chance per step that a mutation event fires, before the level multiplier
    pub change_frequency: f64,
    /// Reaction windows and their point values
    pub score_windows: ScoreWindows,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_speed_ms: 1000,
            change_frequency: 0.3,
            score_windows: ScoreWindows {
                excellent: ScoreWindow {
                    time_ms: 1000,
                    points: 20,
                },
                good: ScoreWindow {
                    time_ms: 2000,
                    points: 10,
                },
            },
        }
    }
}

/// Partial settings update, merged over the current values.
///
/// Deserializes from JSON with any subset of fields present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsPatch {
    pub base_speed_ms: Option<u64>,
    pub change_frequency: Option<f64>,
    pub score_windows: Option<ScoreWindows>,
}

impl Settings {
    /// Merge a partial update, clamping into the documented ranges.
    pub fn apply(&mut self, patch: SettingsPatch) {
        if let Some(speed) = patch.base_speed_ms {
            self.base_speed_ms = speed.clamp(BASE_SPEED_RANGE_MS.0, BASE_SPEED_RANGE_MS.1);
        }
        if let Some(freq) = patch.change_frequency {
            self.change_frequency = if freq.is_finite() {
                freq.clamp(CHANGE_FREQUENCY_RANGE.0, CHANGE_FREQUENCY_RANGE.1)
            } else {
                self.change_frequency
            };
        }
        if let Some(windows) = patch.score_windows {
            self.score_windows = windows;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.base_speed_ms, 1000);
        assert_eq!(settings.change_frequency, 0.3);
        assert_eq!(settings.score_windows.excellent.points, 20);
        assert_eq!(settings.score_windows.good.time_ms, 2000);
    }

    #[test]
    fn test_partial_merge() {
        let mut settings = Settings::default();
        settings.apply(SettingsPatch {
            base_speed_ms: Some(600),
            ..Default::default()
        });
        assert_eq!(settings.base_speed_ms, 600);
        // Untouched fields keep their values
        assert_eq!(settings.change_frequency, 0.3);
    }

    #[test]
    fn test_clamping() {
        let mut settings = Settings::default();
        settings.apply(SettingsPatch {
            base_speed_ms: Some(50),
            change_frequency: Some(5.0),
            ..Default::default()
        });
        assert_eq!(settings.base_speed_ms, 500);
        assert_eq!(settings.change_frequency, 0.9);

        settings.apply(SettingsPatch {
            base_speed_ms: Some(1_000_000),
            change_frequency: Some(-1.0),
            ..Default::default()
        });
        assert_eq!(settings.base_speed_ms, 2000);
        assert_eq!(settings.change_frequency, 0.1);
    }

    #[test]
    fn test_non_finite_frequency_rejected() {
        let mut settings = Settings::default();
        settings.apply(SettingsPatch {
            change_frequency: Some(f64::NAN),
            ..Default::default()
        });
        assert_eq!(settings.change_frequency, 0.3);
    }

    #[test]
    fn test_patch_from_json() {
        let patch: SettingsPatch =
            serde_json::from_str(r#"{"change_frequency": 0.5}"#).unwrap();
        let mut settings = Settings::default();
        settings.apply(patch);
        assert_eq!(settings.change_frequency, 0.5);
        assert_eq!(settings.base_speed_ms, 1000);
    }
}
