use crate::generator::template::{clock_time, coordinate_line, depth_line, LINE_ENDING};
use anyhow::Context;
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Shape of a synthetic survey: a positioning log and a sounder log that
/// overlap in time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SurveyProfile {
    /// Number of coordinate fixes.
    pub fixes: usize,
    /// Number of soundings; defaults to enough to cover every fix.
    pub soundings: Option<usize>,
    /// Soundings recorded before the first fix.
    pub lead: usize,
    /// Time of day of the first fix, in seconds.
    pub start_seconds: u32,
    pub interval_seconds: u32,
    pub origin_x: f64,
    pub origin_y: f64,
    pub mean_depth: f64,
    pub noise: f64,
    pub seed: u64,
}

impl Default for SurveyProfile {
    fn default() -> Self {
        Self {
            fixes: 120,
            soundings: None,
            lead: 5,
            start_seconds: 8 * 3600 + 15 * 60,
            interval_seconds: 1,
            origin_x: 4_712_345.0,
            origin_y: 8_512_345.0,
            mean_depth: 6.5,
            noise: 0.4,
            seed: 0,
        }
    }
}

impl SurveyProfile {
    fn sounding_count(&self) -> usize {
        self.soundings.unwrap_or(self.lead + self.fixes)
    }

    fn interval(&self) -> u32 {
        self.interval_seconds.max(1)
    }

    /// Time of day the sounder started; this is the clock delta that lines
    /// both logs up.
    pub fn recording_start(&self) -> u32 {
        let lead_seconds = (self.lead as u32 + 1).saturating_mul(self.interval());
        self.start_seconds.saturating_sub(lead_seconds)
    }
}

/// Generated file contents plus the clock delta that aligns them.
#[derive(Debug, Clone)]
pub struct SurveyText {
    pub coordinates: String,
    pub depths: String,
    pub clock_delta: String,
}

#[derive(Debug, Clone)]
pub struct GeneratedSurvey {
    pub coordinates: PathBuf,
    pub depths: PathBuf,
    pub clock_delta: String,
}

pub fn build_survey(profile: &SurveyProfile) -> SurveyText {
    let mut rng = StdRng::seed_from_u64(profile.seed);
    let interval = profile.interval();
    let recording_start = profile.recording_start();
    let noise = profile.noise.abs();

    let mut x = profile.origin_x;
    let mut y = profile.origin_y;
    let coordinates: Vec<String> = (0..profile.fixes)
        .map(|index| {
            x += rng.gen_range(0.5..1.5);
            y += rng.gen_range(-0.5..0.5);
            let seconds = recording_start + (profile.lead + 1 + index) as u32 * interval;
            coordinate_line(seconds, x, y)
        })
        .collect();

    let depths: Vec<String> = (0..profile.sounding_count())
        .map(|index| {
            let jitter = if noise > 0.0 {
                rng.gen_range(-noise..noise)
            } else {
                0.0
            };
            let height = (profile.mean_depth + jitter).max(0.1);
            depth_line(index + 1, (index as u32 + 1) * interval, height)
        })
        .collect();

    SurveyText {
        coordinates: coordinates.join(LINE_ENDING) + LINE_ENDING,
        depths: depths.join(LINE_ENDING) + LINE_ENDING,
        clock_delta: clock_time(recording_start),
    }
}

/// Writes `coordinates.txt` and `depths.txt` into `dir`.
pub fn write_survey(dir: &Path, profile: &SurveyProfile) -> anyhow::Result<GeneratedSurvey> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let survey = build_survey(profile);

    let coordinates = dir.join("coordinates.txt");
    fs::write(&coordinates, &survey.coordinates)
        .with_context(|| format!("writing {}", coordinates.display()))?;
    let depths = dir.join("depths.txt");
    fs::write(&depths, &survey.depths).with_context(|| format!("writing {}", depths.display()))?;

    Ok(GeneratedSurvey {
        coordinates,
        depths,
        clock_delta: survey.clock_delta,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_builds_expected_line_counts() {
        let survey = build_survey(&SurveyProfile {
            fixes: 10,
            lead: 2,
            ..Default::default()
        });
        assert_eq!(survey.coordinates.lines().count(), 10);
        assert_eq!(survey.depths.lines().count(), 12);
        assert_eq!(survey.clock_delta, "08:14:57");
    }

    #[test]
    fn generator_is_deterministic_per_seed() {
        let profile = SurveyProfile {
            fixes: 5,
            seed: 13,
            ..Default::default()
        };
        let first = build_survey(&profile);
        let second = build_survey(&profile);
        assert_eq!(first.coordinates, second.coordinates);
        assert_eq!(first.depths, second.depths);
    }
}
