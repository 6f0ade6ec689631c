//! Track aggregation strategies.

use serde::{Deserialize, Serialize};
use studytrack_core::{Course, ProgressStrategy, Track};
use tracing::debug;

/// Plain mean of course progress.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleMean;

impl ProgressStrategy for SimpleMean {
    fn calculate(&self, track: &Track) -> f64 {
        let courses = track.courses();
        if courses.is_empty() {
            return 0.0;
        }
        let total: f64 = courses.iter().map(Course::progress).sum();
        let progress = total / courses.len() as f64;
        debug!("Simple mean over {} courses: {:.4}", courses.len(), progress);
        progress
    }

    fn name(&self) -> &'static str {
        "simple mean"
    }
}

/// Mean of course progress weighted by course duration.
///
/// A course without a duration counts with weight 1 so it still shows up
/// in the result.
#[derive(Debug, Clone, Copy, Default)]
pub struct DurationWeightedMean;

impl DurationWeightedMean {
    /// Weight of a single course.
    pub fn weight(course: &Course) -> f64 {
        match course.duration_hours() {
            0 => 1.0,
            hours => f64::from(hours),
        }
    }
}

impl ProgressStrategy for DurationWeightedMean {
    fn calculate(&self, track: &Track) -> f64 {
        let courses = track.courses();
        if courses.is_empty() {
            return 0.0;
        }

        let (weighted, weights) = courses.iter().fold((0.0, 0.0), |(weighted, weights), course| {
            let weight = Self::weight(course);
            (weighted + course.progress() * weight, weights + weight)
        });
        if weights == 0.0 {
            return 0.0;
        }

        let progress = weighted / weights;
        debug!(
            "Duration-weighted mean over {} courses ({} weight): {:.4}",
            courses.len(),
            weights,
            progress
        );
        progress
    }

    fn name(&self) -> &'static str {
        "duration-weighted mean"
    }
}

/// Strategies available for selection at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// [`SimpleMean`]
    #[default]
    Simple,
    /// [`DurationWeightedMean`]
    Weighted,
}

impl StrategyKind {
    /// Every strategy.
    pub const ALL: [StrategyKind; 2] = [Self::Simple, Self::Weighted];
}

impl ProgressStrategy for StrategyKind {
    fn calculate(&self, track: &Track) -> f64 {
        match self {
            Self::Simple => SimpleMean.calculate(track),
            Self::Weighted => DurationWeightedMean.calculate(track),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Simple => SimpleMean.name(),
            Self::Weighted => DurationWeightedMean.name(),
        }
    }
}
