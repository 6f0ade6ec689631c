//! Track - an ordered group of courses with pluggable aggregation.

use std::fmt;

use crate::course::Course;
use crate::task::format_percent;
use crate::title::normalize_title;

/// Strategy for combining course progress into track progress.
///
/// Implementations are stateless and must return a fraction in `[0, 1]`.
pub trait ProgressStrategy {
    /// Compute the track's progress.
    fn calculate(&self, track: &Track) -> f64;

    /// Short name for reports.
    fn name(&self) -> &'static str;
}

/// A learning track. Holds no aggregation rule of its own; the strategy is
/// supplied on every progress query.
#[derive(Debug)]
pub struct Track {
    name: String,
    courses: Vec<Course>,
}

impl Track {
    /// Create an empty track ("Track" when the name is empty).
    pub fn new(name: &str) -> Self {
        Self {
            name: normalize_title(name, "Track"),
            courses: Vec::new(),
        }
    }

    /// Track name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the track.
    pub fn set_name(&mut self, name: &str) {
        self.name = normalize_title(name, "Track");
    }

    /// Courses in insertion order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Course at `index`, mutable.
    pub fn course_mut(&mut self, index: usize) -> Option<&mut Course> {
        self.courses.get_mut(index)
    }

    /// Append a course. `None` is ignored.
    pub fn add_course(&mut self, course: impl Into<Option<Course>>) {
        if let Some(course) = course.into() {
            self.courses.push(course);
        }
    }

    /// Progress under `strategy`; 0.0 when no strategy is given.
    pub fn progress(&self, strategy: Option<&dyn ProgressStrategy>) -> f64 {
        match strategy {
            Some(strategy) => strategy.calculate(self),
            None => 0.0,
        }
    }

    /// Multi-line description. The progress line is only present with a strategy.
    pub fn summary(&self, strategy: Option<&dyn ProgressStrategy>) -> String {
        let mut lines = vec![
            format!("Track: {}", self.name),
            format!("Courses: {}", self.courses.len()),
        ];
        if let Some(strategy) = strategy {
            lines.push(format!(
                "Track progress ({}): {}",
                strategy.name(),
                format_percent(self.progress(Some(strategy)))
            ));
        }
        lines.join("\n")
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Track: {} ({} courses)", self.name, self.courses.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FirstCourse;

    impl ProgressStrategy for FirstCourse {
        fn calculate(&self, track: &Track) -> f64 {
            track.courses().first().map(Course::progress).unwrap_or(0.0)
        }

        fn name(&self) -> &'static str {
            "first"
        }
    }

    #[test]
    fn test_track_without_strategy() {
        let mut track = Track::new("backend");
        track.add_course(Course::new("rust", 10));
        assert_eq!(track.progress(None), 0.0);
        assert!(!track.summary(None).contains("progress"));
    }

    #[test]
    fn test_track_delegates_to_strategy() {
        let mut track = Track::new("");
        assert_eq!(track.name(), "Track");
        track.add_course(Course::new("rust", 10));
        track.add_course(None);
        assert_eq!(track.courses().len(), 1);
        assert_eq!(track.progress(Some(&FirstCourse)), 0.0);
        assert!(track.summary(Some(&FirstCourse)).contains("Track progress (first): 0%"));
    }

    #[test]
    fn test_track_display() {
        let track = Track::new("systems programming");
        assert_eq!(track.to_string(), "Track: Systems Programming (0 courses)");
    }
}
