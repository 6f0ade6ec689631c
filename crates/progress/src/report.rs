//! Progress report - a serializable snapshot of a track.

use chrono::{DateTime, Utc};
use serde::Serialize;
use studytrack_core::{format_percent, Course, Lesson, ProgressStrategy, StudyTask, TaskStatus, Track};

use crate::strategy::StrategyKind;

/// What to put in a report.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportConfig {
    /// Strategy used for the track total
    pub strategy: StrategyKind,
    /// Include one entry per task
    pub include_tasks: bool,
}

impl ReportConfig {
    /// Set the strategy.
    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    /// Include per-task entries.
    pub fn with_tasks(mut self, include_tasks: bool) -> Self {
        self.include_tasks = include_tasks;
        self
    }
}

/// A snapshot of track progress at a point in time.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressReport {
    /// When the snapshot was taken
    pub timestamp: DateTime<Utc>,

    /// Track name
    pub track: String,

    /// Strategy used for `progress`
    pub strategy: StrategyKind,

    /// Track progress in `[0, 1]`
    pub progress: f64,

    /// Per-course breakdown
    pub courses: Vec<CourseReport>,
}

/// Course line of a report.
#[derive(Debug, Clone, Serialize)]
pub struct CourseReport {
    /// Course title
    pub title: String,
    /// Duration in hours
    pub duration_hours: u32,
    /// Course progress
    pub progress: f64,
    /// Per-lesson breakdown
    pub lessons: Vec<LessonReport>,
}

/// Lesson line of a report.
#[derive(Debug, Clone, Serialize)]
pub struct LessonReport {
    /// Lesson title
    pub title: String,
    /// Lesson progress
    pub progress: f64,
    /// Task entries (empty unless requested)
    pub tasks: Vec<TaskReport>,
}

/// Task line of a report.
#[derive(Debug, Clone, Serialize)]
pub struct TaskReport {
    /// Task title
    pub title: String,
    /// Kind label
    pub kind: String,
    /// Lifecycle status
    pub status: TaskStatus,
    /// Task progress
    pub progress: f64,
}

impl ProgressReport {
    /// Build a report for `track`.
    pub fn build(track: &Track, config: ReportConfig) -> Self {
        Self {
            timestamp: Utc::now(),
            track: track.name().to_string(),
            strategy: config.strategy,
            progress: track.progress(Some(&config.strategy)),
            courses: track
                .courses()
                .iter()
                .map(|course| CourseReport::build(course, config))
                .collect(),
        }
    }

    /// Display name of the strategy used.
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Render as indented text.
    pub fn render(&self) -> String {
        let mut lines = vec![format!(
            "{}: {} ({})",
            self.track,
            format_percent(self.progress),
            self.strategy_name()
        )];
        for course in &self.courses {
            lines.push(format!(
                "  {} [{}h]: {}",
                course.title,
                course.duration_hours,
                format_percent(course.progress)
            ));
            for lesson in &course.lessons {
                lines.push(format!("    {}: {}", lesson.title, format_percent(lesson.progress)));
                for task in &lesson.tasks {
                    lines.push(format!(
                        "      [{}] {} ({}): {}",
                        task.kind,
                        task.title,
                        task.status,
                        format_percent(task.progress)
                    ));
                }
            }
        }
        lines.join("\n")
    }
}

impl CourseReport {
    fn build(course: &Course, config: ReportConfig) -> Self {
        Self {
            title: course.title().to_string(),
            duration_hours: course.duration_hours(),
            progress: course.progress(),
            lessons: course
                .lessons()
                .iter()
                .map(|lesson| LessonReport::build(lesson, config))
                .collect(),
        }
    }
}

impl LessonReport {
    fn build(lesson: &Lesson, config: ReportConfig) -> Self {
        let tasks = if config.include_tasks {
            lesson.tasks().iter().map(|task| TaskReport::build(task.as_ref())).collect()
        } else {
            Vec::new()
        };
        Self {
            title: lesson.title().to_string(),
            progress: lesson.progress(),
            tasks,
        }
    }
}

impl TaskReport {
    fn build(task: &dyn StudyTask) -> Self {
        Self {
            title: task.title().to_string(),
            kind: task.kind().to_string(),
            status: task.status(),
            progress: task.progress(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use studytrack_core::{DeadlineTask, QuizTask, ReadingTask};

    fn sample_track() -> Track {
        let mut lesson = Lesson::new("ownership");
        lesson.add_task(ReadingTask::new("chapter 4", 100, 30));
        lesson.add_task(DeadlineTask::new(QuizTask::new("quiz", 10.0, 10.0), None, 0.25));

        let mut course = Course::new("rust basics", 40);
        course.add_lesson(lesson);

        let mut track = Track::new("systems");
        track.add_course(course);
        track.add_course(Course::new("async", 0));
        track
    }

    #[test]
    fn test_build_report() {
        let track = sample_track();
        let report = ProgressReport::build(&track, ReportConfig::default());

        assert_eq!(report.track, "Systems");
        assert_eq!(report.strategy, StrategyKind::Simple);
        assert_eq!(report.courses.len(), 2);
        assert!((report.courses[0].progress - 0.65).abs() < 1e-9);
        assert!((report.progress - 0.325).abs() < 1e-9);
        assert!(report.courses[0].lessons[0].tasks.is_empty());
    }

    #[test]
    fn test_report_with_tasks() {
        let track = sample_track();
        let config = ReportConfig::default()
            .with_strategy(StrategyKind::Weighted)
            .with_tasks(true);
        let report = ProgressReport::build(&track, config);

        let tasks = &report.courses[0].lessons[0].tasks;
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[1].kind, "Quiz");
        assert_eq!(tasks[1].status, TaskStatus::NotStarted);
        assert!((report.progress - 0.65 * 40.0 / 41.0).abs() < 1e-9);

        let text = report.render();
        assert!(text.starts_with("Systems: 63% (duration-weighted mean)"));
        assert!(text.contains("  Rust Basics [40h]: 65%"));
        assert!(text.contains("      [Reading] Chapter 4 (Not started): 30%"));
    }

    #[test]
    fn test_report_serializes() {
        let report = ProgressReport::build(&sample_track(), ReportConfig::default().with_tasks(true));
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["strategy"], "simple");
        assert_eq!(value["courses"][0]["lessons"][0]["tasks"][0]["status"], "not_started");
    }
}
