//! Study plan files: a JSON description of one track.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use studytrack_core::{build_task, Course, DeadlineTask, Lenient, Lesson, StudyTask, TaskArgs, TaskKind, Track};
use tracing::debug;

/// Root of a plan file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackPlan {
    /// Track name
    pub name: String,
    /// Courses in order
    pub courses: Vec<CoursePlan>,
}

/// A course entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CoursePlan {
    /// Course title
    pub title: String,
    /// Duration; anything that is not a number counts as 0
    pub duration_hours: Option<Lenient>,
    /// Lessons in order
    pub lessons: Vec<LessonPlan>,
}

/// A lesson entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LessonPlan {
    /// Lesson title
    pub title: String,
    /// Tasks in order
    pub tasks: Vec<TaskPlan>,
}

/// A task entry: a kind tag plus the factory arguments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskPlan {
    /// Task kind
    pub kind: TaskKind,
    /// Wrap the task in a deadline decorator
    #[serde(default)]
    pub deadline: Option<DeadlinePlan>,
    /// Kind arguments
    #[serde(flatten)]
    pub args: TaskArgs,
}

/// Deadline settings for a task.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeadlinePlan {
    /// `dd-mm-YYYY HH:MM`
    pub at: Option<String>,
    /// Late penalty in `[0, 1]`
    pub penalty: Option<Lenient>,
}

impl TrackPlan {
    /// Read a plan file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read plan {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Invalid plan {}", path.display()))
    }

    /// Parse plan JSON.
    pub fn parse(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Build the track described by this plan.
    pub fn build(&self) -> Result<Track> {
        let mut track = Track::new(&self.name);
        for course_plan in &self.courses {
            let hours = course_plan
                .duration_hours
                .and_then(|hours| hours.value())
                .map(|hours| hours.trunc() as i64)
                .unwrap_or(0);
            let mut course = Course::new(&course_plan.title, hours);
            for lesson_plan in &course_plan.lessons {
                let mut lesson = Lesson::new(&lesson_plan.title);
                for (index, task_plan) in lesson_plan.tasks.iter().enumerate() {
                    let task = task_plan.build().with_context(|| {
                        format!("Task {} of lesson '{}'", index + 1, lesson.title())
                    })?;
                    lesson.add_boxed_task(Some(task));
                }
                course.add_lesson(lesson);
            }
            debug!("Loaded {}", course);
            track.add_course(course);
        }
        Ok(track)
    }
}

impl TaskPlan {
    /// Build the task, decorated when a deadline block is present.
    pub fn build(&self) -> Result<Box<dyn StudyTask>> {
        let task = build_task(self.kind, &self.args)?;
        Ok(match &self.deadline {
            Some(deadline) => {
                let penalty = deadline.penalty.and_then(|p| p.value()).unwrap_or(0.0);
                let at = deadline.at.as_deref().map(Into::into);
                Box::new(DeadlineTask::wrap(task, at, penalty))
            }
            None => task,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use studytrack_core::TaskStatus;
    use studytrack_progress::{DurationWeightedMean, SimpleMean};

    fn plan(value: serde_json::Value) -> TrackPlan {
        TrackPlan::parse(&value.to_string()).unwrap()
    }

    #[test]
    fn test_build_track() {
        let track = plan(json!({
            "name": "backend",
            "courses": [
                {
                    "title": "rust",
                    "duration_hours": 40,
                    "lessons": [{
                        "title": "ownership",
                        "tasks": [{ "kind": "reading", "total_pages": 100, "pages_read": 50 }]
                    }]
                },
                {
                    "title": "sql",
                    "duration_hours": "60",
                    "lessons": [{
                        "title": "joins",
                        "tasks": [{ "kind": "quiz", "score": 2.5 }]
                    }]
                }
            ]
        }))
        .build()
        .unwrap();

        assert_eq!(track.name(), "Backend");
        assert_eq!(track.courses()[1].duration_hours(), 60);
        assert!((track.progress(Some(&DurationWeightedMean)) - 0.35).abs() < 1e-9);
        assert!((track.progress(Some(&SimpleMean)) - 0.375).abs() < 1e-9);
    }

    #[test]
    fn test_deadline_block() {
        let mut track = plan(json!({
            "name": "exams",
            "courses": [{
                "title": "finals",
                "lessons": [{
                    "title": "week 1",
                    "tasks": [{
                        "kind": "quiz",
                        "score": 10,
                        "max_score": 10,
                        "deadline": { "at": "01-01-2000 12:00", "penalty": 0.25 }
                    }]
                }]
            }]
        }))
        .build()
        .unwrap();

        let task = track.course_mut(0).unwrap().lesson_mut(0).unwrap().task_mut(0).unwrap();
        assert_eq!(task.progress(), 1.0);
        task.complete();
        assert_eq!(task.status(), TaskStatus::Completed);
        assert!((task.progress() - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_missing_required_field_reports_task() {
        let result = plan(json!({
            "courses": [{ "lessons": [{ "title": "intro", "tasks": [{ "kind": "practice" }] }] }]
        }))
        .build();
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("Task 1 of lesson 'Intro'"));
        assert!(message.contains("total_steps"));
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let result = TrackPlan::parse(
            &json!({ "courses": [{ "lessons": [{ "tasks": [{ "kind": "essay" }] }] }] }).to_string(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_demo_plan() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos/backend-track.json");
        let track = TrackPlan::load(&path).unwrap().build().unwrap();

        let project = &track.courses()[0].lessons()[1].tasks()[0];
        assert!((project.progress() - 0.8).abs() < 1e-9);
        assert!((track.courses()[0].progress() - 0.755_555_56).abs() < 1e-6);
        assert!((track.progress(Some(&SimpleMean)) - 0.335_185_19).abs() < 1e-6);
        assert!((track.progress(Some(&DurationWeightedMean)) - 0.447_744_77).abs() < 1e-6);
    }

    #[test]
    fn test_defaults() {
        let track = plan(json!({ "courses": [{ "duration_hours": "n/a" }] })).build().unwrap();
        assert_eq!(track.name(), "Track");
        assert_eq!(track.courses()[0].title(), "Course");
        assert_eq!(track.courses()[0].duration_hours(), 0);
    }
}
