//! StudyTrack core data models.
//!
//! This crate defines the study hierarchy (task → lesson → course → track)
//! and the rules that turn counters into completion fractions at every level.

#![warn(missing_docs)]

// Errors and shared helpers
mod error;
mod time;
mod title;

// Task model
mod task;
mod counter;
mod reading;
mod quiz;
mod practice;
mod project;
mod deadline;
mod factory;

// Composites
mod lesson;
mod course;
mod track;

// Re-exports
pub use error::{BuildError, CoreError, Result, TimeParseError};
pub use time::{format_date, format_date_time, parse_instant, DateInput, Time, DATE_FORMAT, DATE_TIME_FORMAT};
pub use title::normalize_title;

// Tasks
pub use task::{format_percent, StudyTask, TaskCore, TaskStatus};
pub use counter::BoundedCount;
pub use reading::ReadingTask;
pub use quiz::QuizTask;
pub use practice::PracticeTask;
pub use project::ProjectTask;
pub use deadline::DeadlineTask;
pub use factory::{build_task, Lenient, TaskArgs, TaskKind};

// Lesson, Course & Track
pub use lesson::Lesson;
pub use course::Course;
pub use track::{ProgressStrategy, Track};
