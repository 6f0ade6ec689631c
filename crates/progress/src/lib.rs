//! Progress Aggregation
//!
//! Track-level aggregation strategies and progress reports.

#![warn(missing_docs)]

pub mod strategy;
pub mod report;

pub use strategy::{DurationWeightedMean, SimpleMean, StrategyKind};
pub use report::{CourseReport, LessonReport, ProgressReport, ReportConfig, TaskReport};
