//! Project task - progress measured in approved deliverables.

use std::fmt;

use crate::counter::BoundedCount;
use crate::task::{format_percent, StudyTask, TaskCore};

/// A project whose deliverables are reviewed one by one.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectTask {
    core: TaskCore,
    deliverables: BoundedCount,
}

impl ProjectTask {
    /// Create a project task. At least one deliverable is expected; approved
    /// deliverables are clamped to `0..=total_deliverables`.
    pub fn new(title: &str, total_deliverables: i64, deliverables_approved: i64) -> Self {
        Self {
            core: TaskCore::new(title),
            deliverables: BoundedCount::new(total_deliverables, deliverables_approved),
        }
    }

    /// Expected deliverables.
    pub fn total_deliverables(&self) -> u32 {
        self.deliverables.total()
    }

    /// Change the expected deliverables. Approvals above the new total are dropped.
    pub fn set_total_deliverables(&mut self, total_deliverables: i64) {
        self.deliverables.set_total(total_deliverables);
    }

    /// Deliverables approved so far.
    pub fn deliverables_approved(&self) -> u32 {
        self.deliverables.done()
    }

    /// Record approved deliverables.
    pub fn set_deliverables_approved(&mut self, deliverables_approved: i64) {
        self.deliverables.set_done(deliverables_approved);
    }
}

impl StudyTask for ProjectTask {
    fn core(&self) -> &TaskCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut TaskCore {
        &mut self.core
    }

    fn kind(&self) -> &'static str {
        "Project"
    }

    fn progress(&self) -> f64 {
        self.deliverables.fraction()
    }

    fn details(&self) -> Vec<String> {
        vec![
            "Type: Project".to_string(),
            format!(
                "Deliverables approved: {}/{}",
                self.deliverables_approved(),
                self.total_deliverables()
            ),
            format!("Progress: {}", format_percent(self.progress())),
        ]
    }
}

impl fmt::Display for ProjectTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self as &dyn StudyTask, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_progress() {
        let task = ProjectTask::new("web api", 4, 1);
        assert_eq!(task.title(), "Web Api");
        assert_eq!(task.kind(), "Project");
        assert_eq!(task.progress(), 0.25);
    }

    #[test]
    fn test_project_clamps_on_construction() {
        let task = ProjectTask::new("web api", 0, 7);
        assert_eq!(task.total_deliverables(), 1);
        assert_eq!(task.deliverables_approved(), 1);

        let task = ProjectTask::new("web api", 3, -2);
        assert_eq!(task.deliverables_approved(), 0);
        assert_eq!(task.progress(), 0.0);
    }

    #[test]
    fn test_project_approved_then_total() {
        let mut task = ProjectTask::new("web api", 2, 0);
        task.set_deliverables_approved(5);
        assert_eq!(task.deliverables_approved(), 2);

        task.set_total_deliverables(6);
        assert_eq!(task.deliverables_approved(), 2);
        assert!((task.progress() - 2.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_project_total_then_approved() {
        let mut task = ProjectTask::new("web api", 2, 0);
        task.set_total_deliverables(6);
        task.set_deliverables_approved(5);
        assert_eq!(task.deliverables_approved(), 5);
        assert!((task.progress() - 5.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_project_lowering_total() {
        let mut task = ProjectTask::new("web api", 5, 4);
        task.set_total_deliverables(3);
        assert_eq!(task.deliverables_approved(), 3);
        assert_eq!(task.progress(), 1.0);

        task.set_total_deliverables(-1);
        assert_eq!(task.total_deliverables(), 1);
        assert_eq!(task.deliverables_approved(), 1);
    }

    #[test]
    fn test_project_summary() {
        let task = ProjectTask::new("web api", 4, 3);
        let summary = task.summary();
        assert!(summary.contains("Type: Project"));
        assert!(summary.contains("Deliverables approved: 3/4"));
        assert!(summary.contains("Progress: 75%"));
        assert_eq!(task.to_string(), "[Project] Web Api [Not started]");
    }
}
