//! Reading task - progress measured in pages.

use std::fmt;

use crate::counter::BoundedCount;
use crate::task::{format_percent, StudyTask, TaskCore};

/// Reading a book, article or chapter.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadingTask {
    core: TaskCore,
    pages: BoundedCount,
}

impl ReadingTask {
    /// Create a reading task. Totals below 1 become 1; pages read are
    /// clamped to `0..=total_pages`.
    pub fn new(title: &str, total_pages: i64, pages_read: i64) -> Self {
        Self {
            core: TaskCore::new(title),
            pages: BoundedCount::new(total_pages, pages_read),
        }
    }

    /// Total pages.
    pub fn total_pages(&self) -> u32 {
        self.pages.total()
    }

    /// Change the page count. Pages read above the new total are dropped.
    pub fn set_total_pages(&mut self, total_pages: i64) {
        self.pages.set_total(total_pages);
    }

    /// Pages read so far.
    pub fn pages_read(&self) -> u32 {
        self.pages.done()
    }

    /// Record pages read.
    pub fn set_pages_read(&mut self, pages_read: i64) {
        self.pages.set_done(pages_read);
    }
}

impl StudyTask for ReadingTask {
    fn core(&self) -> &TaskCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut TaskCore {
        &mut self.core
    }

    fn kind(&self) -> &'static str {
        "Reading"
    }

    fn progress(&self) -> f64 {
        self.pages.fraction()
    }

    fn details(&self) -> Vec<String> {
        vec![
            "Type: Reading".to_string(),
            format!("Pages read: {}/{}", self.pages_read(), self.total_pages()),
            format!("Progress: {}", format_percent(self.progress())),
        ]
    }
}

impl fmt::Display for ReadingTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self as &dyn StudyTask, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TaskStatus;

    #[test]
    fn test_reading_progress() {
        let task = ReadingTask::new("clean code", 100, 30);
        assert_eq!(task.title(), "Clean Code");
        assert!((task.progress() - 0.30).abs() < 1e-9);
        assert_eq!(task.status(), TaskStatus::NotStarted);
    }

    #[test]
    fn test_reading_to_completion() {
        let mut task = ReadingTask::new("clean code", 100, 30);
        task.start();
        assert_eq!(task.status(), TaskStatus::InProgress);

        task.set_pages_read(100);
        task.complete();
        assert_eq!(task.progress(), 1.0);
        assert_eq!(task.status(), TaskStatus::Completed);
        assert!(task.is_complete());
        assert!(task.completed_at().is_some());
    }

    #[test]
    fn test_reading_clamps() {
        let mut task = ReadingTask::new("", 0, -3);
        assert_eq!(task.title(), "Task");
        assert_eq!(task.total_pages(), 1);
        assert_eq!(task.pages_read(), 0);

        task.set_total_pages(50);
        task.set_pages_read(80);
        assert_eq!(task.pages_read(), 50);

        task.set_total_pages(20);
        assert_eq!(task.pages_read(), 20);
        assert_eq!(task.progress(), 1.0);
    }

    #[test]
    fn test_same_item() {
        let first = ReadingTask::new("rust book", 200, 50).with_completed_on("01-02-2025");
        let second = ReadingTask::new("Rust Book", 10, 0).with_completed_on("01-02-2025");
        let third = ReadingTask::new("rust book", 200, 50);
        assert!(first.same_item(&second));
        assert!(!first.same_item(&third));
    }

    #[test]
    fn test_reading_summary() {
        let task = ReadingTask::new("rust book", 200, 50).with_description("Chapters 1-4");
        let summary = task.summary();
        assert!(summary.contains("Task: Rust Book"));
        assert!(summary.contains("Description: Chapters 1-4"));
        assert!(summary.contains("Pages read: 50/200"));
        assert!(summary.contains("Progress: 25%"));
        assert_eq!(task.to_string(), "[Reading] Rust Book [Not started]");
    }
}
