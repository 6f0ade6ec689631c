//! Quiz task - progress measured as score over maximum score.

use std::fmt;

use tracing::debug;

use crate::task::{format_percent, StudyTask, TaskCore};

/// Maximum score used when none (or garbage) is given.
pub const DEFAULT_MAX_SCORE: f64 = 10.0;

/// A graded quiz.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizTask {
    core: TaskCore,
    score: f64,
    max_score: f64,
}

impl QuizTask {
    /// Create a quiz task.
    ///
    /// A non-finite `max_score` becomes 10.0 and anything below 1.0 becomes 1.0.
    /// A non-finite `score` becomes 0.0; the score is then clamped to
    /// `0.0..=max_score`.
    pub fn new(title: &str, score: f64, max_score: f64) -> Self {
        let mut quiz = Self {
            core: TaskCore::new(title),
            score: 0.0,
            max_score: DEFAULT_MAX_SCORE,
        };
        quiz.set_max_score(max_score);
        quiz.set_score(score);
        quiz
    }

    /// Score obtained.
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Record the score obtained.
    pub fn set_score(&mut self, score: f64) {
        let score = if score.is_finite() { score } else { 0.0 };
        self.score = score.clamp(0.0, self.max_score);
    }

    /// Highest possible score.
    pub fn max_score(&self) -> f64 {
        self.max_score
    }

    /// Change the highest possible score, pulling the score down if needed.
    pub fn set_max_score(&mut self, max_score: f64) {
        let max_score = if max_score.is_finite() {
            max_score
        } else {
            DEFAULT_MAX_SCORE
        };
        self.max_score = max_score.max(1.0);
        if self.score > self.max_score {
            debug!("Clamping quiz score {} to new maximum {}", self.score, self.max_score);
            self.score = self.max_score;
        }
    }
}

impl StudyTask for QuizTask {
    fn core(&self) -> &TaskCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut TaskCore {
        &mut self.core
    }

    fn kind(&self) -> &'static str {
        "Quiz"
    }

    fn progress(&self) -> f64 {
        self.score / self.max_score
    }

    fn details(&self) -> Vec<String> {
        vec![
            "Type: Quiz".to_string(),
            format!("Score: {}/{}", self.score, self.max_score),
            format!("Progress: {}", format_percent(self.progress())),
        ]
    }
}

impl fmt::Display for QuizTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self as &dyn StudyTask, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_progress() {
        let quiz = QuizTask::new("midterm", 7.0, 10.0);
        assert!((quiz.progress() - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_quiz_sanitizes_inputs() {
        let quiz = QuizTask::new("midterm", f64::NAN, f64::NAN);
        assert_eq!(quiz.max_score(), DEFAULT_MAX_SCORE);
        assert_eq!(quiz.score(), 0.0);

        let quiz = QuizTask::new("midterm", 3.0, 0.2);
        assert_eq!(quiz.max_score(), 1.0);
        assert_eq!(quiz.score(), 1.0);

        let quiz = QuizTask::new("midterm", -2.0, 20.0);
        assert_eq!(quiz.score(), 0.0);
    }

    #[test]
    fn test_quiz_lowering_max_clamps_score() {
        let mut quiz = QuizTask::new("final", 18.0, 20.0);
        quiz.set_max_score(10.0);
        assert_eq!(quiz.score(), 10.0);
        assert_eq!(quiz.progress(), 1.0);

        quiz.set_max_score(40.0);
        assert_eq!(quiz.score(), 10.0);
        assert_eq!(quiz.progress(), 0.25);
    }

    #[test]
    fn test_quiz_summary() {
        let quiz = QuizTask::new("final", 8.0, 10.0);
        assert!(quiz.summary().contains("Score: 8/10"));
        assert!(quiz.summary().contains("Progress: 80%"));
    }
}
