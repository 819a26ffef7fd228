// src/view_models.rs

use crate::model::SectionId;
use crate::progress::ProgressSnapshot;
use crate::quiz::{AnswerFeedback, QuizResult};

#[derive(Clone, Debug)]
pub struct SectionInfo {
    pub id: SectionId,
    pub title: String,
    pub subtitle: Option<String>,
    pub default_open: bool,
    pub complete: bool,
}

impl SectionInfo {
    pub fn status_label(&self) -> &'static str {
        if self.complete { "✅ Completed" } else { "In progress" }
    }

    pub fn mark_button_label(&self) -> &'static str {
        if self.complete { "Completed" } else { "Mark section as complete" }
    }
}

impl ProgressSnapshot {
    pub fn label(&self) -> String {
        format!(
            "Progress: {}/{} sections ({}%)",
            self.completed, self.total, self.percent
        )
    }
}

impl QuizResult {
    pub fn headline(&self) -> String {
        format!(
            "Quiz complete — {}/{} correct ({}%).",
            self.score,
            self.total,
            self.percent()
        )
    }

    pub fn verdict(&self) -> &'static str {
        if self.passed() {
            "Nice — this meets the certificate threshold."
        } else {
            "You can retry to reach ≥80%."
        }
    }
}

impl AnswerFeedback {
    pub fn verdict_label(&self) -> String {
        if self.is_correct() {
            format!("✅ Question {}: correct", self.question_index + 1)
        } else {
            format!("❌ Question {}: incorrect", self.question_index + 1)
        }
    }
}
