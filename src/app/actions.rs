use super::*;
use crate::model::SectionId;
use crate::quiz::SubmitOutcome;

impl OsceApp {
    pub fn mark_section_complete(&mut self, id: SectionId) -> bool {
        let changed = self.progress.set_complete(id);
        if changed {
            let snap = self.progress.snapshot();
            log::info!(
                "section {} complete ({}/{})",
                id.name(),
                snap.completed,
                snap.total
            );
            if self.progress.all_complete() {
                log::info!("all sections complete");
            }
        }
        changed
    }

    pub fn pick_option(&mut self, option: usize) {
        self.quiz.pick(option);
    }

    pub fn submit_answer(&mut self) -> SubmitOutcome {
        let outcome = self.quiz.submit();
        match &outcome {
            SubmitOutcome::NoPick => log::debug!("submit ignored: no option picked"),
            SubmitOutcome::Advanced(feedback) => log::debug!(
                "question {} answered ({})",
                feedback.question_index + 1,
                if feedback.is_correct() { "correct" } else { "incorrect" }
            ),
            SubmitOutcome::Finished { result, .. } => {
                log::info!(
                    "quiz finished: {}/{} ({}%)",
                    result.score,
                    result.total,
                    result.percent()
                );
                if result.passed() && !self.quiz_passed {
                    self.quiz_passed = true;
                    log::info!("quiz passed");
                }
            }
        }
        outcome
    }

    /// Starts a fresh attempt. A pass from an earlier attempt stays latched.
    pub fn retry_quiz(&mut self) {
        self.quiz = self.quiz.restart();
        log::debug!("quiz restarted");
    }

    pub fn build_mark_scheme(&mut self) -> usize {
        let count = self.markscheme.build();
        log::debug!("mark scheme built: {count} items");
        count
    }

    /// Exports the certificate if it is unlocked; the outcome lands in `message`.
    pub fn download_certificate(&mut self) {
        if !self.is_eligible() {
            log::warn!("certificate requested before it was unlocked");
            return;
        }

        let doc = self.certificate_document();
        self.message = match self.exporter.export(&doc) {
            Ok(exported) => format!("✅ Certificate saved to {}", exported.location),
            Err(e) => {
                log::warn!("certificate export failed: {e}");
                format!("⚠ {e}")
            }
        };
    }
}
