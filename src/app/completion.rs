use super::*;

/// The certificate unlocks once the quiz has been passed and every section is complete.
pub fn eligible(completed: usize, total: usize, quiz_passed: bool) -> bool {
    quiz_passed && completed == total
}

impl OsceApp {
    /// Recomputed on every call; never cached.
    pub fn is_eligible(&self) -> bool {
        eligible(
            self.progress.completed_count(),
            self.progress.total(),
            self.quiz_passed,
        )
    }
}
