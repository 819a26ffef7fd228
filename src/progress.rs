use crate::model::SectionId;
use std::collections::BTreeMap;

/// `round(100 * part / whole)` with halves rounded up; 0 when `whole` is 0.
pub fn rounded_percent(part: usize, whole: usize) -> usize {
    if whole == 0 {
        return 0;
    }
    (200 * part + whole) / (2 * whole)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgressSnapshot {
    pub completed: usize,
    pub total: usize,
    pub percent: usize,
}

impl ProgressSnapshot {
    /// Fill ratio for a progress bar.
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f32 / self.total as f32
        }
    }
}

/// Completion flags for the fixed set of sections. Flags only go from
/// `false` to `true` within a session.
#[derive(Clone, Debug)]
pub struct ProgressTracker {
    complete: BTreeMap<SectionId, bool>,
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self {
            complete: SectionId::ALL.iter().map(|&id| (id, false)).collect(),
        }
    }
}

impl ProgressTracker {
    /// Marks a section complete. Returns `false` if it already was.
    pub fn set_complete(&mut self, id: SectionId) -> bool {
        let flag = self.complete.entry(id).or_insert(false);
        if *flag {
            return false;
        }
        *flag = true;
        true
    }

    pub fn is_complete(&self, id: SectionId) -> bool {
        self.complete.get(&id).copied().unwrap_or(false)
    }

    pub fn completed_count(&self) -> usize {
        self.complete.values().filter(|done| **done).count()
    }

    pub fn total(&self) -> usize {
        self.complete.len()
    }

    pub fn all_complete(&self) -> bool {
        self.completed_count() == self.total()
    }

    pub fn snapshot(&self) -> ProgressSnapshot {
        let completed = self.completed_count();
        let total = self.total();
        ProgressSnapshot {
            completed,
            total,
            percent: rounded_percent(completed, total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_every_section_incomplete() {
        let tracker = ProgressTracker::default();
        assert_eq!(
            tracker.snapshot(),
            ProgressSnapshot { completed: 0, total: 7, percent: 0 }
        );
        assert!(SectionId::ALL.iter().all(|&id| !tracker.is_complete(id)));
    }

    #[test]
    fn set_complete_is_idempotent() {
        let mut tracker = ProgressTracker::default();
        assert!(tracker.set_complete(SectionId::History));
        assert_eq!(tracker.completed_count(), 1);

        assert!(!tracker.set_complete(SectionId::History));
        assert_eq!(tracker.completed_count(), 1);
    }

    #[test]
    fn percent_is_rounded_to_nearest_integer() {
        let mut tracker = ProgressTracker::default();
        tracker.set_complete(SectionId::Intro);
        assert_eq!(tracker.snapshot().percent, 14); // 14.28…

        for id in [SectionId::History, SectionId::Examinations] {
            tracker.set_complete(id);
        }
        assert_eq!(tracker.snapshot().percent, 43); // 42.85…

        for id in SectionId::ALL {
            tracker.set_complete(id);
        }
        assert!(tracker.all_complete());
        assert_eq!(tracker.snapshot().percent, 100);
        assert!((tracker.snapshot().fraction() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn rounded_percent_rounds_halves_up() {
        assert_eq!(rounded_percent(1, 8), 13); // 12.5
        assert_eq!(rounded_percent(4, 5), 80);
        assert_eq!(rounded_percent(3, 0), 0);
    }
}
