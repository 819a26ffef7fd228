//! Multiple-choice quiz: one question at a time, a running score, and a
//! pass mark checked once the last answer is in.

use crate::error::QuizError;
use crate::model::QuizQuestion;
use crate::progress::rounded_percent;

/// Minimum share of correct answers, in percent, needed to pass.
pub const PASS_PERCENT: usize = 80;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum QuizState {
    Answering(usize),
    Finished,
}

/// What the learner sees after submitting an answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub question_index: usize,
    pub picked: usize,
    pub correct_index: usize,
    pub rationale: String,
}

impl AnswerFeedback {
    pub fn is_correct(&self) -> bool {
        self.picked == self.correct_index
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuizResult {
    pub score: usize,
    pub total: usize,
}

impl QuizResult {
    pub fn percent(&self) -> usize {
        rounded_percent(self.score, self.total)
    }

    pub fn passed(&self) -> bool {
        self.score * 100 >= self.total * PASS_PERCENT
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing picked, or the quiz is already over. State is unchanged.
    NoPick,
    Advanced(AnswerFeedback),
    /// The last question was answered. `result.passed()` is reported exactly
    /// once per session, here.
    Finished {
        feedback: AnswerFeedback,
        result: QuizResult,
    },
}

#[derive(Clone, Debug)]
pub struct QuizSession {
    questions: Vec<QuizQuestion>,
    state: QuizState,
    score: usize,
    picked: Option<usize>,
    last_feedback: Option<AnswerFeedback>,
}

impl QuizSession {
    pub fn new(questions: Vec<QuizQuestion>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::NoQuestions);
        }
        Ok(Self::fresh(questions))
    }

    fn fresh(questions: Vec<QuizQuestion>) -> Self {
        Self {
            questions,
            state: QuizState::Answering(0),
            score: 0,
            picked: None,
            last_feedback: None,
        }
    }

    /// A brand-new session over the same questions.
    pub fn restart(&self) -> Self {
        Self::fresh(self.questions.clone())
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn picked(&self) -> Option<usize> {
        self.picked
    }

    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            QuizState::Answering(i) => Some(i),
            QuizState::Finished => None,
        }
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.current_index().and_then(|i| self.questions.get(i))
    }

    pub fn question(&self, index: usize) -> Option<&QuizQuestion> {
        self.questions.get(index)
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index() == Some(self.total() - 1)
    }

    pub fn is_finished(&self) -> bool {
        self.state == QuizState::Finished
    }

    /// Feedback for the most recently submitted answer.
    pub fn last_feedback(&self) -> Option<&AnswerFeedback> {
        self.last_feedback.as_ref()
    }

    pub fn result(&self) -> Option<QuizResult> {
        self.is_finished().then_some(QuizResult {
            score: self.score,
            total: self.total(),
        })
    }

    /// Records `option` for the current question. Ignored once finished or
    /// when the question has no such option.
    pub fn pick(&mut self, option: usize) {
        let in_range = self
            .current_question()
            .map(|q| option < q.options.len())
            .unwrap_or(false);
        if in_range {
            self.picked = Some(option);
        }
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        let (index, picked) = match (self.state, self.picked) {
            (QuizState::Answering(i), Some(p)) => (i, p),
            _ => return SubmitOutcome::NoPick,
        };

        let question = &self.questions[index];
        let feedback = AnswerFeedback {
            question_index: index,
            picked,
            correct_index: question.answer,
            rationale: question.rationale.clone(),
        };
        if feedback.is_correct() {
            self.score += 1;
        }
        self.picked = None;
        self.last_feedback = Some(feedback.clone());

        if index + 1 == self.total() {
            self.state = QuizState::Finished;
            let result = QuizResult {
                score: self.score,
                total: self.total(),
            };
            SubmitOutcome::Finished { feedback, result }
        } else {
            self.state = QuizState::Answering(index + 1);
            SubmitOutcome::Advanced(feedback)
        }
    }
}
