use crate::certificate::{CertificateExporter, default_exporter};
use crate::config::AppConfig;
use crate::data::read_course_embedded;
use crate::error::ContentError;
use crate::markscheme::MarkSchemeBuilder;
use crate::model::Course;
use crate::progress::ProgressTracker;
use crate::quiz::QuizSession;
use chrono::NaiveDate;

// Submodules
pub mod actions;
pub mod completion;
pub mod queries;
pub mod view_models;

pub use crate::view_models::SectionInfo;

/// Everything one learner's session holds. Nothing here outlives the window.
pub struct OsceApp {
    pub course: Course,
    pub progress: ProgressTracker,
    pub quiz: QuizSession,
    /// Latched the first time a quiz attempt finishes at or above the pass mark.
    pub quiz_passed: bool,
    pub learner_name: String,
    pub markscheme: MarkSchemeBuilder,
    pub today: NaiveDate,
    pub message: String,
    exporter: Box<dyn CertificateExporter>,
}

impl OsceApp {
    pub fn new(
        course: Course,
        exporter: Box<dyn CertificateExporter>,
        today: NaiveDate,
    ) -> Result<Self, ContentError> {
        let quiz = QuizSession::new(course.questions.clone())?;
        Ok(Self {
            course,
            progress: ProgressTracker::default(),
            quiz,
            quiz_passed: false,
            learner_name: String::new(),
            markscheme: MarkSchemeBuilder::default(),
            today,
            message: String::new(),
            exporter,
        })
    }

    /// Embedded course, today's local date and the platform's exporter.
    pub fn from_config(config: &AppConfig) -> Result<Self, ContentError> {
        let course = read_course_embedded()?;
        log::info!(
            "loaded course \"{}\": {} sections, {} questions",
            course.title,
            course.sections.len(),
            course.questions.len()
        );
        let today = chrono::Local::now().date_naive();
        Self::new(course, default_exporter(config), today)
    }
}
