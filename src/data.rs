// src/data.rs

use crate::error::{ContentError, QuizError};
use crate::model::{Course, SectionId};

/// Loads the course embedded in the binary.
pub fn read_course_embedded() -> Result<Course, ContentError> {
    let file_content = include_str!("data/osce_course.yaml");
    parse_course(file_content)
}

pub fn parse_course(yaml: &str) -> Result<Course, ContentError> {
    let course: Course = serde_yaml::from_str(yaml)?;
    validate_course(&course)?;
    Ok(course)
}

fn validate_course(course: &Course) -> Result<(), ContentError> {
    for id in SectionId::ALL {
        match course.sections.iter().filter(|s| s.id == id).count() {
            0 => return Err(ContentError::MissingSection(id.name())),
            1 => {}
            _ => return Err(ContentError::DuplicateSection(id.name())),
        }
    }

    if course.questions.is_empty() {
        return Err(QuizError::NoQuestions.into());
    }

    for (i, q) in course.questions.iter().enumerate() {
        if q.answer >= q.options.len() {
            return Err(ContentError::AnswerOutOfRange {
                question: i + 1,
                answer: q.answer,
                options: q.options.len(),
            });
        }
    }

    Ok(())
}
