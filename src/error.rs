use thiserror::Error;

/// Problems with the course content embedded in the binary.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("course content is not valid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("section `{0}` is missing from the course content")]
    MissingSection(&'static str),

    #[error("section `{0}` appears more than once in the course content")]
    DuplicateSection(&'static str),

    #[error("question {question}: answer index {answer} is out of range for {options} options")]
    AnswerOutOfRange {
        question: usize,
        answer: usize,
        options: usize,
    },

    #[error(transparent)]
    Quiz(#[from] QuizError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("a quiz needs at least one question")]
    NoQuestions,
}

#[derive(Debug, Error)]
pub enum CertificateError {
    #[error("no usable font family found (searched: {searched})")]
    FontsNotFound { searched: String },

    #[error("could not render the certificate: {0}")]
    Render(String),

    #[error("could not write the certificate: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF export is only available in the desktop build")]
    Unsupported,
}
