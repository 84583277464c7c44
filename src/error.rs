use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExamError {
    #[error("question {index} does not exist (exam has {len} questions)")]
    QuestionOutOfRange { index: usize, len: usize },

    #[error("option {option} does not exist for question {question} ({len} options)")]
    OptionOutOfRange {
        question: usize,
        option: usize,
        len: usize,
    },
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Error generating file: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Exam(#[from] ExamError),
}
