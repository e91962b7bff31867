/// A single quiz question, immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    pub answer: String,
    pub kind: QuestionKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    /// Free-text answer compared against the stored string.
    FillInTheBlank,
    /// Options in file order, selected by 1-based index. An empty option
    /// list is tolerated here and reported at presentation time.
    MultipleChoice { options: Vec<String> },
}

impl Question {
    pub fn fill_in_the_blank(text: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            answer: answer.into(),
            kind: QuestionKind::FillInTheBlank,
        }
    }

    pub fn multiple_choice(
        text: impl Into<String>,
        answer: impl Into<String>,
        options: Vec<String>,
    ) -> Self {
        Self {
            text: text.into(),
            answer: answer.into(),
            kind: QuestionKind::MultipleChoice { options },
        }
    }
}
