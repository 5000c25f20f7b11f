use crate::Question;

/// An ordered, optionally labeled group of questions.
///
/// Questions are heterogeneous across the four variants. `add_question` takes
/// its argument by value, so the stored question cannot alias any state the
/// caller still holds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Category {
    label: Option<String>,
    questions: Vec<Question>,
}

impl Category {
    /// Create an empty, unlabeled category.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty category with the given label.
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            questions: Vec::new(),
        }
    }

    /// Set the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Append a question, returning the updated category.
    pub fn with_question(mut self, question: Question) -> Self {
        self.questions.push(question);
        self
    }

    /// Get the label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Set the label.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = Some(label.into());
    }

    /// Remove the label.
    pub fn clear_label(&mut self) {
        self.label = None;
    }

    /// The questions, in insertion order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Append a question.
    pub fn add_question(&mut self, question: Question) {
        self.questions.push(question);
    }

    /// Replace the whole question list.
    pub fn set_questions(&mut self, questions: Vec<Question>) {
        self.questions = questions;
    }

    /// Get the number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Check if the category has no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
