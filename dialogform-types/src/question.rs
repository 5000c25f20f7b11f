use std::fmt;
use std::str::FromStr;

use crate::{Answer, DialogError, Tag};

/// The wire discriminator for the four question variants.
///
/// A question's type is fixed when it is constructed; there is no way to
/// change it afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionType {
    /// A file chooser for an existing path.
    OpenPath,
    /// A file chooser for a path to write to.
    SavePath,
    /// A single-line text input.
    String,
    /// A selection among a list of answers.
    Choice,
}

impl QuestionType {
    /// The discriminator string used in the exported structure.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OpenPath => "openpath",
            Self::SavePath => "savepath",
            Self::String => "string",
            Self::Choice => "choice",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for QuestionType {
    type Err = DialogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "openpath" => Ok(Self::OpenPath),
            "savepath" => Ok(Self::SavePath),
            "string" => Ok(Self::String),
            "choice" => Ok(Self::Choice),
            other => Err(DialogError::InvalidValue {
                field: "type",
                value: other.to_string(),
            }),
        }
    }
}

/// A single question in a dialog category.
///
/// The common fields (prompt, tag, alignment) live here; everything
/// variant-specific lives in the [`QuestionKind`] config records. `align`
/// defaults to `true` and is stored as a plain bool in memory; the wire
/// export writes a `noalign` marker only when it is `false`.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    kind: QuestionKind,
    label: Option<String>,
    tag: Option<Tag>,
    align: bool,
}

impl Question {
    /// Create a new question of the given kind, unlabeled and aligned.
    pub fn new(kind: QuestionKind) -> Self {
        Self {
            kind,
            label: None,
            tag: None,
            align: true,
        }
    }

    /// Create a plain string question.
    pub fn string() -> Self {
        Self::new(QuestionKind::String(StringQuestion::new()))
    }

    /// Create an open-path question.
    pub fn open_path() -> Self {
        Self::new(QuestionKind::OpenPath(PathQuestion::new()))
    }

    /// Create a save-path question.
    pub fn save_path() -> Self {
        Self::new(QuestionKind::SavePath(PathQuestion::new()))
    }

    /// Create a choice question with an empty answer list.
    pub fn choice() -> Self {
        Self::new(QuestionKind::Choice(ChoiceQuestion::new()))
    }

    /// Set the prompt text.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the host tag.
    pub fn with_tag(mut self, tag: impl Into<Tag>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Set the alignment flag.
    pub fn with_align(mut self, align: bool) -> Self {
        self.align = align;
        self
    }

    /// The wire discriminator, derived from the variant.
    pub fn question_type(&self) -> QuestionType {
        match &self.kind {
            QuestionKind::String(_) => QuestionType::String,
            QuestionKind::OpenPath(_) => QuestionType::OpenPath,
            QuestionKind::SavePath(_) => QuestionType::SavePath,
            QuestionKind::Choice(_) => QuestionType::Choice,
        }
    }

    /// Get the question kind and its variant-specific configuration.
    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    /// Get the prompt text, if any. No prompt is legal (no caption shown).
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Set the prompt text.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = Some(label.into());
    }

    /// Remove the prompt text.
    pub fn clear_label(&mut self) {
        self.label = None;
    }

    /// Get the host tag, if any.
    pub fn tag(&self) -> Option<&Tag> {
        self.tag.as_ref()
    }

    /// Set the host tag.
    pub fn set_tag(&mut self, tag: impl Into<Tag>) {
        self.tag = Some(tag.into());
    }

    /// Remove the host tag; the next export carries no `tag` key at all.
    pub fn clear_tag(&mut self) {
        self.tag = None;
    }

    /// Whether this question aligns with the others in its category.
    pub fn align(&self) -> bool {
        self.align
    }

    /// Set the alignment flag.
    pub fn set_align(&mut self, align: bool) {
        self.align = align;
    }

    /// Access the string config if this is a string question.
    pub fn as_string(&self) -> Option<&StringQuestion> {
        match &self.kind {
            QuestionKind::String(config) => Some(config),
            _ => None,
        }
    }

    /// Mutably access the string config if this is a string question.
    pub fn as_string_mut(&mut self) -> Option<&mut StringQuestion> {
        match &mut self.kind {
            QuestionKind::String(config) => Some(config),
            _ => None,
        }
    }

    /// Access the path config if this is an open-path or save-path question.
    pub fn as_path(&self) -> Option<&PathQuestion> {
        match &self.kind {
            QuestionKind::OpenPath(config) | QuestionKind::SavePath(config) => Some(config),
            _ => None,
        }
    }

    /// Mutably access the path config if this is an open-path or save-path question.
    pub fn as_path_mut(&mut self) -> Option<&mut PathQuestion> {
        match &mut self.kind {
            QuestionKind::OpenPath(config) | QuestionKind::SavePath(config) => Some(config),
            _ => None,
        }
    }

    /// Access the choice config if this is a choice question.
    pub fn as_choice(&self) -> Option<&ChoiceQuestion> {
        match &self.kind {
            QuestionKind::Choice(config) => Some(config),
            _ => None,
        }
    }

    /// Mutably access the choice config if this is a choice question.
    pub fn as_choice_mut(&mut self) -> Option<&mut ChoiceQuestion> {
        match &mut self.kind {
            QuestionKind::Choice(config) => Some(config),
            _ => None,
        }
    }
}

/// The kind of question, a closed union over the four variants.
///
/// Mutators reach the per-variant config records, never the discriminator, so
/// a question cannot change kind in place.
#[derive(Debug, Clone, PartialEq)]
pub enum QuestionKind {
    /// Single-line text input.
    String(StringQuestion),

    /// File chooser for an existing path.
    OpenPath(PathQuestion),

    /// File chooser for a path to write to.
    SavePath(PathQuestion),

    /// Selection among a list of answers.
    Choice(ChoiceQuestion),
}

/// Configuration for a plain string question.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StringQuestion {
    /// Optional default text; `None` reliably means "no default" and exports
    /// without a `default` key.
    pub default: Option<String>,
}

impl StringQuestion {
    /// Create a new string question config with no default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default text.
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// Configuration for a file path question (open or save).
///
/// Which of the two it is lives in the [`QuestionKind`] variant wrapping this
/// record, not here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathQuestion {
    /// Optional default path text.
    pub default: Option<String>,

    /// Optional file-matching filter pattern, e.g. `"*.ttf"`.
    pub filter: Option<String>,
}

impl PathQuestion {
    /// Create a new path question config with no default and no filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default path text.
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Set the file-matching filter pattern.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }
}

/// Configuration for a choice question.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChoiceQuestion {
    /// Allow selecting more than one answer.
    pub multiple: bool,

    /// Render as checkboxes instead of a radio/list widget.
    pub checks: bool,

    answers: Vec<Answer>,
}

impl ChoiceQuestion {
    /// Create a new choice question config with an empty answer list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allow selecting more than one answer.
    pub fn with_multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    /// Render as checkboxes instead of a radio/list widget.
    pub fn with_checks(mut self, checks: bool) -> Self {
        self.checks = checks;
        self
    }

    /// Append an answer, returning the updated config.
    pub fn with_answer(mut self, answer: Answer) -> Self {
        self.answers.push(answer);
        self
    }

    /// The answers, in insertion order.
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    /// Append an answer. Duplicates by name or tag are permitted; uniqueness
    /// is not enforced.
    pub fn add_answer(&mut self, answer: Answer) {
        self.answers.push(answer);
    }

    /// Replace the whole answer list. This is the only way the list shrinks.
    pub fn set_answers(&mut self, answers: Vec<Answer>) {
        self.answers = answers;
    }
}

impl From<StringQuestion> for Question {
    fn from(config: StringQuestion) -> Self {
        Self::new(QuestionKind::String(config))
    }
}

impl From<ChoiceQuestion> for Question {
    fn from(config: ChoiceQuestion) -> Self {
        Self::new(QuestionKind::Choice(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_matches_variant() {
        assert_eq!(Question::string().question_type(), QuestionType::String);
        assert_eq!(Question::open_path().question_type(), QuestionType::OpenPath);
        assert_eq!(Question::save_path().question_type(), QuestionType::SavePath);
        assert_eq!(Question::choice().question_type(), QuestionType::Choice);
    }

    #[test]
    fn type_survives_field_mutation() {
        let mut question = Question::string().with_label("Name:");
        question.set_tag(3);
        question.set_align(false);
        question.clear_label();
        question.as_string_mut().unwrap().default = Some("Jane".to_string());
        assert_eq!(question.question_type(), QuestionType::String);
    }

    #[test]
    fn type_round_trips_through_str() {
        for qtype in [
            QuestionType::OpenPath,
            QuestionType::SavePath,
            QuestionType::String,
            QuestionType::Choice,
        ] {
            assert_eq!(qtype.as_str().parse::<QuestionType>().unwrap(), qtype);
        }
    }

    #[test]
    fn unknown_type_string_is_rejected() {
        let result = "spinner".parse::<QuestionType>();
        assert!(matches!(
            result,
            Err(DialogError::InvalidValue { field: "type", .. })
        ));
    }

    #[test]
    fn choice_answers_preserve_insertion_order() {
        let mut config = ChoiceQuestion::new();
        config.add_answer(Answer::new("red"));
        config.add_answer(Answer::new("green"));
        config.add_answer(Answer::new("red"));
        let names: Vec<_> = config.answers().iter().map(Answer::name).collect();
        assert_eq!(names, vec!["red", "green", "red"]);
    }

    #[test]
    fn clearing_string_default_works() {
        let mut question = Question::new(QuestionKind::String(
            StringQuestion::new().with_default("abc"),
        ));
        question.as_string_mut().unwrap().default = None;
        assert_eq!(question.as_string().unwrap().default, None);
    }
}
