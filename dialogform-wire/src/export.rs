//! Pure export of a dialog definition into the wire shape.
//!
//! In memory every record carries all of its fields; compaction happens here.
//! Absent optionals and default-valued booleans produce no key at all, so the
//! host can tell "key missing" apart from "key present but falsy". The
//! `answers` and `questions` lists are always present, even when empty.

use dialogform_types::{Answer, Category, Dialog, Question, QuestionKind};

use crate::Value;

/// Export a whole dialog as an ordered list of category maps.
pub fn export_dialog(dialog: &Dialog) -> Value {
    Value::List(dialog.categories().iter().map(export_category).collect())
}

/// Export one category.
pub fn export_category(category: &Category) -> Value {
    let mut entries = Vec::new();
    if let Some(label) = category.label() {
        entries.push(("category".to_string(), Value::from(label)));
    }
    entries.push((
        "questions".to_string(),
        Value::List(category.questions().iter().map(export_question).collect()),
    ));
    Value::Map(entries)
}

/// Export one question with its variant-specific fields.
pub fn export_question(question: &Question) -> Value {
    let mut entries = vec![(
        "type".to_string(),
        Value::from(question.question_type().as_str()),
    )];
    if let Some(label) = question.label() {
        entries.push(("question".to_string(), Value::from(label)));
    }
    if let Some(tag) = question.tag() {
        entries.push(("tag".to_string(), Value::from(tag)));
    }
    // Asymmetric on purpose: alignment is stored as a negative marker.
    if !question.align() {
        entries.push(("noalign".to_string(), Value::Bool(true)));
    }
    match question.kind() {
        QuestionKind::String(config) => {
            if let Some(default) = &config.default {
                entries.push(("default".to_string(), Value::from(default.as_str())));
            }
        }
        QuestionKind::OpenPath(config) | QuestionKind::SavePath(config) => {
            if let Some(default) = &config.default {
                entries.push(("default".to_string(), Value::from(default.as_str())));
            }
            if let Some(filter) = &config.filter {
                entries.push(("filter".to_string(), Value::from(filter.as_str())));
            }
        }
        QuestionKind::Choice(config) => {
            if config.multiple {
                entries.push(("multiple".to_string(), Value::Bool(true)));
            }
            if config.checks {
                entries.push(("checks".to_string(), Value::Bool(true)));
            }
            entries.push((
                "answers".to_string(),
                Value::List(config.answers().iter().map(export_answer).collect()),
            ));
        }
    }
    Value::Map(entries)
}

/// Export one answer.
pub fn export_answer(answer: &Answer) -> Value {
    let mut entries = vec![("name".to_string(), Value::from(answer.name()))];
    if let Some(tag) = answer.tag() {
        entries.push(("tag".to_string(), Value::from(tag)));
    }
    if answer.default() {
        entries.push(("default".to_string(), Value::Bool(true)));
    }
    Value::Map(entries)
}

#[cfg(test)]
mod tests {
    use dialogform_types::{ChoiceQuestion, PathQuestion, QuestionKind};

    use super::*;

    #[test]
    fn answer_compaction_omits_default_valued_fields() {
        let plain = export_answer(&Answer::new("red"));
        assert_eq!(plain.get("name").and_then(Value::as_str), Some("red"));
        assert!(!plain.contains_key("tag"));
        assert!(!plain.contains_key("default"));

        let selected = export_answer(&Answer::new("green").with_default(true));
        assert_eq!(selected.get("default"), Some(&Value::Bool(true)));
    }

    #[test]
    fn cleared_tag_leaves_no_key_behind() {
        let mut answer = Answer::new("blue").with_tag(7);
        assert!(export_answer(&answer).contains_key("tag"));

        answer.clear_tag();
        assert!(!export_answer(&answer).contains_key("tag"));
    }

    #[test]
    fn noalign_marker_is_asymmetric() {
        let aligned = export_question(&Question::string());
        assert!(!aligned.contains_key("noalign"));
        assert!(!aligned.contains_key("align"));

        let unaligned = export_question(&Question::string().with_align(false));
        assert_eq!(unaligned.get("noalign"), Some(&Value::Bool(true)));
    }

    #[test]
    fn choice_flags_compact_but_answers_list_stays() {
        let question = Question::choice();
        let exported = export_question(&question);
        assert!(!exported.contains_key("multiple"));
        assert!(!exported.contains_key("checks"));
        assert_eq!(exported.get("answers"), Some(&Value::List(vec![])));

        let question = Question::new(QuestionKind::Choice(
            ChoiceQuestion::new().with_multiple(true).with_checks(true),
        ));
        let exported = export_question(&question);
        assert_eq!(exported.get("multiple"), Some(&Value::Bool(true)));
        assert_eq!(exported.get("checks"), Some(&Value::Bool(true)));
    }

    #[test]
    fn path_question_carries_default_and_filter() {
        let question = Question::new(QuestionKind::OpenPath(
            PathQuestion::new().with_default("a.ttf").with_filter("*.ttf"),
        ));
        let exported = export_question(&question);
        assert_eq!(exported.get("type").and_then(Value::as_str), Some("openpath"));
        assert_eq!(exported.get("default").and_then(Value::as_str), Some("a.ttf"));
        assert_eq!(exported.get("filter").and_then(Value::as_str), Some("*.ttf"));
    }

    #[test]
    fn unlabeled_category_has_no_category_key() {
        let exported = export_category(&Category::new());
        assert!(!exported.contains_key("category"));
        assert_eq!(exported.get("questions"), Some(&Value::List(vec![])));
    }
}
