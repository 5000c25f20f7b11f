//! Dynamic-to-static validation of wire values back into the typed model.
//!
//! A host (or a hand-written literal) hands over untyped nested maps; every
//! field's kind is checked before a typed record is produced. Each function
//! builds its complete result before returning, so a failed parse never
//! leaves a half-built definition behind.

use dialogform_types::{
    Answer, Category, ChoiceQuestion, Dialog, DialogError, PathQuestion, Question, QuestionKind,
    QuestionType, StringQuestion, Tag,
};

use crate::Value;

/// Parse a whole dialog from an ordered list of category maps.
pub fn parse_dialog(value: &Value) -> Result<Dialog, DialogError> {
    let Some(items) = value.as_list() else {
        return Err(invalid_type("dialog", "list", value));
    };
    items.iter().map(parse_category).collect()
}

/// Parse one category map.
pub fn parse_category(value: &Value) -> Result<Category, DialogError> {
    if value.as_map().is_none() {
        return Err(invalid_type("category", "map", value));
    }
    let mut category = Category::new();
    if let Some(label) = opt_string(value, "category")? {
        category.set_label(label);
    }
    let questions = required(value, "questions", "list")?;
    let Some(items) = questions.as_list() else {
        return Err(invalid_type("questions", "list", questions));
    };
    let questions = items
        .iter()
        .map(parse_question)
        .collect::<Result<Vec<_>, _>>()?;
    category.set_questions(questions);
    Ok(category)
}

/// Parse one question map, dispatching on its `type` discriminator.
pub fn parse_question(value: &Value) -> Result<Question, DialogError> {
    if value.as_map().is_none() {
        return Err(invalid_type("question", "map", value));
    }
    let qtype = required(value, "type", "string")?;
    let Some(qtype) = qtype.as_str() else {
        return Err(invalid_type("type", "string", qtype));
    };
    let qtype: QuestionType = qtype.parse()?;

    let kind = match qtype {
        QuestionType::String => QuestionKind::String(StringQuestion {
            default: opt_string(value, "default")?,
        }),
        QuestionType::OpenPath => QuestionKind::OpenPath(parse_path_config(value)?),
        QuestionType::SavePath => QuestionKind::SavePath(parse_path_config(value)?),
        QuestionType::Choice => QuestionKind::Choice(parse_choice_config(value)?),
    };

    let mut question = Question::new(kind);
    if let Some(label) = opt_string(value, "question")? {
        question.set_label(label);
    }
    if let Some(tag) = value.get("tag") {
        question.set_tag(Tag::try_from(tag)?);
    }
    if let Some(noalign) = value.get("noalign") {
        let Some(noalign) = noalign.as_bool() else {
            return Err(invalid_type("noalign", "bool", noalign));
        };
        question.set_align(!noalign);
    }
    Ok(question)
}

/// Parse one answer map.
pub fn parse_answer(value: &Value) -> Result<Answer, DialogError> {
    if value.as_map().is_none() {
        return Err(invalid_type("answer", "map", value));
    }
    let name = required(value, "name", "string")?;
    let Some(name) = name.as_str() else {
        return Err(invalid_type("name", "string", name));
    };
    let mut answer = Answer::new(name);
    if let Some(tag) = value.get("tag") {
        answer.set_tag(Tag::try_from(tag)?);
    }
    answer.set_default(opt_flag(value, "default")?);
    Ok(answer)
}

fn parse_path_config(value: &Value) -> Result<PathQuestion, DialogError> {
    Ok(PathQuestion {
        default: opt_string(value, "default")?,
        filter: opt_string(value, "filter")?,
    })
}

fn parse_choice_config(value: &Value) -> Result<ChoiceQuestion, DialogError> {
    let mut config = ChoiceQuestion::new();
    config.multiple = opt_flag(value, "multiple")?;
    config.checks = opt_flag(value, "checks")?;
    let answers = required(value, "answers", "list")?;
    let Some(items) = answers.as_list() else {
        return Err(invalid_type("answers", "list", answers));
    };
    let answers = items
        .iter()
        .map(parse_answer)
        .collect::<Result<Vec<_>, _>>()?;
    config.set_answers(answers);
    Ok(config)
}

fn invalid_type(field: &'static str, expected: &'static str, actual: &Value) -> DialogError {
    DialogError::InvalidType {
        field,
        expected,
        actual: actual.type_name(),
    }
}

fn required<'a>(
    map: &'a Value,
    key: &'static str,
    expected: &'static str,
) -> Result<&'a Value, DialogError> {
    map.get(key).ok_or(DialogError::InvalidType {
        field: key,
        expected,
        actual: "absent",
    })
}

fn opt_string(map: &Value, key: &'static str) -> Result<Option<String>, DialogError> {
    match map.get(key) {
        None => Ok(None),
        Some(value) => match value.as_str() {
            Some(s) => Ok(Some(s.to_string())),
            None => Err(invalid_type(key, "string", value)),
        },
    }
}

fn opt_flag(map: &Value, key: &'static str) -> Result<bool, DialogError> {
    match map.get(key) {
        None => Ok(false),
        Some(value) => value.as_bool().ok_or_else(|| invalid_type(key, "bool", value)),
    }
}
