//! Core types for dialogform.
//!
//! This crate provides the presentation-agnostic definition of a dialog form:
//! - `Dialog` - The root artifact, an ordered sequence of categories
//! - `Category` - An ordered, optionally labeled group of questions
//! - `Question` and `QuestionKind` - Individual questions and their four variants
//! - `Answer` - A selectable option on a choice question
//! - `Tag` - An opaque, hashable identifier round-tripped to the UI host
//!
//! Nothing here renders anything. A finished `Dialog` is handed to the
//! `dialogform-wire` crate, which turns it into the nested map/list structure
//! an external UI host consumes.

mod answer;
pub use answer::Answer;

mod category;
pub use category::Category;

mod dialog;
pub use dialog::Dialog;

mod error;
pub use error::DialogError;

mod question;
pub use question::{
    ChoiceQuestion, PathQuestion, Question, QuestionKind, QuestionType, StringQuestion,
};

mod tag;
pub use tag::Tag;
