use crate::Tag;

/// A single selectable option on a choice question.
///
/// A terminal value object: a display name, an optional host tag, and a
/// pre-selection flag. Answers carry no behavior of their own.
#[derive(Debug, Clone, PartialEq)]
pub struct Answer {
    /// The text shown to the user for this option.
    name: String,

    /// Optional host tag; absent means "no tag", never a null tag.
    tag: Option<Tag>,

    /// Whether this option starts out selected.
    default: bool,
}

impl Answer {
    /// Create a new answer with the given display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tag: None,
            default: false,
        }
    }

    /// Set the host tag.
    pub fn with_tag(mut self, tag: impl Into<Tag>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Set whether this option starts out selected.
    pub fn with_default(mut self, default: bool) -> Self {
        self.default = default;
        self
    }

    /// Get the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the display name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
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

    /// Whether this option starts out selected.
    pub fn default(&self) -> bool {
        self.default
    }

    /// Set whether this option starts out selected.
    pub fn set_default(&mut self, default: bool) {
        self.default = default;
    }
}
