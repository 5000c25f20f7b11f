use std::fmt;

/// An opaque identifier attached to questions and answers.
///
/// Tags are round-tripped to the UI host unchanged and are unrelated to
/// display text. The closed set of kinds keeps every tag usable as a stable
/// lookup key (`Eq + Hash`); floats and composite values are deliberately not
/// representable here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tag {
    /// A string tag.
    Str(String),
    /// An integer tag.
    Int(i64),
    /// A boolean tag.
    Bool(bool),
}

impl Tag {
    /// Try to get this tag as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this tag as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this tag as a bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the kind name of this tag for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Str(_) => "string",
            Self::Int(_) => "int",
            Self::Bool(_) => "bool",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => write!(f, "{s}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for Tag {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Tag {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for Tag {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for Tag {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<bool> for Tag {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}
