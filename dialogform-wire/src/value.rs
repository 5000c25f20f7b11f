use dialogform_types::{DialogError, Tag};

/// An untyped wire value: the nested plain maps and ordered lists a UI host
/// consumes.
///
/// Maps preserve insertion order, and a missing key means "not present" -
/// there is deliberately no null variant, because the host distinguishes
/// "key missing" from "key present with a falsy value".
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A string value.
    Str(String),

    /// An integer value.
    Int(i64),

    /// A floating-point value. Legal on the wire, but not usable as a tag.
    Float(f64),

    /// A boolean value.
    Bool(bool),

    /// An ordered list of values.
    List(Vec<Value>),

    /// An ordered map of key-value entries.
    Map(Vec<(String, Value)>),
}

impl Value {
    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as a float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get this value as a bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as a list slice.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Try to get this value as map entries, in insertion order.
    pub fn as_map(&self) -> Option<&[(String, Value)]> {
        match self {
            Self::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Look up a key in a map value. Returns `None` for non-map values too.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Self::Map(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Check whether a map value contains the given key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Get the kind name of this value for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Str(_) => "string",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
            Self::List(_) => "list",
            Self::Map(_) => "map",
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::List(items)
    }
}

impl From<&Tag> for Value {
    fn from(tag: &Tag) -> Self {
        match tag {
            Tag::Str(s) => Self::Str(s.clone()),
            Tag::Int(i) => Self::Int(*i),
            Tag::Bool(b) => Self::Bool(*b),
        }
    }
}

impl From<Tag> for Value {
    fn from(tag: Tag) -> Self {
        Self::from(&tag)
    }
}

/// A wire value is usable as a tag only if its kind is hashable; floats,
/// lists, and maps are rejected.
impl TryFrom<&Value> for Tag {
    type Error = DialogError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Str(s) => Ok(Tag::Str(s.clone())),
            Value::Int(i) => Ok(Tag::Int(*i)),
            Value::Bool(b) => Ok(Tag::Bool(*b)),
            other => Err(DialogError::InvalidType {
                field: "tag",
                expected: "hashable value (string, int, or bool)",
                actual: other.type_name(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_lookup_preserves_first_match() {
        let value = Value::Map(vec![
            ("name".to_string(), Value::from("red")),
            ("default".to_string(), Value::Bool(true)),
        ]);
        assert_eq!(value.get("name").and_then(Value::as_str), Some("red"));
        assert!(value.contains_key("default"));
        assert!(!value.contains_key("tag"));
    }

    #[test]
    fn get_on_non_map_is_none() {
        assert_eq!(Value::Int(3).get("name"), None);
    }

    #[test]
    fn hashable_values_convert_to_tags() {
        assert_eq!(Tag::try_from(&Value::from("x")).unwrap(), Tag::Str("x".to_string()));
        assert_eq!(Tag::try_from(&Value::Int(7)).unwrap(), Tag::Int(7));
        assert_eq!(Tag::try_from(&Value::Bool(true)).unwrap(), Tag::Bool(true));
    }

    #[test]
    fn non_hashable_values_are_rejected_as_tags() {
        for value in [Value::Float(1.5), Value::List(vec![]), Value::Map(vec![])] {
            let result = Tag::try_from(&value);
            assert!(matches!(
                result,
                Err(DialogError::InvalidType { field: "tag", .. })
            ));
        }
    }
}
