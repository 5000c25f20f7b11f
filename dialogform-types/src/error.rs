/// Error type for dialog definition operations.
///
/// All validation is synchronous and local to the accessor that failed, and a
/// failed operation never partially applies. These are authoring errors: they
/// surface immediately to the code building the definition and never reach an
/// end user, because this crate does not run at dialog-display time.
#[derive(Debug, thiserror::Error)]
pub enum DialogError {
    /// A field was given a value of the wrong kind.
    #[error("Invalid type for {field}: expected {expected}, got {actual}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
        actual: &'static str,
    },

    /// A field was given a value outside its allowed set.
    #[error("Invalid value for {field}: {value:?}")]
    InvalidValue { field: &'static str, value: String },
}
