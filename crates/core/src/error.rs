/// Failure while writing a normalized value back into its field.
///
/// Absent targets, absent rule sets and undeclared types are not errors; they
/// pass through untouched. These variants mean the object's shape does not
/// match what the walk was told it could do, so the current call is aborted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    /// A non-optional string field normalized to an absent value.
    #[error("Field `{field}` of `{owner}` cannot hold an absent value after normalization")]
    Unrepresentable {
        owner: &'static str,
        field: &'static str,
    },

    /// The field's storage could not be written.
    #[error("Field `{field}` of `{owner}` is not writable: {reason}")]
    Inaccessible {
        owner: &'static str,
        field: &'static str,
        reason: String,
    },
}

impl NormalizeError {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            NormalizeError::Unrepresentable { field, .. }
            | NormalizeError::Inaccessible { field, .. } => field,
        }
    }

    /// Name of the type that declares the offending field.
    pub fn owner(&self) -> &'static str {
        match self {
            NormalizeError::Unrepresentable { owner, .. }
            | NormalizeError::Inaccessible { owner, .. } => owner,
        }
    }
}
