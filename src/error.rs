use thiserror::Error;

/// A configuration problem that makes the validator unusable.
///
/// Any of these is fatal at startup: the service refuses to run with a
/// validator that could never match (fail closed), rather than answering
/// every submission with "invalid" for a reason the operator cannot see.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// The active contact info type was empty or whitespace.
    #[error("contact info type missing")]
    MissingType,

    /// The active contact info type has no stored pattern.
    #[error("no validation pattern stored for type '{0}'")]
    UnknownType(String),

    /// The stored pattern is not a valid regular expression.
    #[error("stored pattern for type '{expression_type}' does not compile")]
    InvalidPattern {
        expression_type: String,
        #[source]
        source: regex::Error,
    },
}
