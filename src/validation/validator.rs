use regex::Regex;
use tracing::{debug, error, info, instrument};

use crate::error::ConfigurationError;
use crate::validation::store::PatternStore;

/// Validates the contact info field against a single configured pattern.
///
/// Two-phase lifecycle: built once at startup via [`initialize`], then
/// reused across requests. A constructed validator always holds a compiled
/// pattern; every misconfiguration is rejected before construction, so no
/// input is ever accepted under a bad configuration.
///
/// [`initialize`]: ContactInfoValidator::initialize
#[derive(Debug)]
pub struct ContactInfoValidator {
    expression_type: String,
    pattern: Regex,
}

impl ContactInfoValidator {
    /// Resolves `expression_type` against the store and compiles its
    /// pattern, anchored at both ends.
    ///
    /// # Arguments
    /// * `store` - Pattern storage to resolve the active type against
    /// * `expression_type` - The configured active pattern type
    ///
    /// # Returns
    /// * A ready validator, or the `ConfigurationError` that makes it unusable
    #[instrument(skip(store))]
    pub fn initialize(
        store: &PatternStore,
        expression_type: &str,
    ) -> Result<Self, ConfigurationError> {
        if expression_type.trim().is_empty() {
            error!("Contact info type missing!");
            return Err(ConfigurationError::MissingType);
        }

        let record = store.get(expression_type).ok_or_else(|| {
            error!(
                "No pattern stored for contact info type: {}",
                expression_type
            );
            ConfigurationError::UnknownType(expression_type.to_string())
        })?;

        for known in store.list() {
            debug!("Registered expression type: {}", known.expression_type);
        }

        // Whole-string semantics: the entire input must conform, never a substring.
        let anchored = format!("^(?:{})$", record.pattern);
        let pattern = Regex::new(&anchored).map_err(|source| {
            error!(
                "Stored pattern for type {} does not compile: {}",
                expression_type, source
            );
            ConfigurationError::InvalidPattern {
                expression_type: expression_type.to_string(),
                source,
            }
        })?;

        info!(
            "Contact info validator ready, active type: {}",
            expression_type
        );
        Ok(Self {
            expression_type: expression_type.to_string(),
            pattern,
        })
    }

    /// Whole-string match of `value` against the active pattern.
    ///
    /// The empty string matches only if the pattern itself accepts it.
    /// Pure: repeated calls with the same input always agree.
    pub fn is_valid(&self, value: &str) -> bool {
        self.pattern.is_match(value)
    }

    /// The expression type this validator was configured with.
    pub fn expression_type(&self) -> &str {
        &self.expression_type
    }
}
