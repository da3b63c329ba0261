//! Error type shared by every breach-core operation.

use thiserror::Error;

use crate::quantity::Quantity;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BreachError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BreachError {
    /// No equation is registered for this identifier and output quantity.
    ///
    /// Expected for several families, which only define a subset of the
    /// quantities. Callers should degrade to "prediction not available".
    #[error("no {quantity} equation is available for '{identifier}'")]
    NotFound {
        identifier: String,
        quantity: Quantity,
    },

    /// Identifier is not of the form `<family>-<Q|T|B>`.
    #[error("malformed equation identifier '{0}', expected '<family>-<Q|T|B>'")]
    MalformedIdentifier(String),

    /// A numeric input is missing its positivity or finiteness precondition.
    #[error("invalid input: {field} = {value} ({reason})")]
    InvalidInput {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Categorical text did not exactly match one of the accepted tags.
    #[error("unknown {kind} '{value}', expected one of {expected:?}")]
    UnknownCategory {
        kind: &'static str,
        value: String,
        expected: &'static [&'static str],
    },
}

impl BreachError {
    pub fn not_found(identifier: impl Into<String>, quantity: Quantity) -> Self {
        Self::NotFound {
            identifier: identifier.into(),
            quantity,
        }
    }

    /// `true` for the recoverable "equation not implemented" condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_quantity() {
        let err = BreachError::not_found("Webby (1996)", Quantity::TimeToFailure);
        assert_eq!(
            err.to_string(),
            "no time to failure equation is available for 'Webby (1996)'"
        );
        assert!(err.is_not_found());
    }

    #[test]
    fn invalid_input_message() {
        let err = BreachError::InvalidInput {
            field: "height_of_water",
            value: 0.0,
            reason: "must be positive",
        };
        assert!(err.to_string().contains("height_of_water = 0"));
        assert!(!err.is_not_found());
    }
}
