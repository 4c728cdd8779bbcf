//! Errors surfaced by sources, stages and drives.

use std::error::Error as StdError;
use thiserror::Error;

/// Boxed error raised by a user-supplied callback.
pub type CallbackError = Box<dyn StdError + Send + Sync + 'static>;

/// Errors that can escape a drive or a stage constructor.
///
/// Stop signals (`close`/`cut`) are not errors and never show up here.
#[derive(Debug, Error)]
pub enum BeamError {
    /// A source or stage was constructed with a degenerate parameter.
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// A user callback failed. The original error is kept as-is.
    #[error(transparent)]
    Callback(CallbackError),
}

impl BeamError {
    /// Wrap an error returned by a user callback.
    pub fn callback<E>(err: E) -> Self
    where
        E: Into<CallbackError>,
    {
        BeamError::Callback(err.into())
    }

    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        BeamError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Recover the concrete error a callback failed with.
    ///
    /// Returns `Err(self)` when this is not a callback error of type `T`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use beam::BeamError;
    /// use std::num::ParseIntError;
    ///
    /// let parse_failure = "x".parse::<i32>().unwrap_err();
    /// let err = BeamError::callback(parse_failure.clone());
    /// assert_eq!(err.downcast::<ParseIntError>().unwrap(), parse_failure);
    /// ```
    pub fn downcast<T>(self) -> Result<T, Self>
    where
        T: StdError + 'static,
    {
        match self {
            BeamError::Callback(inner) => inner
                .downcast::<T>()
                .map(|boxed| *boxed)
                .map_err(BeamError::Callback),
            other => Err(other),
        }
    }

    /// Check if this error came from a user callback.
    pub fn is_callback(&self) -> bool {
        matches!(self, BeamError::Callback(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug, PartialEq)]
    struct Boom(u32);

    impl fmt::Display for Boom {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "boom #{}", self.0)
        }
    }

    impl StdError for Boom {}

    #[test]
    fn callback_display_is_transparent() {
        let err = BeamError::callback(Boom(3));
        assert_eq!(err.to_string(), "boom #3");
        assert!(err.is_callback());
    }

    #[test]
    fn downcast_recovers_original_value() {
        let err = BeamError::callback(Boom(7));
        assert_eq!(err.downcast::<Boom>().unwrap(), Boom(7));
    }

    #[test]
    fn downcast_to_wrong_type_returns_error_back() {
        let err = BeamError::callback(Boom(1));
        let err = err.downcast::<fmt::Error>().unwrap_err();
        assert!(err.is_callback());
    }

    #[test]
    fn invalid_parameter_names_the_parameter() {
        let err = BeamError::invalid("len", "must be positive");
        assert_eq!(err.to_string(), "Invalid parameter `len`: must be positive");
        assert!(!err.is_callback());
        assert!(err.downcast::<Boom>().is_err());
    }

    #[test]
    fn string_callbacks_keep_their_message() {
        let err = BeamError::callback("failure");
        assert_eq!(err.to_string(), "failure");
    }
}
