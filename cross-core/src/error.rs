use std::{error::Error as StdError, fmt};

use miette::Diagnostic;
use serde_json::Value;

/// Boxed error used as the cause of an [`ArgumentError`].
pub type Cause = Box<dyn StdError + Send + Sync + 'static>;

/// What was wrong with the argument.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ArgumentErrorKind {
    /// A required argument was absent.
    Null,
    /// The argument was present but not acceptable.
    #[default]
    Invalid,
    /// A string argument was empty or contained only white space.
    WhiteSpace,
}

impl ArgumentErrorKind {
    /// Message used when the error carries none of its own.
    pub fn default_message(&self) -> &'static str {
        match self {
            ArgumentErrorKind::Null => "Value cannot be null.",
            ArgumentErrorKind::Invalid => "Value does not fall within the expected range.",
            ArgumentErrorKind::WhiteSpace => "Value cannot be empty or white space.",
        }
    }

    /// Diagnostic code reported through miette.
    pub fn code(&self) -> &'static str {
        match self {
            ArgumentErrorKind::Null => "cross::argument_null",
            ArgumentErrorKind::Invalid => "cross::argument_invalid",
            ArgumentErrorKind::WhiteSpace => "cross::argument_white_space",
        }
    }
}

/// An argument failed validation.
///
/// Carries the name of the offending parameter, the value that was passed
/// (when it is worth reporting), an optional message overriding the kind's
/// default, and an optional underlying cause.
///
/// # Example
///
/// ```
/// use cross_core::ArgumentError;
///
/// let err = ArgumentError::white_space("name").with_actual_value("  ");
/// assert_eq!(err.param_name(), Some("name"));
/// assert_eq!(
///     err.to_string(),
///     "Value cannot be empty or white space. (Parameter 'name')"
/// );
/// ```
#[derive(Debug, Default)]
pub struct ArgumentError {
    kind: ArgumentErrorKind,
    param_name: Option<String>,
    actual_value: Option<Value>,
    message: Option<String>,
    cause: Option<Cause>,
}

impl ArgumentError {
    /// Create an error of the given kind with no parameter name.
    pub fn new(kind: ArgumentErrorKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// A required argument was absent.
    pub fn null(param_name: impl Into<String>) -> Self {
        Self::new(ArgumentErrorKind::Null).with_param_name(param_name)
    }

    /// An argument was present but not acceptable.
    pub fn invalid(param_name: impl Into<String>) -> Self {
        Self::new(ArgumentErrorKind::Invalid).with_param_name(param_name)
    }

    /// A string argument was empty or white space.
    pub fn white_space(param_name: impl Into<String>) -> Self {
        Self::new(ArgumentErrorKind::WhiteSpace).with_param_name(param_name)
    }

    /// An error described only by a message and the error that caused it.
    pub fn from_message(message: impl Into<String>, cause: impl Into<Cause>) -> Self {
        Self::default().with_message(message).with_cause(cause)
    }

    pub fn with_param_name(mut self, param_name: impl Into<String>) -> Self {
        self.param_name = Some(param_name.into());
        self
    }

    pub fn with_actual_value(mut self, actual_value: impl Into<Value>) -> Self {
        self.actual_value = Some(actual_value.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_cause(mut self, cause: impl Into<Cause>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    pub fn kind(&self) -> ArgumentErrorKind {
        self.kind
    }

    /// Name of the parameter that failed validation.
    pub fn param_name(&self) -> Option<&str> {
        self.param_name.as_deref()
    }

    /// The value that was passed, if it was captured.
    pub fn actual_value(&self) -> Option<&Value> {
        self.actual_value.as_ref()
    }

    /// The message without the parameter suffix.
    pub fn message(&self) -> &str {
        self.message
            .as_deref()
            .unwrap_or_else(|| self.kind.default_message())
    }

    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())?;
        if let Some(param_name) = &self.param_name {
            write!(f, " (Parameter '{}')", param_name)?;
        }
        Ok(())
    }
}

impl StdError for ArgumentError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn StdError + 'static))
    }
}

impl Diagnostic for ArgumentError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.kind.code()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let actual = self.actual_value.as_ref()?;
        Some(Box::new(format!("the value passed was {}", actual)))
    }
}
