use std::fmt::{Display, Formatter};

/// Converts errors from their error type (of the submodule) to that of
/// a [`crate::Error`] variant.
///
/// ```rust,ignore
/// use routers_tunnel::error::ConfigError;
/// routers_tunnel::impl_err!(ConfigError, Config);
/// ```
#[macro_export]
macro_rules! impl_err {
    ($from:ty, $variant:ident) => {
        impl From<$from> for $crate::Error {
            fn from(value: $from) -> Self {
                $crate::Error::$variant(value)
            }
        }
    };
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    Progress(ProgressError),
    Config(ConfigError),
}

/// Raised when a progress snapshot is built or advanced
/// onto a position the route does not contain.
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressError {
    /// The route has no legs.
    EmptyRoute,
    /// The leg at the given index has no steps.
    EmptyLeg(usize),
    LegOutOfRange { index: usize, count: usize },
    StepOutOfRange { index: usize, count: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The environment supplied a value which is not a finite,
    /// non-negative number.
    InvalidValue { key: &'static str, value: String },
}

impl_err!(ProgressError, Progress);
impl_err!(ConfigError, Config);

impl Display for ProgressError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ProgressError::EmptyRoute => write!(f, "route contains no legs"),
            ProgressError::EmptyLeg(leg) => write!(f, "leg {leg} contains no steps"),
            ProgressError::LegOutOfRange { index, count } => {
                write!(f, "leg index {index} out of range for {count} legs")
            }
            ProgressError::StepOutOfRange { index, count } => {
                write!(f, "step index {index} out of range for {count} steps")
            }
        }
    }
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { key, value } => {
                write!(f, "invalid value for {key}: {value:?}")
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Progress(err) => write!(f, "progress error: {err}"),
            Error::Config(err) => write!(f, "configuration error: {err}"),
        }
    }
}

impl std::error::Error for ProgressError {}
impl std::error::Error for ConfigError {}
impl std::error::Error for Error {}
