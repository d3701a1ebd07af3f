use std::error;
use std::fmt;

/// Convenient result type for activity orchestration operations.
pub type ActivitiesResult<T> = Result<T, ActivitiesError>;

/// Main error type for activity orchestration operations.
///
/// [`ActivitiesError`] pairs an [`ErrorKind`] with a static description and
/// optional dynamic detail. Remote-call failures are never retried: the first
/// error encountered by the step is propagated to the caller as-is.
#[derive(Debug, Clone)]
pub struct ActivitiesError {
    repr: ErrorRepr,
}

/// Internal representation of error data.
///
/// Users should not interact with this type directly but use
/// [`ActivitiesError`] methods instead.
#[derive(Debug, Clone)]
enum ErrorRepr {
    /// Error with kind and static description
    WithDescription(ErrorKind, &'static str),
    /// Error with kind, static description, and dynamic detail
    WithDescriptionAndDetail(ErrorKind, &'static str, String),
}

/// Specific categories of errors that can occur while orchestrating
/// activities.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    // Remote job API errors, one per operation of the client.
    ActivityListFailed,
    ActivityCreationFailed,
    RunSubmissionFailed,
    RunQueryFailed,

    // Connector errors
    Unauthorized,

    // General errors
    ConfigError,
    InvalidState,
    Unknown,
}

impl ActivitiesError {
    /// Returns the [`ErrorKind`] of this error.
    pub fn kind(&self) -> ErrorKind {
        match self.repr {
            ErrorRepr::WithDescription(kind, _)
            | ErrorRepr::WithDescriptionAndDetail(kind, _, _) => kind,
        }
    }

    /// Returns the detailed error information, if any.
    pub fn detail(&self) -> Option<&str> {
        match self.repr {
            ErrorRepr::WithDescriptionAndDetail(_, _, ref detail) => Some(detail.as_str()),
            _ => None,
        }
    }
}

impl PartialEq for ActivitiesError {
    fn eq(&self, other: &ActivitiesError) -> bool {
        self.kind() == other.kind()
    }
}

impl fmt::Display for ActivitiesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self.repr {
            ErrorRepr::WithDescription(kind, desc) => {
                fmt::Debug::fmt(&kind, f)?;
                f.write_str(": ")?;
                desc.fmt(f)?;

                Ok(())
            }
            ErrorRepr::WithDescriptionAndDetail(kind, desc, ref detail) => {
                fmt::Debug::fmt(&kind, f)?;
                f.write_str(": ")?;
                desc.fmt(f)?;
                f.write_str(" -> ")?;
                detail.fmt(f)?;

                Ok(())
            }
        }
    }
}

impl error::Error for ActivitiesError {}

/// Creates an [`ActivitiesError`] from an error kind and static description.
impl From<(ErrorKind, &'static str)> for ActivitiesError {
    fn from((kind, desc): (ErrorKind, &'static str)) -> ActivitiesError {
        ActivitiesError {
            repr: ErrorRepr::WithDescription(kind, desc),
        }
    }
}

/// Creates an [`ActivitiesError`] from an error kind, static description, and
/// dynamic detail.
impl From<(ErrorKind, &'static str, String)> for ActivitiesError {
    fn from((kind, desc, detail): (ErrorKind, &'static str, String)) -> ActivitiesError {
        ActivitiesError {
            repr: ErrorRepr::WithDescriptionAndDetail(kind, desc, detail),
        }
    }
}
