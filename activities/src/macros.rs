//! Macros for activity orchestration error handling.
//!
//! Convenience macros for creating and returning
//! [`crate::error::ActivitiesError`] instances with reduced boilerplate.

/// Creates an [`crate::error::ActivitiesError`] from error kind and
/// description, with optional dynamic detail.
#[macro_export]
macro_rules! activities_error {
    ($kind:expr, $desc:expr) => {
        ActivitiesError::from(($kind, $desc))
    };
    ($kind:expr, $desc:expr, $detail:expr) => {
        ActivitiesError::from(($kind, $desc, $detail.to_string()))
    };
}

/// Creates and returns an [`crate::error::ActivitiesError`] from the current
/// function.
#[macro_export]
macro_rules! bail {
    ($kind:expr, $desc:expr) => {
        return Err($crate::activities_error!($kind, $desc))
    };
    ($kind:expr, $desc:expr, $detail:expr) => {
        return Err($crate::activities_error!($kind, $desc, $detail))
    };
}
