//! Gradebook error types.
//!
//! Every failure here is recoverable: the caller reports it and retries
//! with corrected input. No operation leaves partial state behind.

use thiserror::Error;

use crate::model::StudentHandle;

/// Errors returned by registry, ledger, and gradebook operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// The handle does not resolve to a student in this gradebook.
    #[error("no student for {0}")]
    InvalidReference(StudentHandle),

    /// The student already has an entry for this course.
    #[error("student is already enrolled in {course}")]
    AlreadyEnrolled { course: String },

    /// The student has no entry for this course.
    #[error("student is not enrolled in {course}")]
    NotEnrolled { course: String },

    /// The course is not part of the catalog.
    #[error("unknown course: {0}")]
    UnknownCourse(String),
}

/// Errors raised while building a course catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The catalog must list at least one course.
    #[error("course catalog is empty")]
    Empty,

    /// Course names must not be blank.
    #[error("course name at position {0} is blank")]
    BlankName(usize),

    /// Each course may appear only once.
    #[error("duplicate course: {0}")]
    Duplicate(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = RosterError::AlreadyEnrolled {
            course: "Math".into(),
        };
        assert_eq!(err.to_string(), "student is already enrolled in Math");

        let err = RosterError::InvalidReference(StudentHandle::from_index(3));
        assert_eq!(err.to_string(), "no student for student #3");

        assert_eq!(
            CatalogError::Duplicate("Math".into()).to_string(),
            "duplicate course: Math"
        );
    }
}
