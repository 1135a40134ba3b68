//! Core data model types for gradebook.
//!
//! Students are plain records owned by the [`Registry`](crate::registry::Registry).
//! Everything else refers to them through a [`StudentHandle`].

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Text shown for an enrollment that has no grade yet.
pub const NOT_GRADED: &str = "Not Graded";

/// A student on the roster.
///
/// `id` is a display field chosen by the user. It is not unique and is
/// never used for lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    id: i32,
    /// Free-text name.
    pub name: String,
    /// Age in years.
    pub age: i32,
}

impl Student {
    pub fn new(id: i32, name: impl Into<String>, age: i32) -> Self {
        Self {
            id,
            name: name.into(),
            age,
        }
    }

    /// The caller-assigned id. Fixed at creation.
    pub fn id(&self) -> i32 {
        self.id
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Student ID: {}, Name: {}, Age: {}",
            self.id, self.name, self.age
        )
    }
}

/// Stable identity of a student inside one gradebook.
///
/// Issued by the registry when the student is added. It stays valid for the
/// life of the registry because students are never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StudentHandle(usize);

impl StudentHandle {
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index)
    }

    pub(crate) fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for StudentHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "student #{}", self.0)
    }
}

/// Grade recorded for one enrollment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Grade {
    /// Enrolled, no grade assigned yet.
    #[default]
    NotGraded,
    /// Free-text grade, never validated.
    Graded(String),
}

impl Grade {
    pub fn as_str(&self) -> &str {
        match self {
            Grade::NotGraded => NOT_GRADED,
            Grade::Graded(text) => text,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<&str> for Grade {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl Serialize for Grade {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
