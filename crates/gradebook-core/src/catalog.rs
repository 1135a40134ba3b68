//! The course catalog.
//!
//! Built once at startup and read-only afterwards.

use std::collections::HashSet;

use crate::error::CatalogError;

/// Courses every gradebook starts with unless configured otherwise.
pub const DEFAULT_COURSES: [&str; 3] = ["Math", "Science", "History"];

/// Ordered list of course names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseCatalog {
    courses: Vec<String>,
}

impl CourseCatalog {
    /// Build a catalog from configured names, keeping their order.
    ///
    /// Names are trimmed. Blank or repeated names are rejected.
    pub fn from_names<I, S>(names: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut courses = Vec::new();
        for (i, name) in names.into_iter().enumerate() {
            let name = name.as_ref().trim();
            if name.is_empty() {
                return Err(CatalogError::BlankName(i));
            }
            if !seen.insert(name.to_string()) {
                return Err(CatalogError::Duplicate(name.to_string()));
            }
            courses.push(name.to_string());
        }
        if courses.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { courses })
    }

    pub fn list_courses(&self) -> &[String] {
        &self.courses
    }

    pub fn contains(&self, course: &str) -> bool {
        self.courses.iter().any(|c| c == course)
    }

    /// Course at a zero-based position.
    pub fn course_at(&self, position: usize) -> Option<&str> {
        self.courses.get(position).map(String::as_str)
    }
}

impl Default for CourseCatalog {
    fn default() -> Self {
        Self {
            courses: DEFAULT_COURSES.iter().map(|c| c.to_string()).collect(),
        }
    }
}
