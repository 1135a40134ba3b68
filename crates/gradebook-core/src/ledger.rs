//! The enrollment and grade ledger.
//!
//! Each student handle owns one map from course name to [`Grade`]. A pair
//! moves from absent to enrolled-ungraded on [`Ledger::enroll`], and to
//! graded on [`Ledger::assign_grade`]. Entries are never removed.

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, warn};

use crate::error::RosterError;
use crate::model::{Grade, StudentHandle};

/// Course name to grade, for one student.
pub type Entries = BTreeMap<String, Grade>;

#[derive(Debug, Clone, Default)]
pub struct Ledger {
    entries: HashMap<StudentHandle, Entries>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the empty entry map for a newly added student.
    ///
    /// An existing map is left untouched.
    pub fn create_entry_map_for(&mut self, student: StudentHandle) {
        self.entries.entry(student).or_default();
        debug!(%student, "entry map created");
    }

    /// Enroll a student in a course with no grade.
    pub fn enroll(&mut self, student: StudentHandle, course: &str) -> Result<(), RosterError> {
        let entries = self.entries_mut(student)?;
        if entries.contains_key(course) {
            warn!(%student, course, "enroll rejected: already enrolled");
            return Err(RosterError::AlreadyEnrolled {
                course: course.to_string(),
            });
        }
        entries.insert(course.to_string(), Grade::NotGraded);
        debug!(%student, course, "enrolled");
        Ok(())
    }

    /// Set or overwrite the grade for an existing enrollment.
    pub fn assign_grade(
        &mut self,
        student: StudentHandle,
        course: &str,
        grade: impl Into<String>,
    ) -> Result<(), RosterError> {
        let entries = self.entries_mut(student)?;
        let Some(slot) = entries.get_mut(course) else {
            warn!(%student, course, "grade rejected: not enrolled");
            return Err(RosterError::NotEnrolled {
                course: course.to_string(),
            });
        };
        *slot = Grade::Graded(grade.into());
        debug!(%student, course, grade = %slot, "grade assigned");
        Ok(())
    }

    /// Read-only view of a student's enrollments.
    pub fn entries_for(&self, student: StudentHandle) -> Option<&Entries> {
        self.entries.get(&student)
    }

    /// Courses the student is enrolled in, graded or not.
    pub fn enrolled_courses(&self, student: StudentHandle) -> Vec<&str> {
        self.entries
            .get(&student)
            .map(|e| e.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    fn entries_mut(&mut self, student: StudentHandle) -> Result<&mut Entries, RosterError> {
        self.entries
            .get_mut(&student)
            .ok_or(RosterError::InvalidReference(student))
    }
}
