//! The gradebook facade.
//!
//! Owns one registry, catalog, and ledger and keeps them consistent: every
//! student added here gets its entry map in the same call.

use tracing::{info, warn};

use crate::catalog::CourseCatalog;
use crate::error::RosterError;
use crate::ledger::{Entries, Ledger};
use crate::model::{Student, StudentHandle};
use crate::registry::Registry;
use crate::report::{details_report, RosterSnapshot, StudentRecord};

#[derive(Debug, Clone, Default)]
pub struct Gradebook {
    registry: Registry,
    catalog: CourseCatalog,
    ledger: Ledger,
}

impl Gradebook {
    pub fn new(catalog: CourseCatalog) -> Self {
        info!(courses = catalog.list_courses().len(), "gradebook created");
        Self {
            registry: Registry::new(),
            catalog,
            ledger: Ledger::new(),
        }
    }

    /// Add a student and create their empty entry map.
    pub fn add_student(&mut self, id: i32, name: impl Into<String>, age: i32) -> StudentHandle {
        let handle = self.registry.add_student(id, name, age);
        self.ledger.create_entry_map_for(handle);
        handle
    }

    pub fn update_student(
        &mut self,
        handle: StudentHandle,
        new_name: impl Into<String>,
        new_age: i32,
    ) -> Result<(), RosterError> {
        self.registry.update_student(handle, new_name, new_age)
    }

    pub fn list_students(&self) -> &[Student] {
        self.registry.list_students()
    }

    pub fn list_courses(&self) -> &[String] {
        self.catalog.list_courses()
    }

    pub fn student(&self, handle: StudentHandle) -> Option<&Student> {
        self.registry.get(handle)
    }

    /// Resolve a zero-based position in [`list_students`](Self::list_students).
    pub fn handle_at(&self, position: usize) -> Option<StudentHandle> {
        self.registry.handle_at(position)
    }

    pub fn catalog(&self) -> &CourseCatalog {
        &self.catalog
    }

    /// Enroll a student in a catalog course.
    pub fn enroll(&mut self, handle: StudentHandle, course: &str) -> Result<(), RosterError> {
        self.check_student(handle)?;
        if !self.catalog.contains(course) {
            warn!(%handle, course, "enroll rejected: course not in catalog");
            return Err(RosterError::UnknownCourse(course.to_string()));
        }
        self.ledger.enroll(handle, course)
    }

    pub fn assign_grade(
        &mut self,
        handle: StudentHandle,
        course: &str,
        grade: impl Into<String>,
    ) -> Result<(), RosterError> {
        self.check_student(handle)?;
        self.ledger.assign_grade(handle, course, grade)
    }

    pub fn entries_for(&self, handle: StudentHandle) -> Result<&Entries, RosterError> {
        self.check_student(handle)?;
        self.ledger
            .entries_for(handle)
            .ok_or(RosterError::InvalidReference(handle))
    }

    pub fn enrolled_courses(&self, handle: StudentHandle) -> Result<Vec<&str>, RosterError> {
        self.check_student(handle)?;
        Ok(self.ledger.enrolled_courses(handle))
    }

    /// The details report for every student, in roster order.
    pub fn details(&self) -> String {
        details_report(self.registry.list_students())
    }

    pub fn snapshot(&self) -> RosterSnapshot {
        let students = self
            .registry
            .iter()
            .map(|(handle, s)| StudentRecord {
                id: s.id(),
                name: s.name.clone(),
                age: s.age,
                grades: self.ledger.entries_for(handle).cloned().unwrap_or_default(),
            })
            .collect();
        RosterSnapshot {
            courses: self.catalog.list_courses().to_vec(),
            students,
        }
    }

    fn check_student(&self, handle: StudentHandle) -> Result<(), RosterError> {
        if self.registry.contains(handle) {
            Ok(())
        } else {
            Err(RosterError::InvalidReference(handle))
        }
    }
}
