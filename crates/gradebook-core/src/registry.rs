//! The student registry.

use tracing::{debug, warn};

use crate::error::RosterError;
use crate::model::{Student, StudentHandle};

/// Insertion-ordered collection of students.
///
/// A handle is the student's position in insertion order. Students are
/// never removed, so handles never move or get reused.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    students: Vec<Student>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new student and return its handle.
    ///
    /// Ids are not checked for uniqueness; two students may share one.
    pub fn add_student(&mut self, id: i32, name: impl Into<String>, age: i32) -> StudentHandle {
        let handle = StudentHandle::from_index(self.students.len());
        let student = Student::new(id, name, age);
        debug!(%handle, id, name = %student.name, age, "student added");
        self.students.push(student);
        handle
    }

    /// Overwrite the name and age of an existing student. The id is kept.
    pub fn update_student(
        &mut self,
        handle: StudentHandle,
        new_name: impl Into<String>,
        new_age: i32,
    ) -> Result<(), RosterError> {
        let Some(student) = self.students.get_mut(handle.index()) else {
            warn!(%handle, "update rejected: unknown student");
            return Err(RosterError::InvalidReference(handle));
        };
        student.name = new_name.into();
        student.age = new_age;
        debug!(%handle, name = %student.name, age = student.age, "student updated");
        Ok(())
    }

    /// All students in insertion order.
    pub fn list_students(&self) -> &[Student] {
        &self.students
    }

    pub fn get(&self, handle: StudentHandle) -> Option<&Student> {
        self.students.get(handle.index())
    }

    pub fn contains(&self, handle: StudentHandle) -> bool {
        handle.index() < self.students.len()
    }

    /// Resolve a zero-based display position to a handle.
    pub fn handle_at(&self, position: usize) -> Option<StudentHandle> {
        (position < self.students.len()).then(|| StudentHandle::from_index(position))
    }

    /// Students paired with their handles, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (StudentHandle, &Student)> {
        self.students
            .iter()
            .enumerate()
            .map(|(i, s)| (StudentHandle::from_index(i), s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertion_order_and_fields() {
        let mut reg = Registry::new();
        reg.add_student(3, "Carol", 22);
        reg.add_student(1, "Alice", 20);
        reg.add_student(2, "Bob", 21);

        let listed: Vec<(i32, &str, i32)> = reg
            .list_students()
            .iter()
            .map(|s| (s.id(), s.name.as_str(), s.age))
            .collect();
        assert_eq!(
            listed,
            vec![(3, "Carol", 22), (1, "Alice", 20), (2, "Bob", 21)]
        );
    }

    #[test]
    fn duplicate_ids_are_distinct_students() {
        let mut reg = Registry::new();
        let a = reg.add_student(5, "Eve", 19);
        let b = reg.add_student(5, "Eve", 19);
        assert_ne!(a, b);
        assert_eq!(reg.list_students().len(), 2);
        assert_eq!(reg.list_students()[0], reg.list_students()[1]);
    }

    #[test]
    fn update_keeps_id() {
        let mut reg = Registry::new();
        let h = reg.add_student(7, "Dan", 30);
        reg.update_student(h, "Daniel", 31).unwrap();
        reg.update_student(h, "Daniel", 31).unwrap();

        let s = reg.get(h).unwrap();
        assert_eq!(s.id(), 7);
        assert_eq!(s.name, "Daniel");
        assert_eq!(s.age, 31);
    }

    #[test]
    fn update_unknown_handle() {
        let mut other = Registry::new();
        other.add_student(1, "A", 1);
        let foreign = other.add_student(2, "B", 2);

        let mut reg = Registry::new();
        let err = reg.update_student(foreign, "X", 9).unwrap_err();
        assert_eq!(err, RosterError::InvalidReference(foreign));
        assert!(reg.list_students().is_empty());
    }

    #[test]
    fn positional_lookup() {
        let mut reg = Registry::new();
        assert!(reg.handle_at(0).is_none());
        let a = reg.add_student(1, "A", 1);
        let b = reg.add_student(2, "B", 2);
        assert_eq!(reg.handle_at(0), Some(a));
        assert_eq!(reg.handle_at(1), Some(b));
        assert!(reg.handle_at(2).is_none());
        assert_eq!(
            reg.iter().map(|(h, _)| h).collect::<Vec<_>>(),
            vec![a, b]
        );
        assert!(reg.contains(b));
    }
}
