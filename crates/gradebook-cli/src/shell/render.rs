//! Table rendering for the shell.

use comfy_table::{Cell, Table};

use gradebook_core::ledger::Entries;
use gradebook_core::Student;

/// The student table, with the 1-based position used to select rows.
pub fn student_table(students: &[Student]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["#", "ID", "Name", "Age"]);
    for (i, s) in students.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(s.id()),
            Cell::new(&s.name),
            Cell::new(s.age),
        ]);
    }
    table
}

pub fn grades_table(entries: &Entries) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["#", "Course", "Grade"]);
    for (i, (course, grade)) in entries.iter().enumerate() {
        table.add_row(vec![Cell::new(i + 1), Cell::new(course), Cell::new(grade)]);
    }
    table
}

pub fn course_list(courses: &[String]) -> String {
    courses
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{}. {c}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn student_table_has_rows() {
        let students = vec![Student::new(1, "Alice", 20), Student::new(5, "Bob", 30)];
        let rendered = student_table(&students).to_string();
        assert!(rendered.contains("Name"));
        assert!(rendered.contains("Alice"));
        assert!(rendered.contains("Bob"));
    }

    #[test]
    fn numbered_courses() {
        let courses = vec!["Math".to_string(), "Science".to_string()];
        assert_eq!(course_list(&courses), "1. Math\n2. Science");
    }
}
