//! Roster reports: the plain-text details listing and a JSON snapshot.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::model::{Grade, Student};

/// Concatenate every student's summary line, one per line, in order.
pub fn details_report<'a>(students: impl IntoIterator<Item = &'a Student>) -> String {
    let mut out = String::new();
    for student in students {
        out.push_str(&student.to_string());
        out.push('\n');
    }
    out
}

/// Serializable view of the whole gradebook.
#[derive(Debug, Clone, Serialize)]
pub struct RosterSnapshot {
    pub courses: Vec<String>,
    pub students: Vec<StudentRecord>,
}

/// One student with their grades.
#[derive(Debug, Clone, Serialize)]
pub struct StudentRecord {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub grades: BTreeMap<String, Grade>,
}

impl RosterSnapshot {
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize roster snapshot")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_one_line_per_student() {
        let students = vec![Student::new(1, "Alice", 20), Student::new(2, "Bob", 21)];
        assert_eq!(
            details_report(&students),
            "Student ID: 1, Name: Alice, Age: 20\nStudent ID: 2, Name: Bob, Age: 21\n"
        );
        assert_eq!(details_report(&Vec::<Student>::new()), "");
    }

    #[test]
    fn snapshot_json_shape() {
        let snapshot = RosterSnapshot {
            courses: vec!["Math".into()],
            students: vec![StudentRecord {
                id: 1,
                name: "Alice".into(),
                age: 20,
                grades: BTreeMap::from([("Math".to_string(), Grade::NotGraded)]),
            }],
        };
        let value: serde_json::Value =
            serde_json::from_str(&snapshot.to_json_pretty().unwrap()).unwrap();
        assert_eq!(value["courses"][0], "Math");
        assert_eq!(value["students"][0]["name"], "Alice");
        assert_eq!(value["students"][0]["grades"]["Math"], "Not Graded");
    }
}
