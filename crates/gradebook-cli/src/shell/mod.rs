//! The interactive gradebook shell.
//!
//! Reads one command per line, resolves the user's row selection to a
//! student handle, and calls the gradebook. Errors are reported and the
//! loop carries on.

pub mod input;
pub mod render;

use std::io::{BufRead, Write};

use anyhow::Result;
use thiserror::Error;
use tracing::debug;

use gradebook_core::{Gradebook, RosterError, StudentHandle};

use input::{parse_line, ShellCommand, ValidationError, GRADE_USAGE, HELP};

/// Any failure the shell reports to the user without stopping.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error(transparent)]
    Serialize(#[from] anyhow::Error),
}

/// What the loop should do after a command.
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Quit,
}

pub struct Session {
    book: Gradebook,
}

impl Session {
    pub fn new(book: Gradebook) -> Self {
        Self { book }
    }

    pub fn gradebook(&self) -> &Gradebook {
        &self.book
    }

    /// Parse and run one line. `Ok(None)` means there was nothing to do.
    pub fn handle_line(&mut self, line: &str) -> Result<Option<Reply>, ShellError> {
        match parse_line(line)? {
            Some(command) => self.execute(command).map(Some),
            None => Ok(None),
        }
    }

    pub fn execute(&mut self, command: ShellCommand) -> Result<Reply, ShellError> {
        debug!(?command, "executing");
        let text = match command {
            ShellCommand::Add { id, name, age } => {
                self.book.add_student(id, name, age);
                self.table()
            }
            ShellCommand::Update {
                position,
                name,
                age,
            } => {
                let handle = self.resolve(position)?;
                self.book.update_student(handle, name, age)?;
                self.table()
            }
            ShellCommand::List => self.table(),
            ShellCommand::Details { json: false } => {
                self.book.details().trim_end_matches('\n').to_string()
            }
            ShellCommand::Details { json: true } => self.book.snapshot().to_json_pretty()?,
            ShellCommand::Courses => render::course_list(self.book.list_courses()),
            ShellCommand::Enroll { position, course } => {
                let handle = self.resolve(position)?;
                let course = self.catalog_course(&course)?;
                self.book.enroll(handle, &course)?;
                format!("Student enrolled in {course}")
            }
            ShellCommand::Grade { position, words } => {
                let handle = self.resolve(position)?;
                let (course, grade) = self.split_course_and_grade(handle, &words)?;
                self.book.assign_grade(handle, &course, grade.as_str())?;
                format!("Grade assigned: {grade}")
            }
            ShellCommand::Grades { position } => {
                let handle = self.resolve(position)?;
                let entries = self.book.entries_for(handle)?;
                let name = self
                    .book
                    .student(handle)
                    .map(|s| s.name.as_str())
                    .unwrap_or_default();
                if entries.is_empty() {
                    format!("{name} is not enrolled in any course.")
                } else {
                    format!("Grades for {name}:\n{}", render::grades_table(entries))
                }
            }
            ShellCommand::Help => HELP.to_string(),
            ShellCommand::Quit => return Ok(Reply::Quit),
        };
        Ok(Reply::Text(text))
    }

    fn table(&self) -> String {
        if self.book.list_students().is_empty() {
            "No students.".to_string()
        } else {
            render::student_table(self.book.list_students()).to_string()
        }
    }

    fn resolve(&self, position: usize) -> Result<StudentHandle, ValidationError> {
        position
            .checked_sub(1)
            .and_then(|i| self.book.handle_at(i))
            .ok_or(ValidationError::NoSuchStudent(position))
    }

    /// A course typed by name, or by its number in the catalog.
    fn catalog_course(&self, text: &str) -> Result<String, ValidationError> {
        if self.book.catalog().contains(text) {
            return Ok(text.to_string());
        }
        match text.parse::<usize>() {
            Ok(n) => n
                .checked_sub(1)
                .and_then(|i| self.book.catalog().course_at(i))
                .map(String::from)
                .ok_or(ValidationError::NoSuchCourse(n)),
            Err(_) => Ok(text.to_string()),
        }
    }

    /// Split the words after `grade <student#>` into course and grade.
    ///
    /// The longest leading run of words naming an enrolled course wins.
    /// Otherwise the first word is the course, by name or by its number
    /// among the student's enrollments.
    fn split_course_and_grade(
        &self,
        handle: StudentHandle,
        words: &[String],
    ) -> Result<(String, String), ShellError> {
        let enrolled = self.book.enrolled_courses(handle)?;
        for split in (1..words.len()).rev() {
            let course = words[..split].join(" ");
            if enrolled.contains(&course.as_str()) {
                return Ok((course, words[split..].join(" ")));
            }
        }

        let (first, rest) = words
            .split_first()
            .ok_or(ValidationError::Usage(GRADE_USAGE))?;
        let course = match first.parse::<usize>() {
            Ok(n) => n
                .checked_sub(1)
                .and_then(|i| enrolled.get(i))
                .map(|c| c.to_string())
                .ok_or(ValidationError::NoSuchCourse(n))?,
            Err(_) => first.clone(),
        };
        Ok((course, rest.join(" ")))
    }
}

/// Run the read-eval-print loop until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    out: &mut W,
    prompt: bool,
) -> Result<()> {
    let mut lines = input.lines();
    loop {
        if prompt {
            write!(out, "gradebook> ")?;
            out.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        match session.handle_line(&line?) {
            Ok(Some(Reply::Text(text))) => writeln!(out, "{text}")?,
            Ok(Some(Reply::Quit)) => break,
            Ok(None) => {}
            Err(e) => writeln!(out, "Error: {e}")?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradebook_core::CourseCatalog;

    fn session() -> Session {
        Session::new(Gradebook::default())
    }

    fn text(reply: Result<Option<Reply>, ShellError>) -> String {
        match reply.unwrap() {
            Some(Reply::Text(t)) => t,
            other => panic!("unexpected reply: {other:?}"),
        }
    }

    #[test]
    fn enroll_by_number_and_grade_by_enrolled_number() {
        let mut s = session();
        s.handle_line("add 1 Alice 20").unwrap();
        assert_eq!(
            text(s.handle_line("enroll 1 2")),
            "Student enrolled in Science"
        );
        assert_eq!(text(s.handle_line("grade 1 1 A")), "Grade assigned: A");

        let h = s.gradebook().handle_at(0).unwrap();
        assert_eq!(s.gradebook().entries_for(h).unwrap()["Science"], "A");
    }

    #[test]
    fn grade_multi_word_course_by_name() {
        let catalog = CourseCatalog::from_names(["World History", "Math"]).unwrap();
        let mut s = Session::new(Gradebook::new(catalog));
        s.handle_line("add 1 Alice 20").unwrap();
        assert_eq!(
            text(s.handle_line("enroll 1 World History")),
            "Student enrolled in World History"
        );
        assert_eq!(
            text(s.handle_line("grade 1 World History A minus")),
            "Grade assigned: A minus"
        );

        let h = s.gradebook().handle_at(0).unwrap();
        let entries = s.gradebook().entries_for(h).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries["World History"], "A minus");
    }

    #[test]
    fn numeric_course_names_match_before_positions() {
        let catalog = CourseCatalog::from_names(["101", "Math"]).unwrap();
        let mut s = Session::new(Gradebook::new(catalog));
        s.handle_line("add 1 Alice 20").unwrap();
        assert_eq!(text(s.handle_line("enroll 1 101")), "Student enrolled in 101");
        assert_eq!(text(s.handle_line("enroll 1 2")), "Student enrolled in Math");
        assert_eq!(text(s.handle_line("grade 1 101 B")), "Grade assigned: B");
        // "Math" sorts after "101", so it is enrolled course number 2.
        assert_eq!(text(s.handle_line("grade 1 2 C")), "Grade assigned: C");

        let h = s.gradebook().handle_at(0).unwrap();
        let entries = s.gradebook().entries_for(h).unwrap();
        assert_eq!(entries["101"], "B");
        assert_eq!(entries["Math"], "C");
    }

    #[test]
    fn errors_do_not_change_state() {
        let mut s = session();
        assert!(matches!(
            s.handle_line("update 1 Bob 3"),
            Err(ShellError::Validation(ValidationError::NoSuchStudent(1)))
        ));
        assert!(matches!(
            s.handle_line("add x Bob 3"),
            Err(ShellError::Validation(_))
        ));
        assert!(s.gradebook().list_students().is_empty());

        s.handle_line("add 1 Alice 20").unwrap();
        s.handle_line("enroll 1 Math").unwrap();
        let err = s.handle_line("enroll 1 Math").unwrap_err();
        assert_eq!(err.to_string(), "student is already enrolled in Math");
        assert!(matches!(
            s.handle_line("grade 1 History B"),
            Err(ShellError::Roster(RosterError::NotEnrolled { .. }))
        ));
        assert!(matches!(
            s.handle_line("enroll 1 9"),
            Err(ShellError::Validation(ValidationError::NoSuchCourse(9)))
        ));
    }

    #[test]
    fn loop_reports_errors_and_quits() {
        let mut s = session();
        let input = "add 1 Alice 20\nenroll 1 Math\nenroll 1 Math\nquit\nadd 2 Bob 21\n";
        let mut out = Vec::new();
        run(&mut s, input.as_bytes(), &mut out, false).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Alice"));
        assert!(out.contains("Student enrolled in Math"));
        assert!(out.contains("Error: student is already enrolled in Math"));
        assert_eq!(s.gradebook().list_students().len(), 1);
    }

    #[test]
    fn details_lines() {
        let mut s = session();
        s.handle_line("add 5 Eve 19").unwrap();
        s.handle_line("add 5 Eve 19").unwrap();
        assert_eq!(
            text(s.handle_line("details")),
            "Student ID: 5, Name: Eve, Age: 19\nStudent ID: 5, Name: Eve, Age: 19"
        );
    }
}
