//! Parsing of shell command lines.
//!
//! All numeric input is checked here, before anything reaches the
//! gradebook. A line that fails to parse changes no state.

use thiserror::Error;

/// Input the shell rejects before calling into the gradebook.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid input: {field} must be a whole number, got '{text}'")]
    NotANumber { field: &'static str, text: String },

    #[error("invalid input: {field} must be a number from 1, got '{text}'")]
    BadPosition { field: &'static str, text: String },

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("unknown command '{0}' (type `help` for a list)")]
    UnknownCommand(String),

    #[error("no student at position {0}")]
    NoSuchStudent(usize),

    #[error("no course at position {0}")]
    NoSuchCourse(usize),
}

/// One parsed shell command. Positions are 1-based, as shown by `list`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Add { id: i32, name: String, age: i32 },
    Update { position: usize, name: String, age: i32 },
    List,
    Details { json: bool },
    Courses,
    Enroll { position: usize, course: String },
    /// Course and grade words, split once the student's enrollments are known.
    Grade { position: usize, words: Vec<String> },
    Grades { position: usize },
    Help,
    Quit,
}

const ADD_USAGE: &str = "add <id> <name> <age>";
const UPDATE_USAGE: &str = "update <student#> <new name> <new age>";
const DETAILS_USAGE: &str = "details [--json]";
const ENROLL_USAGE: &str = "enroll <student#> <course name or #>";
pub const GRADE_USAGE: &str = "grade <student#> <course name or #> <grade>";
const GRADES_USAGE: &str = "grades <student#>";

pub const HELP: &str = "\
Commands:
  add <id> <name> <age>                      add a student
  update <student#> <new name> <new age>     change a student's name and age
  list                                       show the student table
  details [--json]                           show student details
  courses                                    show the course catalog
  enroll <student#> <course name or #>       enroll a student in a course
  grade <student#> <course name or #> <grade>
                                             assign a grade (course # counts enrolled courses)
  grades <student#>                          show a student's courses and grades
  help                                       show this list
  quit                                       leave the shell";

/// Parse one non-empty line. Returns `Ok(None)` for blank lines and comments.
pub fn parse_line(line: &str) -> Result<Option<ShellCommand>, ValidationError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let words: Vec<&str> = line.split_whitespace().collect();
    let (verb, args) = (words[0], &words[1..]);

    let command = match verb.to_ascii_lowercase().as_str() {
        "add" => {
            let (first, name, last) = split_ends(args, ADD_USAGE)?;
            ShellCommand::Add {
                id: parse_number("ID", first)?,
                name,
                age: parse_number("Age", last)?,
            }
        }
        "update" => {
            let (first, name, last) = split_ends(args, UPDATE_USAGE)?;
            ShellCommand::Update {
                position: parse_position("student#", first)?,
                name,
                age: parse_number("Age", last)?,
            }
        }
        "list" | "ls" => {
            no_args(args, "list")?;
            ShellCommand::List
        }
        "details" => match args {
            [] => ShellCommand::Details { json: false },
            ["--json"] => ShellCommand::Details { json: true },
            _ => return Err(ValidationError::Usage(DETAILS_USAGE)),
        },
        "courses" => {
            no_args(args, "courses")?;
            ShellCommand::Courses
        }
        "enroll" => match args {
            [position, course @ ..] if !course.is_empty() => ShellCommand::Enroll {
                position: parse_position("student#", position)?,
                course: course.join(" "),
            },
            _ => return Err(ValidationError::Usage(ENROLL_USAGE)),
        },
        "grade" => match args {
            [position, words @ ..] if words.len() >= 2 => ShellCommand::Grade {
                position: parse_position("student#", position)?,
                words: words.iter().map(|w| w.to_string()).collect(),
            },
            _ => return Err(ValidationError::Usage(GRADE_USAGE)),
        },
        "grades" => match args {
            [position] => ShellCommand::Grades {
                position: parse_position("student#", position)?,
            },
            _ => return Err(ValidationError::Usage(GRADES_USAGE)),
        },
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        other => return Err(ValidationError::UnknownCommand(other.to_string())),
    };
    Ok(Some(command))
}

/// Parse a 1-based position typed by the user.
fn parse_position(field: &'static str, text: &str) -> Result<usize, ValidationError> {
    match text.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(ValidationError::BadPosition {
            field,
            text: text.to_string(),
        }),
    }
}

fn parse_number(field: &'static str, text: &str) -> Result<i32, ValidationError> {
    text.parse().map_err(|_| ValidationError::NotANumber {
        field,
        text: text.to_string(),
    })
}

/// Split `first middle... last`, joining the middle words with single spaces.
fn split_ends<'a>(
    args: &[&'a str],
    usage: &'static str,
) -> Result<(&'a str, String, &'a str), ValidationError> {
    match args {
        [first, middle @ .., last] if !middle.is_empty() => {
            Ok((*first, middle.join(" "), *last))
        }
        _ => Err(ValidationError::Usage(usage)),
    }
}

fn no_args(args: &[&str], usage: &'static str) -> Result<(), ValidationError> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::Usage(usage))
    }
}
