//! The interactive command loop.
//!
//! Reads one line at a time from stdin, splits it on the two-space
//! delimiter into a command token and positional arguments, and dispatches
//! to the matching handler until `quit` (or EOF) is entered. Argument
//! counts are validated per command; a bad line gets a usage message and
//! the loop keeps going.

use std::io::{BufRead, Write};

use hba_db::service::TrackerService;

use crate::commands;

const PROMPT: &str = "HBA Database> ";

/// Arguments are separated by two spaces so single spaces can appear
/// inside them (project descriptions, for instance).
const DELIMITER: &str = "  ";

const USAGE_STUDENT: &str = "student  <github>";
const USAGE_NEW_STUDENT: &str = "new_student  <first>  <last>  <github>";
const USAGE_PROJECT_INFO: &str = "project_info  <title>";
const USAGE_GET_GRADE: &str = "get_grade  <github>  <title>";
const USAGE_ASSIGN_GRADE: &str = "assign_grade  <github>  <title>  <grade>";
const USAGE_ADD_PROJECT: &str = "add_project  <title>  <description>  <max_grade>";
const USAGE_GET_ALL_GRADES: &str = "get_all_grades  <github>";

/// One fully parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Student {
        github: String,
    },
    NewStudent {
        first_name: String,
        last_name: String,
        github: String,
    },
    ProjectInfo {
        title: String,
    },
    GetGrade {
        github: String,
        title: String,
    },
    AssignGrade {
        github: String,
        title: String,
        grade: i64,
    },
    AddProject {
        title: String,
        description: String,
        max_grade: i64,
    },
    GetAllGrades {
        github: String,
    },
    Quit,
}

/// User-facing parse failures. `Display` is the exact line shown at the
/// prompt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid Entry. Try again.")]
    UnknownCommand,

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("'{value}' is not a number for <{field}>")]
    BadNumber { field: &'static str, value: String },
}

fn parse_number(field: &'static str, value: &str) -> Result<i64, ParseError> {
    value.parse().map_err(|_| ParseError::BadNumber {
        field,
        value: value.to_string(),
    })
}

/// Split a line on the two-space delimiter and parse it into a [`Command`].
pub fn parse_line(line: &str) -> Result<Command, ParseError> {
    let mut tokens = line.split(DELIMITER);
    let command = tokens.next().unwrap_or_default();
    let args: Vec<&str> = tokens.collect();

    match command {
        "student" => match args[..] {
            [github] => Ok(Command::Student {
                github: github.to_string(),
            }),
            _ => Err(ParseError::Usage(USAGE_STUDENT)),
        },
        "new_student" => match args[..] {
            [first_name, last_name, github] => Ok(Command::NewStudent {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                github: github.to_string(),
            }),
            _ => Err(ParseError::Usage(USAGE_NEW_STUDENT)),
        },
        "project_info" => match args[..] {
            [title] => Ok(Command::ProjectInfo {
                title: title.to_string(),
            }),
            _ => Err(ParseError::Usage(USAGE_PROJECT_INFO)),
        },
        "get_grade" => match args[..] {
            [github, title] => Ok(Command::GetGrade {
                github: github.to_string(),
                title: title.to_string(),
            }),
            _ => Err(ParseError::Usage(USAGE_GET_GRADE)),
        },
        "assign_grade" => match args[..] {
            [github, title, grade] => Ok(Command::AssignGrade {
                github: github.to_string(),
                title: title.to_string(),
                grade: parse_number("grade", grade)?,
            }),
            _ => Err(ParseError::Usage(USAGE_ASSIGN_GRADE)),
        },
        "add_project" => match args[..] {
            [title, description, max_grade] => Ok(Command::AddProject {
                title: title.to_string(),
                description: description.to_string(),
                max_grade: parse_number("max_grade", max_grade)?,
            }),
            _ => Err(ParseError::Usage(USAGE_ADD_PROJECT)),
        },
        "get_all_grades" => match args[..] {
            [github] => Ok(Command::GetAllGrades {
                github: github.to_string(),
            }),
            _ => Err(ParseError::Usage(USAGE_GET_ALL_GRADES)),
        },
        // The original loop quits on the bare token, extra args and all.
        "quit" => Ok(Command::Quit),
        _ => Err(ParseError::UnknownCommand),
    }
}

/// What the loop should do after one line.
#[derive(Debug, PartialEq, Eq)]
pub enum Response {
    /// Print this and re-prompt.
    Message(String),
    /// Leave the loop.
    Quit,
}

/// Handle one input line end to end: parse, dispatch, render.
///
/// Every failure mode (unknown command, bad arity, database error) becomes
/// a printable message; only `quit` ends the loop.
pub async fn respond(line: &str, svc: &TrackerService) -> Response {
    let command = match parse_line(line) {
        Ok(Command::Quit) => return Response::Quit,
        Ok(command) => command,
        Err(parse_error) => return Response::Message(parse_error.to_string()),
    };

    match commands::dispatch(command, svc).await {
        Ok(message) => Response::Message(message),
        Err(error) => {
            tracing::debug!(%error, "command failed");
            Response::Message(format!("error: {error}"))
        }
    }
}

/// Run the prompt loop over stdin until `quit` or EOF.
pub async fn run(svc: &TrackerService) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let mut line = String::new();

    loop {
        write!(stdout, "{PROMPT}")?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF behaves like quit
            break;
        }
        let line = line.trim_end_matches(['\r', '\n']);

        match respond(line, svc).await {
            Response::Quit => break,
            Response::Message(message) => println!("{message}"),
        }
    }

    Ok(())
}
