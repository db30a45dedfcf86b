//! Student roster lookup.
//!
//! The course repo keeps a `students/students.csv` with `Github Username`
//! and `Directory` columns; the directory value is repo-relative, e.g.
//! `students/JohnDoe`.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct RosterRow {
    #[serde(rename = "Github Username", default)]
    username: String,
    #[serde(rename = "Directory", default)]
    directory: String,
}

/// Resolve a GitHub login to the student directory recorded in the roster.
///
/// The lookup is case-insensitive and ignores surrounding whitespace on
/// both sides. A missing roster file resolves every login to `None`.
pub fn student_directory(csv_path: &Path, login: &str) -> Result<Option<String>> {
    if !csv_path.is_file() {
        return Ok(None);
    }
    let file = File::open(csv_path)
        .with_context(|| format!("Failed to open roster {}", csv_path.display()))?;
    lookup(file, login)
}

fn lookup<R: Read>(input: R, login: &str) -> Result<Option<String>> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(input);
    let wanted = login.trim().to_lowercase();

    // Later rows overwrite earlier ones for a duplicated login.
    let mut found = None;
    for result in reader.deserialize() {
        let row: RosterRow = result.context("Failed to parse roster row")?;
        let username = row.username.trim();
        if !username.is_empty() && username.to_lowercase() == wanted {
            found = Some(row.directory.trim().to_string());
        }
    }
    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROSTER: &str = "\
Github Username,Directory
JohnDoe,students/JohnDoe
petrov-ich , students/Petrov_I_I
";

    #[test]
    fn finds_login_exact() {
        let dir = lookup(ROSTER.as_bytes(), "JohnDoe").unwrap();
        assert_eq!(dir.as_deref(), Some("students/JohnDoe"));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let dir = lookup(ROSTER.as_bytes(), "johndoe").unwrap();
        assert_eq!(dir.as_deref(), Some("students/JohnDoe"));
    }

    #[test]
    fn trims_whitespace_in_cells_and_query() {
        let dir = lookup(ROSTER.as_bytes(), "  Petrov-Ich ").unwrap();
        assert_eq!(dir.as_deref(), Some("students/Petrov_I_I"));
    }

    #[test]
    fn unknown_login_resolves_to_none() {
        let dir = lookup(ROSTER.as_bytes(), "stranger").unwrap();
        assert_eq!(dir, None);
    }

    #[test]
    fn duplicate_login_takes_last_row() {
        let roster = "\
Github Username,Directory
JohnDoe,students/Old
JohnDoe,students/New
";
        let dir = lookup(roster.as_bytes(), "JohnDoe").unwrap();
        assert_eq!(dir.as_deref(), Some("students/New"));
    }

    #[test]
    fn missing_roster_file_resolves_to_none() {
        let dir = student_directory(Path::new("no/such/roster.csv"), "JohnDoe").unwrap();
        assert_eq!(dir, None);
    }
}
