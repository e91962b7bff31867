use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::models::Question;

/// Failure to read the question file at all.
///
/// Individual malformed lines are not errors; they are skipped with a
/// diagnostic on stderr and loading continues.
#[derive(Debug)]
pub struct LoadError {
    path: PathBuf,
    source: io::Error,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to read {}: {}", self.path.display(), self.source)
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Read every line of a pipe-delimited question file, preserving file order.
pub fn load_questions<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError {
        path: path.to_path_buf(),
        source,
    })?;

    let mut questions = Vec::new();
    for line in content.lines() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line) {
            Some(question) => questions.push(question),
            None => eprintln!("Skipping malformed line: {line}"),
        }
    }
    Ok(questions)
}

/// Parse one pipe-delimited record.
///
/// Two fields make a fill-in-the-blank question; four or more make a
/// multiple-choice question with the trailing fields as options. Three
/// fields (an answer with a single option) or fewer than two are malformed.
pub fn parse_line(line: &str) -> Option<Question> {
    let fields: Vec<&str> = line.split('|').collect();
    match fields.len() {
        2 => Some(Question::fill_in_the_blank(fields[0], fields[1])),
        n if n >= 4 => Some(Question::multiple_choice(
            fields[0],
            fields[1],
            fields[2..].iter().map(|s| s.to_string()).collect(),
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::models::QuestionKind;

    #[test]
    fn two_fields_make_fill_in_the_blank() {
        let question = parse_line("2+2?|4").unwrap();
        assert_eq!(question.text, "2+2?");
        assert_eq!(question.answer, "4");
        assert_eq!(question.kind, QuestionKind::FillInTheBlank);
    }

    #[test]
    fn four_or_more_fields_make_multiple_choice() {
        let question = parse_line("Capital of France?|Paris|Paris|London|Berlin").unwrap();
        assert_eq!(question.text, "Capital of France?");
        assert_eq!(question.answer, "Paris");
        assert_eq!(
            question.kind,
            QuestionKind::MultipleChoice {
                options: vec![
                    "Paris".to_string(),
                    "London".to_string(),
                    "Berlin".to_string(),
                ],
            }
        );
    }

    #[test]
    fn three_fields_or_fewer_than_two_are_malformed() {
        assert_eq!(parse_line("q|a|only-one-option"), None);
        assert_eq!(parse_line("no delimiter here"), None);
    }

    #[test]
    fn malformed_lines_are_dropped_but_loading_continues() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "2+2?|4").unwrap();
        writeln!(file, "broken|line|here").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "Capital of France?|Paris|Paris|London|Berlin").unwrap();

        let questions = load_questions(file.path()).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].text, "2+2?");
        assert_eq!(questions[1].text, "Capital of France?");
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let err = load_questions("definitely/not/here.txt").unwrap_err();
        assert!(err.to_string().contains("definitely/not/here.txt"));
    }
}
