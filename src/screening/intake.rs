use super::domain::Response;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug)]
pub enum IntakeError {
    Io(std::io::Error),
    Csv(csv::Error),
    Json(serde_json::Error),
    UnsupportedFormat { path: PathBuf },
}

impl std::fmt::Display for IntakeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntakeError::Io(err) => write!(f, "failed to read responses: {}", err),
            IntakeError::Csv(err) => write!(f, "invalid response CSV data: {}", err),
            IntakeError::Json(err) => write!(f, "invalid response JSON data: {}", err),
            IntakeError::UnsupportedFormat { path } => write!(
                f,
                "unsupported response file '{}': expected a .json or .csv extension",
                path.display()
            ),
        }
    }
}

impl std::error::Error for IntakeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IntakeError::Io(err) => Some(err),
            IntakeError::Csv(err) => Some(err),
            IntakeError::Json(err) => Some(err),
            IntakeError::UnsupportedFormat { .. } => None,
        }
    }
}

impl From<std::io::Error> for IntakeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for IntakeError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<serde_json::Error> for IntakeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// One child's answers, as handed over by the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    #[serde(alias = "child_age_years")]
    pub child_age_years: i32,
    pub responses: Vec<Response>,
}

/// Reads rows with `question_number,question_text,selected_option` headers.
pub fn read_responses_csv<R: Read>(reader: R) -> Result<Vec<Response>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader.deserialize::<Response>().collect()
}

pub fn read_responses_json<R: Read>(reader: R) -> Result<Vec<Response>, serde_json::Error> {
    serde_json::from_reader(reader)
}

/// Loads responses, choosing the parser from the file extension.
pub fn load_responses(path: &Path) -> Result<Vec<Response>, IntakeError> {
    let format = ResponseFileFormat::from_path(path)?;
    let reader = BufReader::new(File::open(path)?);

    let responses = match format {
        ResponseFileFormat::Csv => read_responses_csv(reader)?,
        ResponseFileFormat::Json => read_responses_json(reader)?,
    };

    info!(path = %path.display(), count = responses.len(), "loaded responses");
    Ok(responses)
}

/// Loads a JSON array of submissions.
pub fn load_submissions(path: &Path) -> Result<Vec<Submission>, IntakeError> {
    let reader = BufReader::new(File::open(path)?);
    let submissions: Vec<Submission> = serde_json::from_reader(reader)?;

    info!(path = %path.display(), count = submissions.len(), "loaded submissions");
    Ok(submissions)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ResponseFileFormat {
    Csv,
    Json,
}

impl ResponseFileFormat {
    fn from_path(path: &Path) -> Result<Self, IntakeError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("json") => Ok(Self::Json),
            _ => Err(IntakeError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_rows_become_responses() {
        let data = "question_number,question_text,selected_option\n\
                    1, Which one do we use for eating? , A\n\
                    11,How much would you pay?,10000\n";
        let responses = read_responses_csv(data.as_bytes()).expect("csv parses");

        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0], Response::new(1, "Which one do we use for eating?", "A"));
        assert_eq!(responses[1].selected_option, "10000");
    }

    #[test]
    fn csv_rejects_non_numeric_ordinals() {
        let data = "question_number,question_text,selected_option\nfirst,Q,A\n";
        assert!(read_responses_csv(data.as_bytes()).is_err());
    }

    #[test]
    fn json_array_becomes_responses() {
        let data = r#"[
            {"questionNumber": 2, "questionText": "The cow says", "selectedOption": "B"},
            {"questionNumber": 11, "questionText": "Price", "selectedOption": "5000"}
        ]"#;
        let responses = read_responses_json(data.as_bytes()).expect("json parses");
        assert_eq!(responses[0].question_number, 2);
        assert_eq!(responses[1].selected_option, "5000");
    }

    #[test]
    fn submission_accepts_either_age_field_spelling() {
        let camel: Submission =
            serde_json::from_str(r#"{"childAgeYears": 4, "responses": []}"#).expect("parses");
        let snake: Submission =
            serde_json::from_str(r#"{"child_age_years": 4, "responses": []}"#).expect("parses");
        assert_eq!(camel, snake);
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = load_responses(Path::new("answers.xlsx")).expect_err("xlsx unsupported");
        assert!(matches!(err, IntakeError::UnsupportedFormat { .. }));
        assert!(err.to_string().contains("answers.xlsx"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = std::env::temp_dir().join("child-screening-missing-responses.json");
        let _ = std::fs::remove_file(&path);
        let err = load_responses(&path).expect_err("file is missing");
        assert!(matches!(err, IntakeError::Io(_)));
    }
}
