//! CSV question source.
//!
//! Loads quiz items from `question,answer` records. There is no header row,
//! RFC 4180 quoting is honored, and every record must have exactly two
//! fields. The whole resource is validated before anything is returned, so a
//! bad record aborts the quiz before the first question is asked.

use std::io;
use std::path::Path;

use csv::{Reader, ReaderBuilder};

use crate::error::QuizError;
use crate::model::QuizItem;

fn reader_builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    // Field counts are checked per record below so the error names the line.
    builder.has_headers(false).flexible(true);
    builder
}

/// Load quiz items from a CSV file.
pub fn load_quiz(path: &Path) -> Result<Vec<QuizItem>, QuizError> {
    let resource = path.display().to_string();
    let reader = reader_builder()
        .from_path(path)
        .map_err(|source| QuizError::ResourceUnavailable {
            resource: resource.clone(),
            source,
        })?;

    read_items(reader, &resource)
}

/// Load quiz items from any reader (useful for testing and piped input).
pub fn load_quiz_from_reader<R: io::Read>(
    reader: R,
    resource: &str,
) -> Result<Vec<QuizItem>, QuizError> {
    read_items(reader_builder().from_reader(reader), resource)
}

fn read_items<R: io::Read>(
    mut reader: Reader<R>,
    resource: &str,
) -> Result<Vec<QuizItem>, QuizError> {
    let mut items = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|source| QuizError::ResourceUnavailable {
            resource: resource.to_string(),
            source,
        })?;

        if record.len() != 2 {
            return Err(QuizError::MalformedRecord {
                line: record.position().map(|p| p.line()).unwrap_or(0),
                found: record.len(),
                record: record.iter().map(str::to_string).collect(),
            });
        }

        items.push(QuizItem::new(&record[0], &record[1]));
    }

    tracing::debug!("loaded {} quiz items from {}", items.len(), resource);
    Ok(items)
}
