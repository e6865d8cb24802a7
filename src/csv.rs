use crate::error::LoadError;
use crate::models::{QuestionRecord, QuestionSet, QuestionSource};
use ::csv::{ReaderBuilder, StringRecord};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Header names accepted for each logical field, in priority order.
pub const ID_COLUMNS: &[&str] = &["id", "ID", "Id"];
pub const QUESTION_COLUMNS: &[&str] = &["question", "Question"];
pub const ANSWER_COLUMNS: &[&str] = &["Correct Answer", "correct", "answer", "Answer"];

/// Field positions resolved once from a header row.
///
/// A field whose candidate names are all absent stays `None` and reads as
/// an empty value for every row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    pub id: Option<usize>,
    pub question: Option<usize>,
    pub answer: Option<usize>,
}

impl ColumnMap {
    pub fn resolve(headers: &StringRecord) -> Self {
        Self {
            id: find_column(headers, ID_COLUMNS),
            question: find_column(headers, QUESTION_COLUMNS),
            answer: find_column(headers, ANSWER_COLUMNS),
        }
    }

    /// Builds a record from a row, or `None` when any field is blank.
    pub fn extract(&self, row: &StringRecord, pool: &str) -> Option<QuestionRecord> {
        let id = field(row, self.id);
        let question = field(row, self.question);
        let answer = field(row, self.answer);

        if id.is_empty() || question.is_empty() || answer.is_empty() {
            return None;
        }

        Some(QuestionRecord {
            id: id.to_string(),
            question: question.to_string(),
            answer: answer.to_string(),
            pool: pool.to_string(),
        })
    }
}

fn find_column(headers: &StringRecord, candidates: &[&str]) -> Option<usize> {
    candidates
        .iter()
        .find_map(|name| headers.iter().position(|header| header == *name))
}

fn field(row: &StringRecord, index: Option<usize>) -> &str {
    index.and_then(|i| row.get(i)).unwrap_or("").trim()
}

/// What a single source contributed, for operator diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceReport {
    pub path: PathBuf,
    pub pool: String,
    pub columns: Vec<String>,
    pub accepted: usize,
    pub dropped: usize,
}

/// Reads one source file into records tagged with its pool.
pub fn load_source(source: &QuestionSource) -> Result<(Vec<QuestionRecord>, SourceReport), LoadError> {
    let bytes = read_source(&source.path)?;
    let content = bytes.strip_prefix(UTF8_BOM).unwrap_or(&bytes);

    let mut reader = ReaderBuilder::new().flexible(true).from_reader(content);
    let headers = reader
        .headers()
        .map_err(|e| LoadError::malformed(&source.path, e))?
        .clone();
    let columns = ColumnMap::resolve(&headers);

    let mut records = Vec::new();
    let mut dropped = 0;
    for result in reader.records() {
        let row = result.map_err(|e| LoadError::malformed(&source.path, e))?;
        match columns.extract(&row, &source.pool) {
            Some(record) => records.push(record),
            None => dropped += 1,
        }
    }

    let report = SourceReport {
        path: source.path.clone(),
        pool: source.pool.clone(),
        columns: headers.iter().map(str::to_string).collect(),
        accepted: records.len(),
        dropped,
    };
    tracing::info!(
        path = %source.path.display(),
        pool = %source.pool,
        accepted = report.accepted,
        dropped = report.dropped,
        "loaded question source"
    );

    Ok((records, report))
}

fn read_source(path: &Path) -> Result<Vec<u8>, LoadError> {
    fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::malformed(path, e),
    })
}

/// Loads every source in order and concatenates their records.
pub fn load_questions(sources: &[QuestionSource]) -> Result<QuestionSet, LoadError> {
    load_questions_with(sources, |_| {})
}

/// Like [`load_questions`], calling `on_source` after each file is read.
pub fn load_questions_with(
    sources: &[QuestionSource],
    mut on_source: impl FnMut(&SourceReport),
) -> Result<QuestionSet, LoadError> {
    let mut questions = Vec::new();

    for source in sources {
        let (records, report) = load_source(source)?;
        on_source(&report);
        questions.extend(records);
    }

    QuestionSet::new(questions).ok_or_else(|| {
        tracing::error!(sources = sources.len(), "no questions survived loading");
        LoadError::EmptyResult
    })
}
