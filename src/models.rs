use crate::navigation::NavigationController;
use std::path::PathBuf;

/// One question/answer pair as shown by the viewer.
///
/// Every field is trimmed and non-empty; rows that cannot satisfy this are
/// dropped by the loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub pool: String,
}

/// A CSV file together with the pool label its rows are tagged with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSource {
    pub path: PathBuf,
    pub pool: String,
}

impl QuestionSource {
    pub fn new(path: impl Into<PathBuf>, pool: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            pool: pool.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Viewing,
    Quit,
}

/// Everything the viewer screen renders from.
#[derive(Debug)]
pub struct ViewerSession {
    pub controller: NavigationController,
    pub state: AppState,
    /// Set by a forward wrap, cleared by the next command.
    pub wrap_notice: bool,
}

impl ViewerSession {
    pub fn new(questions: QuestionSet) -> Self {
        Self {
            controller: NavigationController::new(questions),
            state: AppState::Viewing,
            wrap_notice: false,
        }
    }
}

/// Ordered, non-empty, immutable sequence of loaded questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSet {
    records: Vec<QuestionRecord>,
}

impl QuestionSet {
    /// Returns `None` for an empty list.
    pub fn new(records: Vec<QuestionRecord>) -> Option<Self> {
        if records.is_empty() {
            None
        } else {
            Some(Self { records })
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&QuestionRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QuestionRecord> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[QuestionRecord] {
        &self.records
    }
}

impl std::ops::Index<usize> for QuestionSet {
    type Output = QuestionRecord;

    fn index(&self, index: usize) -> &QuestionRecord {
        &self.records[index]
    }
}
