pub mod config;
pub mod csv;
pub mod error;
pub mod logger;
pub mod models;
pub mod navigation;
pub mod session;
pub mod ui;
pub mod utils;

// Re-exports for convenience
pub use config::{Cli, Pool, ViewerConfig};
pub use self::csv::{ColumnMap, SourceReport, load_questions, load_questions_with, load_source};
pub use error::{LoadError, MalformedCause};
pub use models::{AppState, QuestionRecord, QuestionSet, QuestionSource, ViewerSession};
pub use navigation::{Movement, NavigationController, PoolMarker};
pub use session::{ViewerCommand, handle_viewer_click, handle_viewer_input};
pub use ui::{ViewerLayout, draw_viewer};
pub use utils::truncate_string;
