pub mod layout;
mod viewer;

pub use layout::{ViewerLayout, calculate_viewer_chunks, hit};
pub use viewer::{HELP_TEXT, WRAP_NOTICE, draw_viewer};
