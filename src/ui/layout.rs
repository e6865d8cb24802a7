use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub const PREV_BUTTON_LABEL: &str = "◄ Previous";
pub const NEXT_BUTTON_LABEL: &str = "Next ►";

const PREV_BUTTON_WIDTH: u16 = 14;
const NEXT_BUTTON_WIDTH: u16 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerLayout {
    pub title_area: Rect,
    pub question_area: Rect,
    pub answer_area: Rect,
    pub control_area: Rect,
    // Rows inside the control bar's border
    pub progress_area: Rect,
    pub prev_button: Rect,
    pub next_button: Rect,
    pub help_area: Rect,
}

pub fn calculate_viewer_chunks(area: Rect) -> ViewerLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Fill(1),
            Constraint::Length(4),
        ])
        .split(area);

    let control_area = chunks[3];
    let control_inner = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(control_area);

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(PREV_BUTTON_WIDTH),
            Constraint::Length(1),
            Constraint::Length(NEXT_BUTTON_WIDTH),
        ])
        .split(control_inner[0]);

    ViewerLayout {
        title_area: chunks[0],
        question_area: chunks[1],
        answer_area: chunks[2],
        control_area,
        progress_area: buttons[0],
        prev_button: buttons[1],
        next_button: buttons[3],
        help_area: control_inner[1],
    }
}

/// Whether the terminal cell at (`column`, `row`) falls inside `area`.
pub fn hit(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}
