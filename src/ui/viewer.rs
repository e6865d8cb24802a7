use crate::models::ViewerSession;
use crate::ui::layout::{NEXT_BUTTON_LABEL, PREV_BUTTON_LABEL, ViewerLayout, calculate_viewer_chunks};
use crate::utils::truncate_string;
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

const TITLE_BG: Color = Color::Rgb(0x2c, 0x3e, 0x50);
const LABEL_FG: Color = Color::Rgb(0x7f, 0x8c, 0x8d);
const ANSWER_FG: Color = Color::Rgb(0x27, 0xae, 0x60);
const PREV_BG: Color = Color::Rgb(0x95, 0xa5, 0xa6);
const NEXT_BG: Color = Color::Rgb(0x34, 0x98, 0xdb);

pub const WRAP_NOTICE: &str = "Back to the first question";
pub const HELP_TEXT: &str = "Space/→ = Next  |  ← = Previous  |  Esc = Quit";

/// Draws the current record and returns where everything landed, so mouse
/// clicks can be matched against the buttons.
pub fn draw_viewer(f: &mut Frame, session: &ViewerSession) -> ViewerLayout {
    let layout = calculate_viewer_chunks(f.area());
    let nav = &session.controller;
    let record = nav.current();

    let title_width = layout.title_area.width.saturating_sub(2) as usize;
    let title = Paragraph::new(truncate_string(
        &format!("{} - {} Class", record.id, record.pool),
        title_width,
    ))
    .style(
        Style::default()
            .fg(Color::White)
            .bg(TITLE_BG)
            .add_modifier(Modifier::BOLD),
    )
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.title_area);

    let question = Paragraph::new(record.question.as_str())
        .wrap(Wrap { trim: true })
        .block(section_block("QUESTION"));
    f.render_widget(question, layout.question_area);

    let answer = Paragraph::new(record.answer.as_str())
        .style(Style::default().fg(ANSWER_FG).add_modifier(Modifier::BOLD))
        .wrap(Wrap { trim: true })
        .block(section_block("CORRECT ANSWER"));
    f.render_widget(answer, layout.answer_area);

    f.render_widget(Block::default().borders(Borders::ALL), layout.control_area);

    let mut progress = vec![Span::styled(
        nav.progress_text(),
        Style::default().fg(LABEL_FG),
    )];
    if session.wrap_notice {
        progress.push(Span::styled(
            format!("  ↻ {WRAP_NOTICE}"),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(progress)), layout.progress_area);

    f.render_widget(
        button(PREV_BUTTON_LABEL, Style::default().fg(Color::White).bg(PREV_BG)),
        layout.prev_button,
    );
    f.render_widget(
        button(
            NEXT_BUTTON_LABEL,
            Style::default()
                .fg(Color::White)
                .bg(NEXT_BG)
                .add_modifier(Modifier::BOLD),
        ),
        layout.next_button,
    );

    let help = Paragraph::new(HELP_TEXT)
        .style(Style::default().fg(PREV_BG))
        .alignment(Alignment::Center);
    f.render_widget(help, layout.help_area);

    layout
}

fn section_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            title,
            Style::default().fg(LABEL_FG).add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center)
}

fn button(label: &str, style: Style) -> Paragraph<'_> {
    Paragraph::new(label)
        .style(style)
        .alignment(Alignment::Center)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{QuestionRecord, QuestionSet};
    use ratatui::{Terminal, backend::TestBackend};

    fn session() -> ViewerSession {
        let records = vec![
            QuestionRecord {
                id: "G1A01".to_string(),
                question: "On which HF bands does a General class licensee have privileges?"
                    .to_string(),
                answer: "All amateur frequency bands above 30 MHz".to_string(),
                pool: "General".to_string(),
            },
            QuestionRecord {
                id: "E1A01".to_string(),
                question: "Which is the highest frequency for USB voice?".to_string(),
                answer: "14.347 MHz".to_string(),
                pool: "Extra".to_string(),
            },
        ];
        ViewerSession::new(QuestionSet::new(records).unwrap())
    }

    fn render(session: &ViewerSession) -> (String, ViewerLayout) {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let mut layout = None;
        terminal
            .draw(|f| layout = Some(draw_viewer(f, session)))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for row in buffer.content.chunks(buffer.area.width as usize) {
            for cell in row {
                text.push_str(cell.symbol());
            }
            text.push('\n');
        }
        (text, layout.unwrap())
    }

    #[test]
    fn test_draw_shows_current_record() {
        let (screen, _) = render(&session());
        assert!(screen.contains("G1A01 - General Class"));
        assert!(screen.contains("QUESTION"));
        assert!(screen.contains("On which HF bands"));
        assert!(screen.contains("CORRECT ANSWER"));
        assert!(screen.contains("All amateur frequency bands above 30 MHz"));
        assert!(screen.contains("Question 1 of 2 (Start of General)"));
        assert!(!screen.contains("E1A01"));
    }

    #[test]
    fn test_draw_follows_cursor() {
        let mut session = session();
        session.controller.advance();
        let (screen, _) = render(&session);
        assert!(screen.contains("E1A01 - Extra Class"));
        assert!(screen.contains("14.347 MHz"));
        assert!(screen.contains("Question 2 of 2 (Start of Extra)"));
    }

    #[test]
    fn test_draw_wrap_notice() {
        let mut session = session();
        let (screen, _) = render(&session);
        assert!(!screen.contains(WRAP_NOTICE));

        session.wrap_notice = true;
        let (screen, _) = render(&session);
        assert!(screen.contains(WRAP_NOTICE));
    }

    #[test]
    fn test_draw_buttons_and_help() {
        let (screen, layout) = render(&session());
        assert!(screen.contains("Previous"));
        assert!(screen.contains("Next"));
        assert!(screen.contains("Esc = Quit"));
        assert_eq!(layout, calculate_viewer_chunks(ratatui::layout::Rect::new(0, 0, 100, 30)));
    }
}
