use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    style::Print,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ham_flashcards::{
    AppState, Cli, LoadError, Movement, QuestionSet, SourceReport, ViewerConfig, ViewerSession,
    draw_viewer, handle_viewer_click, handle_viewer_input, load_questions_with, logger,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = ViewerConfig::from(Cli::parse());
    logger::init(&config.log_file);

    println!("Ham Radio Flashcard Viewer");
    println!("{}", "=".repeat(60));

    let questions = match load(&config) {
        Ok(questions) => questions,
        Err(e) => {
            report_load_error(&e);
            return ExitCode::FAILURE;
        }
    };

    println!("\n✓ Flashcard viewer ready!");
    println!("✓ Use Space or → to advance");
    println!("✓ Use ← to go back");
    println!("✓ Press Esc to quit\n");

    match run_viewer(questions) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "terminal error");
            eprintln!("Terminal error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn load(config: &ViewerConfig) -> Result<QuestionSet, LoadError> {
    config.check_files()?;

    println!("Loading question pools...");
    let questions = load_questions_with(&config.sources(), print_source_report)?;
    println!("✓ Total questions: {}", questions.len());
    Ok(questions)
}

fn print_source_report(report: &SourceReport) {
    println!("Read {}", report.path.display());
    println!("  Columns found: {:?}", report.columns);
    println!("✓ Loaded {} {} questions", report.accepted, report.pool);
    if report.dropped > 0 {
        println!("  Skipped {} incomplete rows", report.dropped);
    }
}

fn report_load_error(e: &LoadError) {
    tracing::error!(error = %e, "failed to load questions");

    match e {
        LoadError::FileNotFound { .. } => {
            eprintln!("Error: {e}");
            eprintln!("Make sure the file is in the current folder");
        }
        LoadError::EmptyResult => {
            eprintln!("\nERROR: {e}!");
            eprintln!("Please check that your CSV files have the correct format.");
        }
        LoadError::MalformedInput { .. } => {
            eprintln!("Error: {e}");
            eprintln!("\nPlease check your CSV file format.");
        }
    }
    if e.wants_format_hint() {
        eprintln!("Expected columns: id, question, Correct Answer");
    }
}

fn run_viewer(questions: QuestionSet) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    tracing::info!(total = questions.len(), "viewer started");
    let result = event_loop(&mut terminal, ViewerSession::new(questions));

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut session: ViewerSession,
) -> io::Result<()> {
    let mut layout = None;

    while session.state == AppState::Viewing {
        terminal.draw(|f| layout = Some(draw_viewer(f, &session)))?;

        let movement = match event::read()? {
            Event::Key(key) => handle_viewer_input(&mut session, key),
            Event::Mouse(mouse) => match &layout {
                Some(layout) => handle_viewer_click(&mut session, mouse, layout),
                None => None,
            },
            _ => None,
        };

        if movement == Some(Movement::Wrapped) {
            // Terminal bell
            execute!(terminal.backend_mut(), Print('\u{7}'))?;
        }
    }

    Ok(())
}
