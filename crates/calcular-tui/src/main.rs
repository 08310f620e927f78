//! Calculador: terminal four-function calculator
//!
//! ## Usage
//!
//! ```bash
//! calculador                        # Interactive keypad TUI
//! calculador replay script.txt      # Replay a script headlessly
//! echo '2+3=' | calculador replay - # Replay from stdin
//! calculador --log-file calc.log    # Log to a file (TUI stays clean)
//! ```

use std::io::{self, Read};
use std::process::ExitCode;

use clap::Parser;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Terminal,
};

use calculador::{
    logging, replay, ui, App, Cli, CliResult, Commands, InputHandler, KeyAction, ReplayArgs,
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    logging::init(cli.log_file.as_deref())?;

    match cli.command {
        Some(Commands::Replay(args)) => run_replay(&args),
        None => run_tui(),
    }
}

// =============================================================================
// Replay command
// =============================================================================

fn run_replay(args: &ReplayArgs) -> CliResult<()> {
    let script = read_script(args)?;
    let outcome = replay::run_script(&script)?;

    if args.trace {
        for step in &outcome.steps {
            println!("{:?} -> {}", step.event, step.display.main_text);
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome.final_display)?);
    } else {
        // Both display lines, the way the TUI paints them. The secondary
        // line is printed even when empty so the output shape is stable.
        println!("{}", outcome.final_display.secondary_text);
        println!("{}", outcome.final_display.main_text);
    }

    Ok(())
}

fn read_script(args: &ReplayArgs) -> CliResult<String> {
    if args.script.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(std::fs::read_to_string(&args.script)?)
    }
}

// =============================================================================
// Interactive TUI
// =============================================================================

fn run_tui() -> CliResult<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    tracing::info!("interactive session started");

    let result = run_app(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    tracing::info!("interactive session ended");

    result
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>) -> CliResult<()> {
    let mut app = App::new();
    let input_handler = InputHandler::new();

    loop {
        terminal.draw(|f| ui::render(&app, f))?;

        match event::read()? {
            Event::Key(key) => match input_handler.handle_key(key) {
                KeyAction::Calculator(engine_event) => app.apply(engine_event),
                KeyAction::Quit => app.quit(),
                KeyAction::None => {}
            },
            Event::Mouse(mouse) => handle_mouse(terminal, &mut app, &mouse)?,
            _ => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Resolves a left click against the keypad grid and fires its event
fn handle_mouse<B: Backend>(
    terminal: &Terminal<B>,
    app: &mut App,
    mouse: &MouseEvent,
) -> CliResult<()> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return Ok(());
    }

    let size = terminal.size()?;
    let area = Rect::new(0, 0, size.width, size.height);
    let layout = ui::screen_layout(area);

    if let Some(idx) = app.keypad().hit_test(layout.keypad, mouse.column, mouse.row) {
        if let Some(engine_event) = app.keypad().button_event(idx) {
            tracing::debug!(button = idx, event = ?engine_event, "keypad click");
            app.apply(engine_event);
        }
    }

    Ok(())
}
