//! The interactive turn loop - terminal front end for a game session.

// Seed derivation uses an intentional truncating cast
#![allow(clippy::cast_possible_truncation)]

use super::CliError;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::io::stdout;
use std::path::PathBuf;
use twenty48::{Command, Direction, GameSession, persist};

/// Run the game until the player quits.
///
/// Restores the saved game if one exists, otherwise starts fresh.
///
/// # Errors
///
/// Returns an error if the save location cannot be determined or the
/// terminal cannot be driven.
pub(crate) fn execute() -> Result<(), CliError> {
    // Seed from the clock; the engine itself is seed-injected for tests
    let seed = {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42)
    };

    let save_path = persist::default_save_path()?;

    let (session, message) = match persist::load(&save_path) {
        Ok(Some(saved)) => (
            GameSession::from_saved(&saved, seed),
            Some("Game loaded!".to_string()),
        ),
        Ok(None) => (GameSession::new(seed), None),
        Err(e) => (
            GameSession::new(seed),
            Some(format!("Load failed: {e}; starting fresh")),
        ),
    };

    run_tui(App {
        session,
        save_path,
        message,
    })
}

/// App state for the turn loop.
struct App {
    session: GameSession,
    save_path: PathBuf,
    /// Transient status line: save/load outcomes, game-over banner.
    message: Option<String>,
}

impl App {
    fn handle_move(&mut self, direction: Direction) {
        if self.session.is_over() {
            return;
        }
        self.message = None;
        self.session.apply_move(direction);
        if self.session.is_over() {
            self.message = Some(format!(
                "Game over! Final score: {}",
                self.session.board().score()
            ));
        }
    }

    fn handle_save(&mut self) {
        if self.session.is_over() {
            return;
        }
        self.message = Some(
            match persist::save(&self.save_path, &self.session.snapshot()) {
                Ok(()) => "Game saved!".to_string(),
                Err(e) => format!("Save failed: {e}"),
            },
        );
    }

    fn handle_load(&mut self) {
        if self.session.is_over() {
            return;
        }
        self.message = Some(match persist::load(&self.save_path) {
            Ok(Some(saved)) => {
                self.session.restore(&saved);
                "Game loaded!".to_string()
            }
            Ok(None) => "No saved game found.".to_string(),
            Err(e) => format!("Load failed: {e}"),
        });
    }
}

fn run_tui(mut app: App) -> Result<(), CliError> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    loop {
        terminal.draw(|f| ui(f, &app))?;

        // Blocking read: one command per key press, no timeout
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match map_key(key.code) {
                Some(Command::Quit) => break,
                Some(Command::Move(direction)) => app.handle_move(direction),
                Some(Command::Save) => app.handle_save(),
                Some(Command::Load) => app.handle_load(),
                None => {}
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    Ok(())
}

/// Translate a key press into a turn-loop command.
fn map_key(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Up => Some(Command::Move(Direction::Up)),
        KeyCode::Down => Some(Command::Move(Direction::Down)),
        KeyCode::Left => Some(Command::Move(Direction::Left)),
        KeyCode::Right => Some(Command::Move(Direction::Right)),
        KeyCode::Char('s' | 'S') => Some(Command::Save),
        KeyCode::Char('l' | 'L') => Some(Command::Load),
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3),  // Header
        Constraint::Min(11),    // Board
        Constraint::Length(4),  // Footer
    ])
    .split(f.area());

    render_header(f, chunks[0], app);
    render_board(f, chunks[1], app);
    render_footer(f, chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let status = if app.session.is_over() {
        "GAME OVER"
    } else {
        "PLAYING"
    };

    let title = format!(
        " Twenty48 | Score: {} | {status} ",
        app.session.board().score()
    );

    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = vec![Line::from("")];

    for (index, row) in app.session.board().rows().iter().enumerate() {
        if index > 0 {
            lines.push(Line::from(""));
        }
        let mut spans = Vec::new();
        for &value in row {
            // 0 renders as the placeholder glyph
            let text = if value == 0 {
                format!("{:>7}", ".")
            } else {
                format!("{value:>7}")
            };
            spans.push(Span::styled(
                text,
                Style::default()
                    .fg(tile_color(value))
                    .add_modifier(Modifier::BOLD),
            ));
        }
        lines.push(Line::from(spans));
    }

    let board_widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Board "));

    f.render_widget(board_widget, area);
}

fn tile_color(value: u32) -> Color {
    match value {
        0 => Color::DarkGray,
        2 => Color::White,
        4 => Color::LightYellow,
        8 => Color::Yellow,
        16 => Color::LightRed,
        32 => Color::Red,
        64 => Color::LightMagenta,
        128 => Color::Magenta,
        256 => Color::LightCyan,
        512 => Color::Cyan,
        1024 => Color::LightGreen,
        2048 => Color::Green,
        _ => Color::LightBlue,
    }
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let controls = if app.session.is_over() {
        " [q] Quit "
    } else {
        " [↑↓←→] Move  [s] Save  [l] Load  [q] Quit "
    };

    let message = app.message.as_deref().unwrap_or("");
    let lines = vec![
        Line::from(Span::styled(
            message,
            Style::default().fg(Color::Yellow),
        )),
        Line::from(controls),
    ];

    let footer = Paragraph::new(lines)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(footer, area);
}
