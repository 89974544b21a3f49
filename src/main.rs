//! # Canvex CLI Entry Point
//!
//! This is the main entry point for the Canvex TUI application.
//!
//! ## Overview
//!
//! Canvex renders the CardEx Lean Canvas - a fixed nine-section
//! business-model grid - as an interactive terminal UI. The content is
//! embedded at build time; the only runtime state is which section is
//! currently expanded.
//!
//! ## Usage
//!
//! ```bash
//! # Open the canvas
//! canvex
//!
//! # Open with a specific theme for this session
//! canvex --theme "Tokyo Night"
//!
//! # List the built-in themes
//! canvex --list-themes
//!
//! # Debug mode - print the content table and exit
//! canvex --debug
//! ```
//!
//! ## Key Bindings
//!
//! - `q` / `Q` - Quit the application
//! - `↑↓←→` / `hjkl` - Move between sections
//! - `Enter` / `Space` - Expand/collapse the focused section
//! - Left mouse click - Expand/collapse the clicked section
//! - `t` - Cycle the color theme (persisted)
//! - `i` - Show/hide the info panel

use canvex::canvas::content::SECTIONS;
use canvex::canvas::layout::{self, Nav};
use canvex::ui;
use canvex::ui::config::Config;
use canvex::ui::theme::Theme;
use canvex::ui::App;

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io;
use std::panic;
use std::time::Duration;

/// Trait for reading terminal events (allows dependency injection for testing)
trait EventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Production event reader that uses crossterm's event polling + read
struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            Ok(Some(
                event::read().context("Failed to read terminal event")?,
            ))
        } else {
            Ok(None)
        }
    }
}

/// Canvex - a terminal Lean Canvas viewer for the CardEx product concept
#[derive(Parser, Debug)]
#[command(name = "canvex")]
#[command(author = "CardEx")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "View the CardEx Lean Canvas in your terminal", long_about = None)]
struct Args {
    /// Theme to use for this session (overrides the saved config)
    #[arg(short, long, value_name = "NAME")]
    theme: Option<String>,

    /// List the built-in themes and exit
    #[arg(long)]
    list_themes: bool,

    /// Print the canvas content table and exit
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Try to restore terminal state
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);

        // Call the original panic hook
        original_hook(panic_info);
    }));

    // Run the application and ensure cleanup happens
    let result = run_application(args).await;

    // Restore panic hook
    let _ = panic::take_hook();

    result
}

/// Resolve the active theme: CLI override first, then the saved config,
/// then the default. An unknown CLI name is an error; an unknown saved
/// name silently falls back to the default.
fn resolve_theme(cli_theme: Option<&str>, config: &Config) -> Result<Theme> {
    if let Some(name) = cli_theme {
        let Some(theme) = Theme::by_name(name) else {
            let names: Vec<&str> = Theme::all().iter().map(|t| t.name).collect();
            bail!("Unknown theme: {name}. Available themes: {}", names.join(", "));
        };
        return Ok(theme.clone());
    }

    Ok(Theme::by_name(&config.theme)
        .unwrap_or_else(Theme::default_theme)
        .clone())
}

async fn run_application(args: Args) -> Result<()> {
    if args.list_themes {
        for theme in Theme::all() {
            println!("{}", theme.name);
        }
        return Ok(());
    }

    let config = Config::load();
    let theme = resolve_theme(args.theme.as_deref(), &config)?;

    // Debug mode: print the content table and exit
    if args.debug {
        println!("=== Lean Canvas Sections ===");
        for section in &SECTIONS {
            let annotations: Vec<&str> =
                section.annotations.iter().map(|a| a.label).collect();
            println!(
                "  Title: {}\n    Id: {}\n    Items: {}\n    Annotations: {}\n",
                section.title,
                section.id.as_str(),
                section.items.len(),
                if annotations.is_empty() {
                    "none".to_string()
                } else {
                    annotations.join(", ")
                }
            );
        }
        println!("Total: {} sections", SECTIONS.len());
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode for terminal")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(theme);

    // Run the app and ensure cleanup happens even on error
    let mut event_reader = CrosstermEventReader;
    let run_result = run_app(&mut terminal, &mut app, &mut event_reader).await;

    // Restore terminal (always runs, even if run_app failed)
    let cleanup_result = cleanup_terminal(&mut terminal);

    // Return the first error that occurred, or Ok if both succeeded
    run_result?;
    cleanup_result?;

    Ok(())
}

/// Clean up terminal state
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_reader: &mut dyn EventReader,
) -> Result<()> {
    loop {
        terminal
            .draw(|f| ui::render(f, app))
            .context("Failed to draw terminal UI")?;

        let event = event_reader.read_event(Duration::from_millis(100))?;

        // If no event, continue the loop (re-render on resize etc.)
        let event = match event {
            Some(e) => e,
            None => continue,
        };

        match event {
            Event::Key(key) => {
                // Handle info modal close first
                if app.show_info {
                    match key.code {
                        KeyCode::Char('i') | KeyCode::Esc => {
                            app.toggle_info();
                        }
                        _ => {}
                    }
                    continue;
                }

                match key.code {
                    KeyCode::Char('q') | KeyCode::Char('Q') => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('i') => {
                        app.toggle_info();
                    }
                    KeyCode::Char('t') => {
                        let name = app.cycle_theme();
                        let config = Config {
                            theme: name.to_string(),
                        };
                        if let Err(e) = config.save() {
                            eprintln!("Warning: Failed to save theme choice: {e}");
                        }
                    }
                    KeyCode::Down | KeyCode::Char('j') => {
                        app.move_cursor(Nav::Down);
                    }
                    KeyCode::Up | KeyCode::Char('k') => {
                        app.move_cursor(Nav::Up);
                    }
                    KeyCode::Left | KeyCode::Char('h') => {
                        app.move_cursor(Nav::Left);
                    }
                    KeyCode::Right | KeyCode::Char('l') => {
                        app.move_cursor(Nav::Right);
                    }
                    KeyCode::Enter | KeyCode::Char(' ') => {
                        app.toggle_cursor_section();
                    }
                    _ => {}
                }
            }
            Event::Mouse(mouse) => {
                if !app.show_info && matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left))
                {
                    let size = terminal.size()?;
                    let area = Rect::new(0, 0, size.width, size.height);
                    let (_, canvas_area, _) = layout::screen_chunks(area);
                    if let Some(id) = layout::section_at(mouse.column, mouse.row, canvas_area) {
                        app.toggle_section(id);
                    }
                }
            }
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
