mod app;
mod domain;
mod input;
mod notifications;
mod persistence;
mod ticker;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use persistence::{ensure_data_dir, init_local_dir, Store};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

#[derive(Parser)]
#[command(name = "monotask")]
#[command(about = "A minimalist terminal focus timer: one task at a time", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .monotask directory in the current directory
    Init,
    /// Print the completed-task history without entering the TUI
    History {
        /// Show at most this many entries (most recent first)
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            let data_dir = init_local_dir()?;
            println!("Initialized MonoTask directory: {}", data_dir.display());
            println!();
            println!("MonoTask will now use this local directory for task storage.");
            println!("Run 'monotask' to start focusing.");
            Ok(())
        }
        Some(Commands::History { limit }) => print_history(limit),
        None => run_tui(),
    }
}

/// Print completed tasks to stdout, most recent first
fn print_history(limit: Option<usize>) -> Result<()> {
    let store = Store::new(ensure_data_dir()?);
    let completed = store.load_completed()?;

    if completed.is_empty() {
        println!("No completed tasks yet.");
        return Ok(());
    }

    let shown = limit.unwrap_or(completed.len());
    for task in completed.iter().rev().take(shown) {
        if task.description.is_empty() {
            println!(
                "{}  {}",
                task.completed_at.format("%Y-%m-%d %H:%M"),
                task.title
            );
        } else {
            println!(
                "{}  {} — {}",
                task.completed_at.format("%Y-%m-%d %H:%M"),
                task.title,
                task.description
            );
        }
    }
    Ok(())
}

fn run_tui() -> Result<()> {
    let data_dir = ensure_data_dir()?;
    eprintln!("Using MonoTask directory: {}", data_dir.display());

    // Load persisted state; corrupt files fall back to a clean start
    let store = Store::new(data_dir);
    let mut app = AppState::new(store, notifications::system_notifier());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Print any errors
    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let poll_timeout = ticker::poll_timeout();

    loop {
        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(poll_timeout)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    let should_quit = input::handle_key(app, key)?;
                    if should_quit {
                        return Ok(());
                    }
                }
            }
        }

        // Advance the countdown by any whole seconds that have passed
        app.tick()?;
    }
}
