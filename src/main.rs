// clecture: interactive C lecture widgets in the terminal

use std::io;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use clecture::config::{Cli, Settings};
use clecture::logging;
use clecture::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from(Cli::parse());

    if let Err(e) = logging::init(&settings.log_file, settings.log_level.as_deref()) {
        eprintln!("Warning: logging disabled: {}", e);
    }
    tracing::info!(widget = ?settings.initial_widget, "starting");

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(&settings);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "terminal loop failed");
        eprintln!("Error: {:?}", err);
    }

    tracing::info!("exiting");
    Ok(())
}
