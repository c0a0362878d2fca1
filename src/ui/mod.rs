pub mod terminal;
pub mod input;
pub mod renderers;

use std::io;
use ratatui::{backend::CrosstermBackend, Terminal};
use crate::types::App;

// Re-export the main public functions
pub use terminal::{setup_terminal, restore_terminal};

/// Main UI rendering function
pub fn render_ui(app: &App, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), io::Error> {
    terminal.draw(|f| {
        renderers::dashboard::render(f, app);
    })?;
    Ok(())
}
