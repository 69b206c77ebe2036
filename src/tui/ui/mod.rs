//! UI rendering module - tab-specific rendering functions
//!
//! The frame is split into a header (title and backend status), the tab
//! bar, the active tab's body and a key help footer. Each tab has its own
//! file.

mod chat;
mod helpers;
mod recipes;
mod substitutions;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};
use crate::tui::app::App;
use crate::tui::types::{BackendStatus, Tab};

// Re-export render functions
pub use chat::render_chat;
pub use recipes::render_recipes;
pub use substitutions::render_substitutions;

// Re-export helper functions
pub use helpers::{chips_line, spinner, wrap_line, wrap_lines};

/// Main UI rendering function - draws the shell and dispatches to the active tab
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Tabs
            Constraint::Min(8),    // Body
            Constraint::Length(3), // Help
        ])
        .split(f.size());

    render_header(f, app, chunks[0]);
    render_tabs(f, app, chunks[1]);

    match app.active_tab {
        Tab::Chat => render_chat(f, app, chunks[2]),
        Tab::Recipes => render_recipes(f, app, chunks[2]),
        Tab::Substitutions => render_substitutions(f, app, chunks[2]),
    }

    let help = Paragraph::new(help_text(app.active_tab))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let (dot_color, detail) = match &app.backend_status {
        BackendStatus::Checking => (Color::Yellow, String::new()),
        BackendStatus::Live => (Color::Green, String::new()),
        BackendStatus::Offline(reason) => (Color::Red, format!(" ({})", reason)),
    };

    let header = Line::from(vec![
        Span::styled(
            "ChefMate",
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" · AI cooking assistant   ", Style::default().fg(Color::Gray)),
        Span::styled("● ", Style::default().fg(dot_color)),
        Span::styled(app.backend_status.label().to_string(), Style::default().fg(dot_color)),
        Span::styled(detail, Style::default().fg(Color::DarkGray)),
        Span::styled(format!("   {}", app.api_url()), Style::default().fg(Color::DarkGray)),
    ]);

    let widget = Paragraph::new(header)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(widget, area);
}

fn render_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Tab::all()
        .iter()
        .map(|tab| Line::from(format!("F{} {}", tab.hotkey(), tab.label())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.active_tab.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        )
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(tabs, area);
}

/// Key help for the footer
pub fn help_text(tab: Tab) -> &'static str {
    match tab {
        Tab::Chat => {
            "Enter: Send | Alt+Enter: Newline | Alt+1-4: Prompt | Ctrl+Y: Copy | ↑/↓: Scroll | Ctrl+L: Clear | F1-F3: Tabs | Esc: Quit"
        }
        Tab::Recipes => {
            "Enter: Add / Search | Tab: Field | ←/→: Select | Del: Remove | Ctrl+S: Search | Ctrl+L: Clear | Esc: Quit"
        }
        Tab::Substitutions => {
            "Enter: Find | Tab: Field | ↑/↓: Scroll | Ctrl+L: Clear | F1-F3: Tabs | Esc: Quit"
        }
    }
}
