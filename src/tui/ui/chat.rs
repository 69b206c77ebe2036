//! Chat tab rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use crate::markdown;
use crate::protocol::Role;
use crate::tui::app::App;
use crate::tui::screens::{ChatScreen, QUICK_PROMPTS};
use super::helpers::{input_block, plain_lines, spinner, wrap_lines};

/// Renders the chat tab into `area`
pub fn render_chat(f: &mut Frame, app: &App, area: Rect) {
    let screen = &app.chat_screen;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Transcript
            Constraint::Length(5), // Input box
            Constraint::Length(1), // Status
        ])
        .split(area);

    render_transcript(f, screen, app.tick, chunks[0]);

    let input_style = if screen.busy {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let input = Paragraph::new(screen.input.as_str())
        .style(input_style)
        .wrap(Wrap { trim: false })
        .block(input_block("Ask anything (Enter to send, Alt+Enter for new line)", !screen.busy));
    f.render_widget(input, chunks[1]);

    if let Some(status) = &screen.status_message {
        let color = if screen.is_error { Color::Red } else { Color::Green };
        let status = Paragraph::new(status.as_str())
            .style(Style::default().fg(color))
            .alignment(Alignment::Right);
        f.render_widget(status, chunks[2]);
    }
}

fn render_transcript(f: &mut Frame, screen: &ChatScreen, tick: u64, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Chat ({} messages)", screen.conversation.len()));

    if screen.conversation.is_empty() && !screen.busy {
        let welcome = Paragraph::new(welcome_lines())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
        f.render_widget(welcome, area);
        return;
    }

    let width = area.width.saturating_sub(2) as usize;
    let height = area.height.saturating_sub(2) as usize;
    let lines = wrap_lines(&transcript_lines(screen, tick), width);

    let max_scroll_back = lines.len().saturating_sub(height);
    screen.max_scroll_back.set(max_scroll_back);
    let offset = max_scroll_back - screen.scroll_back.min(max_scroll_back);
    let visible: Vec<Line> = lines.into_iter().skip(offset).take(height).collect();

    f.render_widget(Paragraph::new(visible).block(block), area);
}

/// Full transcript, unwrapped
fn transcript_lines(screen: &ChatScreen, tick: u64) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for turn in screen.conversation.turns() {
        let (label, color) = match turn.role {
            Role::User => ("You", Color::Green),
            Role::Assistant => ("ChefMate", Color::LightRed),
        };
        lines.push(Line::from(vec![
            Span::styled(label, Style::default().fg(color).add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("  {}", turn.timestamp.format("%H:%M")),
                Style::default().fg(Color::DarkGray),
            ),
        ]));

        match turn.role {
            Role::User => lines.extend(plain_lines(&turn.content, Style::default().fg(Color::White))),
            Role::Assistant => lines.extend(markdown::render(&turn.content)),
        }
        lines.push(Line::default());
    }

    if screen.busy {
        lines.push(Line::from(Span::styled(
            format!("{} ChefMate is thinking...", spinner(tick)),
            Style::default().fg(Color::LightRed),
        )));
    }

    lines
}

fn welcome_lines() -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Start a cooking conversation",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Ask for step-by-step help, timings, substitutions, or quick recipe ideas.",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled("Try one of these:", Style::default().fg(Color::DarkGray))),
    ];

    for (i, prompt) in QUICK_PROMPTS.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("[Alt+{}] ", i + 1), Style::default().fg(Color::Yellow)),
            Span::raw(*prompt),
        ]));
    }

    lines
}
