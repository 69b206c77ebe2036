//! Substitution tab rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use crate::tui::app::App;
use crate::tui::types::SubstitutionField;
use super::helpers::{input_block, spinner, wrap_lines};

/// Renders the substitution tab into `area`
pub fn render_substitutions(f: &mut Frame, app: &App, area: Rect) {
    let screen = &app.substitution_screen;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Ingredient input
            Constraint::Length(3), // Context input
            Constraint::Length(1), // Hint / state
            Constraint::Min(4),    // Results
        ])
        .split(area);

    let ingredient = Paragraph::new(screen.ingredient.as_str())
        .style(Style::default().fg(Color::Yellow))
        .block(input_block(
            "Ingredient to Substitute (e.g., eggs, butter, milk)",
            screen.focus == SubstitutionField::Ingredient,
        ));
    f.render_widget(ingredient, chunks[0]);

    let context = Paragraph::new(screen.context.as_str())
        .style(Style::default().fg(Color::Yellow))
        .block(input_block(
            "Recipe Context (optional, e.g., baking cookies)",
            screen.focus == SubstitutionField::Context,
        ));
    f.render_widget(context, chunks[1]);

    let state = if screen.busy {
        Span::styled(
            format!("{} Finding substitutions...", spinner(app.tick)),
            Style::default().fg(Color::LightRed),
        )
    } else {
        Span::styled(
            "Providing context helps generate more accurate substitution suggestions",
            Style::default().fg(Color::DarkGray),
        )
    };
    f.render_widget(Paragraph::new(Line::from(state)), chunks[2]);

    if screen.result.is_empty() {
        let lines = if screen.busy {
            Vec::new()
        } else {
            vec![
                Line::from(Span::styled(
                    "Ingredient substitutions",
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    "Get practical alternatives with ratios, taste notes, and best-use tips.",
                    Style::default().fg(Color::Gray),
                )),
                Line::from(Span::styled("Example: eggs in baking", Style::default().fg(Color::DarkGray))),
            ]
        };
        let placeholder = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Substitution Options"));
        f.render_widget(placeholder, chunks[3]);
        return;
    }

    let area = chunks[3];
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Substitution Options for {}", screen.result_for));
    let width = area.width.saturating_sub(2) as usize;
    let height = area.height.saturating_sub(2) as usize;
    let lines = wrap_lines(screen.result.rendered(), width);

    screen.result.max_scroll.set(lines.len().saturating_sub(height));
    let offset = screen.result.scroll.min(screen.result.max_scroll.get());
    let visible: Vec<Line> = lines.into_iter().skip(offset).take(height).collect();

    f.render_widget(Paragraph::new(visible).block(block), area);
}
