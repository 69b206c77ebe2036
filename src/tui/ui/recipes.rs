//! Recipe search tab rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use crate::tui::app::App;
use crate::tui::types::RecipeField;
use super::helpers::{chips_line, input_block, spinner, wrap_lines};

/// Renders the recipe search tab into `area`
pub fn render_recipes(f: &mut Frame, app: &App, area: Rect) {
    let screen = &app.recipe_screen;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Ingredient input
            Constraint::Length(1), // Ingredient chips
            Constraint::Length(3), // Restriction input
            Constraint::Length(1), // Restriction chips
            Constraint::Length(1), // Search state
            Constraint::Min(4),    // Results
        ])
        .split(area);

    let ingredients_focused = screen.focus == RecipeField::Ingredients;

    let ingredient_input = Paragraph::new(screen.ingredient_input.as_str())
        .style(Style::default().fg(Color::Yellow))
        .block(input_block(
            "Available Ingredients (e.g., chicken, tomatoes, garlic)",
            ingredients_focused,
        ));
    f.render_widget(ingredient_input, chunks[0]);

    let ingredient_selection = if ingredients_focused { screen.selected_chip } else { None };
    f.render_widget(
        Paragraph::new(chips_line(screen.ingredients.as_slice(), ingredient_selection, Color::LightRed)),
        chunks[1],
    );

    let restriction_input = Paragraph::new(screen.restriction_input.as_str())
        .style(Style::default().fg(Color::Yellow))
        .block(input_block(
            "Dietary Restrictions (optional, e.g., vegetarian)",
            !ingredients_focused,
        ));
    f.render_widget(restriction_input, chunks[2]);

    let restriction_selection = if ingredients_focused { None } else { screen.selected_chip };
    f.render_widget(
        Paragraph::new(chips_line(screen.restrictions.as_slice(), restriction_selection, Color::Gray)),
        chunks[3],
    );

    let state = if screen.busy {
        Span::styled(
            format!("{} Searching recipes...", spinner(app.tick)),
            Style::default().fg(Color::LightRed),
        )
    } else if screen.can_submit() {
        Span::styled("Ready: Ctrl+S or Enter on an empty field to search", Style::default().fg(Color::Green))
    } else {
        Span::styled("Add at least one ingredient to search", Style::default().fg(Color::DarkGray))
    };
    f.render_widget(Paragraph::new(Line::from(state)), chunks[4]);

    render_results(f, app, chunks[5]);
}

fn render_results(f: &mut Frame, app: &App, area: Rect) {
    let screen = &app.recipe_screen;
    let block = Block::default().borders(Borders::ALL).title("Recipe suggestions");

    if screen.result.is_empty() {
        let lines = if screen.ingredients.is_empty() && !screen.busy {
            vec![
                Line::from(Span::styled(
                    "Find recipes from ingredients",
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    "Add what you have on hand and get recipe ideas with quick steps.",
                    Style::default().fg(Color::Gray),
                )),
                Line::from(Span::styled(
                    "Tip: you can paste a comma-separated list. Example: chicken, rice, broccoli",
                    Style::default().fg(Color::DarkGray),
                )),
            ]
        } else {
            Vec::new()
        };
        let placeholder = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
        f.render_widget(placeholder, area);
        return;
    }

    let width = area.width.saturating_sub(2) as usize;
    let height = area.height.saturating_sub(2) as usize;
    let lines = wrap_lines(screen.result.rendered(), width);

    screen.result.max_scroll.set(lines.len().saturating_sub(height));
    let offset = screen.result.scroll.min(screen.result.max_scroll.get());
    let visible: Vec<Line> = lines.into_iter().skip(offset).take(height).collect();

    f.render_widget(Paragraph::new(visible).block(block), area);
}
