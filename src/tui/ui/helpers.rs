//! UI helper functions

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
};

const SPINNER_FRAMES: [&str; 4] = ["⠋", "⠙", "⠸", "⠴"];

/// Spinner glyph for the given frame counter
pub fn spinner(tick: u64) -> &'static str {
    SPINNER_FRAMES[(tick % SPINNER_FRAMES.len() as u64) as usize]
}

/// Bordered block whose border lights up when focused
pub fn input_block(title: &str, focused: bool) -> Block<'static> {
    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title.to_string())
}

/// One line of removable entries, the selected one highlighted
pub fn chips_line(entries: &[String], selected: Option<usize>, color: Color) -> Line<'static> {
    if entries.is_empty() {
        return Line::from(Span::styled("(none yet)", Style::default().fg(Color::DarkGray)));
    }

    let mut spans = Vec::with_capacity(entries.len() * 2);
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let style = if selected == Some(i) {
            Style::default()
                .fg(Color::Black)
                .bg(color)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color)
        };
        spans.push(Span::styled(format!("[{} ×]", entry), style));
    }
    Line::from(spans)
}

/// Word-wrap styled lines to `width` columns
///
/// Breaks at whitespace where possible and splits words longer than a
/// whole line. Width is counted in chars.
pub fn wrap_lines(lines: &[Line<'static>], width: usize) -> Vec<Line<'static>> {
    lines.iter().flat_map(|line| wrap_line(line, width)).collect()
}

/// Word-wrap a single styled line
pub fn wrap_line(line: &Line<'static>, width: usize) -> Vec<Line<'static>> {
    if width == 0 {
        return vec![line.clone()];
    }

    let mut out = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut used = 0;

    for span in &line.spans {
        for token in tokens(&span.content) {
            let len = token.chars().count();

            if used + len <= width {
                current.push(Span::styled(token.to_string(), span.style));
                used += len;
                continue;
            }

            if token.trim().is_empty() {
                // Break at the whitespace and drop it
                out.push(finish_line(&mut current));
                used = 0;
                continue;
            }

            if used > 0 && len <= width {
                out.push(finish_line(&mut current));
                current.push(Span::styled(token.to_string(), span.style));
                used = len;
                continue;
            }

            // Longer than the remaining room and than a full line: hard split
            let mut rest = token;
            while !rest.is_empty() {
                if used >= width {
                    out.push(finish_line(&mut current));
                    used = 0;
                }
                let room = width - used;
                let end = rest
                    .char_indices()
                    .nth(room)
                    .map_or(rest.len(), |(index, _)| index);
                let (head, tail) = rest.split_at(end);
                current.push(Span::styled(head.to_string(), span.style));
                used += head.chars().count();
                rest = tail;
            }
        }
    }

    if !current.is_empty() || out.is_empty() {
        out.push(Line::from(current));
    }
    out
}

/// Take the pending spans as a line, minus trailing whitespace
fn finish_line(current: &mut Vec<Span<'static>>) -> Line<'static> {
    while current.last().is_some_and(|span| span.content.trim().is_empty()) {
        current.pop();
    }
    Line::from(std::mem::take(current))
}

/// Split into alternating runs of whitespace and non-whitespace
fn tokens(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut in_space = None;

    for (index, c) in text.char_indices() {
        let is_space = c.is_whitespace();
        match in_space {
            Some(previous) if previous != is_space => {
                tokens.push(&text[start..index]);
                start = index;
            }
            _ => {}
        }
        in_space = Some(is_space);
    }

    if start < text.len() {
        tokens.push(&text[start..]);
    }
    tokens
}

/// Plain-text lines to styled lines, one per `\n`
pub fn plain_lines(text: &str, style: Style) -> Vec<Line<'static>> {
    text.split('\n')
        .map(|part| Line::from(Span::styled(part.to_string(), style)))
        .collect()
}
