//! Markdown rendering for terminal output
//!
//! Backend answers are markdown. This module turns them into styled ratatui
//! lines: headings, emphasis, inline code, fenced code blocks, nested lists,
//! block quotes, rules, simple tables and links. Raw HTML is shown as
//! literal text and never interpreted. Wrapping to the viewport width is
//! left to the UI layer.

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Render markdown text into styled lines
pub fn render(markdown: &str) -> Vec<Line<'static>> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut renderer = Renderer::default();
    for event in Parser::new_ext(markdown, options) {
        renderer.handle(event);
    }
    renderer.finish()
}

/// Concatenate the text content of a line, dropping styles
pub fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}

#[derive(Default)]
struct Renderer {
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
    styles: Vec<Style>,
    /// One entry per open list; `Some(n)` is the next ordinal of an ordered list
    lists: Vec<Option<u64>>,
    quote_depth: usize,
    in_code_block: bool,
    in_table_head: bool,
    cell_index: usize,
    link_targets: Vec<String>,
}

impl Renderer {
    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => {
                if self.in_code_block {
                    self.code_block_text(&text);
                } else {
                    self.push_text(text.into_string());
                }
            }
            Event::Code(code) => {
                let style = self.style().patch(inline_code_style());
                self.current.push(Span::styled(code.into_string(), style));
            }
            Event::Html(html) => {
                // Shown verbatim, one source line per output line
                for (i, part) in html.split('\n').enumerate() {
                    if i > 0 {
                        self.flush();
                    }
                    if !part.is_empty() {
                        self.push_text(part.to_string());
                    }
                }
            }
            Event::SoftBreak => self.push_text(" ".to_string()),
            Event::HardBreak => self.flush(),
            Event::Rule => {
                self.flush();
                self.lines.push(Line::from(Span::styled(
                    "─".repeat(24),
                    Style::default().fg(Color::DarkGray),
                )));
                self.blank();
            }
            Event::TaskListMarker(done) => {
                let marker = if done { "[x] " } else { "[ ] " };
                self.current.push(Span::styled(marker, Style::default().fg(Color::Green)));
            }
            Event::FootnoteReference(name) => {
                self.push_text(format!("[{}]", name));
            }
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => {}
            Tag::Heading(level, _, _) => {
                self.flush();
                self.styles.push(heading_style(level));
            }
            Tag::BlockQuote => {
                self.flush();
                self.quote_depth += 1;
                self.styles.push(
                    Style::default()
                        .fg(Color::Gray)
                        .add_modifier(Modifier::ITALIC),
                );
            }
            Tag::CodeBlock(kind) => {
                self.flush();
                self.in_code_block = true;
                if let CodeBlockKind::Fenced(lang) = kind {
                    if !lang.is_empty() {
                        self.lines.push(Line::from(Span::styled(
                            format!("  ({})", lang),
                            Style::default().fg(Color::DarkGray),
                        )));
                    }
                }
            }
            Tag::List(first) => {
                self.flush();
                self.lists.push(first);
            }
            Tag::Item => {
                self.flush();
                let depth = self.lists.len().saturating_sub(1);
                let marker = match self.lists.last_mut() {
                    Some(Some(n)) => {
                        let marker = format!("{}. ", n);
                        *n += 1;
                        marker
                    }
                    _ => "• ".to_string(),
                };
                self.current.push(Span::raw("  ".repeat(depth)));
                self.current.push(Span::styled(marker, Style::default().fg(Color::Yellow)));
            }
            Tag::Emphasis => self.styles.push(Style::default().add_modifier(Modifier::ITALIC)),
            Tag::Strong => self.styles.push(Style::default().add_modifier(Modifier::BOLD)),
            Tag::Strikethrough => {
                self.styles.push(Style::default().add_modifier(Modifier::CROSSED_OUT))
            }
            Tag::Link(_, url, _) => {
                self.link_targets.push(url.into_string());
                self.styles.push(
                    Style::default()
                        .fg(Color::Blue)
                        .add_modifier(Modifier::UNDERLINED),
                );
            }
            Tag::Image(_, url, _) => {
                self.push_text("[image: ".to_string());
                self.link_targets.push(url.into_string());
            }
            Tag::Table(_) => self.flush(),
            Tag::TableHead => {
                self.in_table_head = true;
                self.cell_index = 0;
            }
            Tag::TableRow => self.cell_index = 0,
            Tag::TableCell => {
                if self.cell_index > 0 {
                    self.current
                        .push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
                }
                self.cell_index += 1;
                if self.in_table_head {
                    self.styles.push(Style::default().add_modifier(Modifier::BOLD));
                }
            }
            Tag::FootnoteDefinition(name) => {
                self.flush();
                self.push_text(format!("[{}]: ", name));
            }
        }
    }

    fn end(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => {
                self.flush();
                if self.lists.is_empty() {
                    self.blank();
                }
            }
            Tag::Heading(..) => {
                self.styles.pop();
                self.flush();
                self.blank();
            }
            Tag::BlockQuote => {
                self.flush();
                self.styles.pop();
                self.quote_depth = self.quote_depth.saturating_sub(1);
                if self.quote_depth == 0 {
                    self.blank();
                }
            }
            Tag::CodeBlock(_) => {
                self.in_code_block = false;
                self.blank();
            }
            Tag::List(_) => {
                self.flush();
                self.lists.pop();
                if self.lists.is_empty() {
                    self.blank();
                }
            }
            Tag::Item => self.flush(),
            Tag::Emphasis | Tag::Strong | Tag::Strikethrough => {
                self.styles.pop();
            }
            Tag::Link(..) => {
                self.styles.pop();
                if let Some(url) = self.link_targets.pop() {
                    self.current.push(Span::styled(
                        format!(" <{}>", url),
                        Style::default().fg(Color::DarkGray),
                    ));
                }
            }
            Tag::Image(..) => {
                if let Some(url) = self.link_targets.pop() {
                    self.push_text(format!("] <{}>", url));
                }
            }
            Tag::Table(_) => self.blank(),
            Tag::TableHead => {
                self.in_table_head = false;
                self.flush();
            }
            Tag::TableRow => self.flush(),
            Tag::TableCell => {
                if self.in_table_head {
                    self.styles.pop();
                }
            }
            Tag::FootnoteDefinition(_) => self.flush(),
        }
    }

    fn style(&self) -> Style {
        self.styles
            .iter()
            .fold(Style::default(), |acc, style| acc.patch(*style))
    }

    fn push_text(&mut self, text: String) {
        let style = self.style();
        self.current.push(Span::styled(text, style));
    }

    fn code_block_text(&mut self, text: &str) {
        let text = text.strip_suffix('\n').unwrap_or(text);
        for part in text.split('\n') {
            self.current.push(Span::raw("  "));
            self.current.push(Span::styled(part.to_string(), code_block_style()));
            self.flush_line();
        }
    }

    /// Emit the pending spans as a line, if there are any
    fn flush(&mut self) {
        if !self.current.is_empty() {
            self.flush_line();
        }
    }

    fn flush_line(&mut self) {
        let mut spans = Vec::with_capacity(self.current.len() + 1);
        if self.quote_depth > 0 {
            spans.push(Span::styled(
                "│ ".repeat(self.quote_depth),
                Style::default().fg(Color::DarkGray),
            ));
        }
        spans.append(&mut self.current);
        self.lines.push(Line::from(spans));
    }

    /// Separate blocks with a single empty line
    fn blank(&mut self) {
        self.flush();
        let last_is_blank = self.lines.last().map_or(true, |line| line.spans.is_empty());
        if !last_is_blank {
            self.lines.push(Line::default());
        }
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.flush();
        while self.lines.last().is_some_and(|line| line.spans.is_empty()) {
            self.lines.pop();
        }
        self.lines
    }
}

fn heading_style(level: HeadingLevel) -> Style {
    let base = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    match level {
        HeadingLevel::H1 => base.add_modifier(Modifier::UNDERLINED),
        _ => base,
    }
}

fn inline_code_style() -> Style {
    Style::default().fg(Color::Yellow)
}

fn code_block_style() -> Style {
    Style::default().fg(Color::LightYellow)
}
