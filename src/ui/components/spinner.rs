use crate::ui::theme::{ACCENT, TEXT};
use ratatui::layout::Alignment;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct Spinner<'a> {
    tick: usize,
    message: &'a str,
}

impl<'a> Spinner<'a> {
    pub fn new(tick: usize, message: &'a str) -> Self {
        Self { tick, message }
    }

    pub fn frame(&self) -> &'static str {
        FRAMES[self.tick % FRAMES.len()]
    }

    pub fn widget(&self) -> Paragraph<'static> {
        Paragraph::new(vec![
            Line::from(Span::styled(self.frame(), Style::default().fg(ACCENT))),
            Line::from(""),
            Line::from(Span::styled(self.message.to_string(), Style::default().fg(TEXT))),
        ])
        .alignment(Alignment::Center)
    }
}
