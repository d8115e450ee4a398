// fragment.rs

//! Renderable command output: lines of toned spans.

use crossterm::style::{style, Color, Stylize};
use itertools::Itertools;

const INDENT: &str = "  ";
const SKILL_NAME_WIDTH: usize = 24;
const SKILL_BAR_CELLS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Bright,
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
    /// Underlined URL.
    Link,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub tone: Tone,
}

impl Span {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self { text: text.into(), tone }
    }

    fn render_ansi(&self) -> String {
        let color = match self.tone {
            Tone::Plain => return self.text.clone(),
            Tone::Bright => Color::White,
            Tone::Red => Color::Red,
            Tone::Green => Color::Green,
            Tone::Blue | Tone::Link => Color::Blue,
            Tone::Yellow => Color::Yellow,
            Tone::Purple => Color::Magenta,
        };
        let styled = style(self.text.as_str()).with(color);
        if self.tone == Tone::Link {
            styled.underlined().to_string()
        } else {
            styled.to_string()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub indent: usize,
    pub spans: Vec<Span>,
}

impl Line {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::toned(text, Tone::Plain)
    }

    pub fn toned(text: impl Into<String>, tone: Tone) -> Self {
        Self { indent: 0, spans: vec![Span::new(text, tone)] }
    }

    pub fn push(mut self, text: impl Into<String>, tone: Tone) -> Self {
        self.spans.push(Span::new(text, tone));
        self
    }

    pub fn indent(mut self, levels: usize) -> Self {
        self.indent = levels;
        self
    }

    pub fn plain_text(&self) -> String {
        let body: String = self.spans.iter().map(|s| s.text.as_str()).collect();
        format!("{}{}", INDENT.repeat(self.indent), body)
    }

    pub fn render_ansi(&self) -> String {
        let body: String = self.spans.iter().map(Span::render_ansi).collect();
        format!("{}{}", INDENT.repeat(self.indent), body)
    }
}

/// Immutable once built; the console never looks inside.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    lines: Vec<Line>,
}

impl Fragment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new().line(Line::plain(text))
    }

    pub fn line(mut self, line: Line) -> Self {
        self.lines.push(line);
        self
    }

    pub fn blank(self) -> Self {
        self.line(Line::default())
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn plain_text(&self) -> String {
        self.lines.iter().map(Line::plain_text).join("\n")
    }

    pub fn render_ansi(&self) -> String {
        self.lines.iter().map(Line::render_ansi).join("\n")
    }
}

/// A fixed-width proficiency bar: `name  [#####.....] NN%`.
pub fn skill_bar(name: &str, percent: u8) -> Line {
    let percent = percent.min(100);
    let filled = usize::from(percent) * SKILL_BAR_CELLS / 100;
    Line::plain(format!("{:<width$}", name, width = SKILL_NAME_WIDTH))
        .push("[", Tone::Plain)
        .push("#".repeat(filled), Tone::Green)
        .push(".".repeat(SKILL_BAR_CELLS - filled), Tone::Plain)
        .push(format!("] {}%", percent), Tone::Plain)
}
