use jeonse_core::HexColor;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Padding};

#[derive(Clone, Copy)]
pub(crate) enum ValueStyle {
    Normal,
    Important,
    Dim,
}

pub(crate) struct Theme {
    border: Color,
    focus_border: Color,
    title: Color,
    text: Color,
    dim: Color,
    accent: Color,
    warn: Color,
    ok: Color,
}

pub(crate) fn rgb(color: HexColor) -> Color {
    let (r, g, b) = color.rgb();
    Color::Rgb(r, g, b)
}

impl Theme {
    pub(crate) fn dark() -> Self {
        Self {
            border: Color::DarkGray,
            focus_border: Color::Cyan,
            title: Color::Blue,
            text: Color::White,
            dim: Color::Gray,
            accent: Color::Cyan,
            warn: Color::Yellow,
            ok: Color::Green,
        }
    }

    pub(crate) fn block<'a>(&self, title: &'a str) -> Block<'a> {
        Block::default()
            .title(ratatui::text::Span::styled(
                title,
                Style::default()
                    .fg(self.title)
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border))
    }

    /// Input box; the focused one gets a thick accent border.
    pub(crate) fn field_block<'a>(&self, title: &'a str, focused: bool) -> Block<'a> {
        let block = self.block(title);
        if focused {
            block
                .border_type(BorderType::Thick)
                .border_style(Style::default().fg(self.focus_border))
        } else {
            block
        }
    }

    /// Status panel tinted with the risk colors, thick bar on the left.
    pub(crate) fn emphasis_block(&self, color: HexColor, background: HexColor) -> Block<'static> {
        Block::default()
            .borders(Borders::LEFT)
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(rgb(color)).bg(rgb(background)))
            .style(Style::default().bg(rgb(background)))
            .padding(Padding::new(2, 1, 1, 1))
    }

    pub(crate) fn help_style(&self) -> Style {
        Style::default().fg(self.dim)
    }

    pub(crate) fn accent_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn link_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::UNDERLINED)
    }

    pub(crate) fn warn_style(&self) -> Style {
        Style::default().fg(self.warn).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn ok_style(&self) -> Style {
        Style::default().fg(self.ok).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn key_style(&self) -> Style {
        Style::default().fg(self.dim)
    }

    pub(crate) fn value_style(&self, level: ValueStyle) -> Style {
        match level {
            ValueStyle::Normal => Style::default().fg(self.text),
            ValueStyle::Important => Style::default()
                .fg(self.accent)
                .add_modifier(Modifier::BOLD),
            ValueStyle::Dim => Style::default().fg(self.dim),
        }
    }

    pub(crate) fn risk_style(&self, color: HexColor) -> Style {
        Style::default()
            .fg(rgb(color))
            .add_modifier(Modifier::BOLD)
    }
}
