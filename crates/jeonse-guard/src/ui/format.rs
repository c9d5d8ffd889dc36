use jeonse_core::{format_ratio, format_thousands, Assessment};
use ratatui::text::{Line, Span, Text};

use super::app::SearchOutcome;
use super::theme::{Theme, ValueStyle};

pub(super) const MISSING_ADDRESS: &str = "Enter an address or complex name.";
pub(super) const LINK_READY: &str = "Open the link below to check listings on Naver Real Estate.";
pub(super) const INVALID_PRICE: &str = "Enter a sale price greater than 0.";
pub(super) const NOT_COMPUTED: &str = "Press Enter on a price field (or F5) to compute the ratio.";

pub(super) fn search_outcome_text(theme: &Theme, outcome: Option<&SearchOutcome>) -> Text<'static> {
    match outcome {
        None => Text::from(Line::styled(
            "Press Enter in the address field to build a search link.",
            theme.value_style(ValueStyle::Dim),
        )),
        Some(SearchOutcome::MissingAddress) => {
            Text::from(Line::styled(MISSING_ADDRESS, theme.warn_style()))
        }
        Some(SearchOutcome::Link(url)) => Text::from(vec![
            Line::styled(LINK_READY, theme.ok_style()),
            Line::styled(url.clone(), theme.link_style()),
        ]),
    }
}

/// Raw digits as typed, then the grouped echo.
pub(super) fn amount_lines(theme: &Theme, value: u64) -> Text<'static> {
    Text::from(vec![
        Line::styled(value.to_string(), theme.value_style(ValueStyle::Normal)),
        Line::from(vec![
            Span::styled("➡ ", theme.key_style()),
            Span::styled(format_thousands(value), theme.value_style(ValueStyle::Important)),
        ]),
    ])
}

/// (title, value) for the three metric cards.
pub(super) fn metric_cards(assessment: &Assessment) -> [(&'static str, String); 3] {
    [
        ("Jeonse ratio", format_ratio(assessment.ratio)),
        ("Sale price", format_thousands(assessment.input.sale_price)),
        ("Deposit", format_thousands(assessment.input.deposit)),
    ]
}

pub(super) fn status_line(theme: &Theme, assessment: &Assessment) -> Line<'static> {
    Line::from(vec![Span::styled(
        format!("Current status: {}", assessment.label),
        theme.risk_style(assessment.color),
    )])
}

pub(super) fn footer_line(theme: &Theme, step: u64, confirm_quit: bool) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!(
            "Tab/Shift+Tab=field  Enter=search or compute  F5=compute  ↑/↓=±{}  Ctrl+U=clear  Esc=quit  ",
            format_thousands(step)
        ),
        theme.help_style(),
    )];
    if confirm_quit {
        spans.push(Span::styled(
            "Press Esc again to quit, any other key to stay  ",
            theme.warn_style(),
        ));
    }
    Line::from(spans)
}
