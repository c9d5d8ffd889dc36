use jeonse_core::Assessment;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Points};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use super::app::{AppState, Focus};
use super::format::{
    amount_lines, footer_line, metric_cards, search_outcome_text, status_line, INVALID_PRICE,
    NOT_COMPUTED,
};
use super::ring::ring_points;
use super::text::{display_width, tail_to_width};
use super::theme::{rgb, Theme, ValueStyle};

pub(crate) fn draw_ui(frame: &mut Frame, app: &AppState) {
    let theme = Theme::dark();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let header = Paragraph::new(Line::from(vec![
        Span::styled("Jeonse Guard", theme.accent_style()),
        Span::styled(
            "  jeonse ratio and risk from sale price and deposit",
            theme.help_style(),
        ),
    ]))
    .block(theme.block("전세가아드"));
    frame.render_widget(header, chunks[0]);

    draw_address(frame, app, &theme, chunks[1]);

    let outcome = Paragraph::new(search_outcome_text(&theme, app.search.as_ref()))
        .wrap(Wrap { trim: false });
    frame.render_widget(outcome, chunks[2]);

    draw_amounts(frame, app, &theme, chunks[3]);

    match &app.assessment {
        None => {
            let hint = Paragraph::new(Line::styled(
                NOT_COMPUTED,
                theme.value_style(ValueStyle::Dim),
            ))
            .block(theme.block("2. Result"));
            frame.render_widget(hint, chunks[4]);
        }
        Some(assessment) if !assessment.is_defined() => {
            let warning = Paragraph::new(Line::styled(INVALID_PRICE, theme.warn_style()))
                .block(theme.block("2. Result"));
            frame.render_widget(warning, chunks[4]);
        }
        Some(assessment) => {
            draw_metrics(frame, assessment, &theme, chunks[4]);
            let status = Paragraph::new(status_line(&theme, assessment))
                .block(theme.emphasis_block(assessment.color, assessment.background));
            frame.render_widget(status, chunks[5]);
            draw_ring(frame, assessment, &theme, chunks[6]);
        }
    }

    let footer = Paragraph::new(footer_line(&theme, app.step(), app.confirm_quit))
        .block(theme.block("Controls"));
    frame.render_widget(footer, chunks[7]);
}

fn draw_address(frame: &mut Frame, app: &AppState, theme: &Theme, area: Rect) {
    let focused = app.focus == Focus::Address;
    let block = theme.field_block("0. Apartment address or complex name", focused);
    let inner = block.inner(area);
    let visible = tail_to_width(&app.address, inner.width.saturating_sub(1) as usize);
    let field = Paragraph::new(visible)
        .style(theme.value_style(ValueStyle::Normal))
        .block(block);
    frame.render_widget(field, area);
    if focused {
        let x = inner.x + display_width(visible) as u16;
        frame.set_cursor_position((x, inner.y));
    }
}

fn draw_amounts(frame: &mut Frame, app: &AppState, theme: &Theme, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    let fields = [
        (Focus::SalePrice, "1. Sale price", columns[0]),
        (Focus::Deposit, "1. Deposit", columns[1]),
    ];
    for (field, title, rect) in fields {
        let value = app.amount(field).unwrap_or_default();
        let focused = app.focus == field;
        let block = theme.field_block(title, focused);
        let inner = block.inner(rect);
        frame.render_widget(Paragraph::new(amount_lines(theme, value)).block(block), rect);
        if focused {
            let x = inner.x + value.to_string().len() as u16;
            frame.set_cursor_position((x.min(inner.right().saturating_sub(1)), inner.y));
        }
    }
}

fn draw_metrics(frame: &mut Frame, assessment: &Assessment, theme: &Theme, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);
    for (idx, (title, value)) in metric_cards(assessment).into_iter().enumerate() {
        let style = if idx == 0 {
            theme.risk_style(assessment.color)
        } else {
            theme.value_style(ValueStyle::Important)
        };
        let card = Paragraph::new(Line::styled(value, style)).block(theme.block(title));
        frame.render_widget(card, columns[idx]);
    }
}

fn draw_ring(frame: &mut Frame, assessment: &Assessment, theme: &Theme, area: Rect) {
    let block = theme.block("3. Chart");
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    // A terminal cell is about twice as tall as it is wide.
    let width = inner.width.min(inner.height.saturating_mul(2));
    let ring_area = Rect {
        x: inner.x + (inner.width - width) / 2,
        y: inner.y,
        width,
        height: inner.height,
    };

    let chart = &assessment.chart;
    let points = ring_points(chart);
    let filled_color = rgb(chart.segments[0].color);
    let track_color = rgb(chart.segments[1].color);
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-1.0, 1.0])
        .y_bounds([-1.0, 1.0])
        .paint(|ctx| {
            ctx.draw(&Points {
                coords: &points.track,
                color: track_color,
            });
            ctx.draw(&Points {
                coords: &points.filled,
                color: filled_color,
            });
        });
    frame.render_widget(canvas, ring_area);

    let offset = (f64::from(ring_area.height.saturating_sub(1)) * (1.0 - chart.annotation.y))
        .round()
        .clamp(0.0, f64::from(ring_area.height.saturating_sub(1))) as u16;
    let label_area = Rect {
        x: ring_area.x,
        y: ring_area.y + offset,
        width: ring_area.width,
        height: 1,
    };
    let label = Paragraph::new(Line::styled(
        chart.annotation.text.clone(),
        theme.risk_style(chart.annotation.color),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(label, label_area);
}
