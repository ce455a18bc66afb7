//! Drawing: header, lanes, cards, footer, and the modal overlays.
//!
//! Every rectangle that matters to the pointer is registered in the
//! [`RegionFrame`] as it is painted, outermost first, so the controller's hit
//! path walks match what is actually on screen.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;
use uuid::Uuid;

use ticketrail::commands::MessageLevel;
use ticketrail::controller::BoardApp;
use ticketrail::form::{FormField, OrderForm, TextField};
use ticketrail::model::{Column, Order};
use ticketrail::overlay::Overlay;
use ticketrail::regions::{Marker, RegionFrame};

use crate::truncate_to_width;

static BOARD_KEYS: Lazy<Vec<(&str, &str)>> = Lazy::new(|| {
    vec![
        ("a", "add"),
        ("e", "edit"),
        ("d", "delete"),
        ("[ ]", "move"),
        ("h j k l", "navigate"),
        ("?", "help"),
        ("q", "quit"),
    ]
});

pub fn draw(frame: &mut Frame, app: &BoardApp, regions: &mut RegionFrame) {
    regions.reset();
    let area = frame.area();
    let rows = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(5),
        Constraint::Length(2),
    ])
    .split(area);

    draw_header(frame, rows[0], app);
    draw_board(frame, rows[1], app, regions);
    draw_footer(frame, rows[2], app);

    match app.overlay.current() {
        Some(Overlay::Add { form }) => {
            draw_form_overlay(frame, area, "New order", form, false, regions)
        }
        Some(Overlay::Edit { form, .. }) => {
            draw_form_overlay(frame, area, "Edit order", form, true, regions)
        }
        Some(Overlay::ConfirmDelete { id }) => draw_confirm_overlay(frame, area, app, *id, regions),
        Some(Overlay::Help) => draw_help_overlay(frame, area, regions),
        None => {}
    }
}

fn dim() -> Style {
    Style::default().add_modifier(Modifier::DIM)
}

fn draw_header(frame: &mut Frame, area: Rect, app: &BoardApp) {
    let count = app.api.store().len();
    let line = Line::from(vec![
        Span::styled(
            " ticketrail ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                " {} order{} on the board",
                count,
                if count == 1 { "" } else { "s" }
            ),
            dim(),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &BoardApp, regions: &mut RegionFrame) {
    regions.register(area, Marker::Board);
    let lanes = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);
    let drag = app.api.dragging();
    let now = Utc::now();

    for column in Column::ALL {
        let lane_area = lanes[column.position()];
        regions.register(lane_area, Marker::Lane(column));

        let ids = app.projection.lane(column);
        let border_style = if drag.source.is_some() && drag.over == Some(column) {
            Style::default().fg(Color::Green)
        } else if app.focus.lane == column {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .title(format!(" {} ({}) ", column.label(), ids.len()))
            .border_style(border_style);
        let inner = block.inner(lane_area);
        frame.render_widget(block, lane_area);

        draw_lane_cards(frame, inner, app, column, ids, now, regions);
    }
}

fn draw_lane_cards(
    frame: &mut Frame,
    inner: Rect,
    app: &BoardApp,
    column: Column,
    ids: &[Uuid],
    now: DateTime<Utc>,
    regions: &mut RegionFrame,
) {
    let mut y = inner.y;
    for (idx, id) in ids.iter().enumerate() {
        if y + 2 > inner.bottom() {
            if y < inner.bottom() {
                let more = ids.len() - idx;
                frame.render_widget(
                    Paragraph::new(format!("… {} more", more)).style(dim()),
                    Rect::new(inner.x, y, inner.width, 1),
                );
            }
            break;
        }
        let Some(order) = app.api.order(id) else {
            continue;
        };
        let card_area = Rect::new(inner.x, y, inner.width, 2);
        regions.register(card_area, Marker::Card(*id));
        draw_card(frame, card_area, app, order, column, idx, now);
        y += 2;
    }
}

fn draw_card(
    frame: &mut Frame,
    area: Rect,
    app: &BoardApp,
    order: &Order,
    column: Column,
    idx: usize,
    now: DateTime<Utc>,
) {
    let selected = app.focus.lane == column && app.focus.index == idx;
    let dragging = app.api.dragging().source == Some(order.id);

    let title_style = if dragging {
        Style::default().add_modifier(Modifier::DIM | Modifier::ITALIC)
    } else if selected {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let prefix = if selected { "▍" } else { " " };
    let width = area.width as usize;

    let title = truncate_to_width(&format!("{}{}", prefix, order.title), width);
    let meta = truncate_to_width(
        &format!("  table {} · {}", order.table, format_age(order.created_at, now)),
        width,
    );

    let lines = vec![
        Line::styled(title, title_style),
        Line::styled(meta, dim()),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn format_age(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(created_at);
    timeago::Formatter::new().convert(elapsed.to_std().unwrap_or_default())
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &BoardApp) {
    let rows = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(area);

    let mut spans = Vec::new();
    for (key, label) in BOARD_KEYS.iter() {
        spans.push(Span::styled(*key, Style::default().fg(Color::Cyan)));
        spans.push(Span::raw(format!(" {}   ", label)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), rows[0]);

    if let Some(notice) = app.notice() {
        let style = match notice.level {
            MessageLevel::Info => dim(),
            MessageLevel::Success => Style::default().fg(Color::Green),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
            MessageLevel::Error => Style::default().fg(Color::Red),
        };
        frame.render_widget(Paragraph::new(notice.text.clone()).style(style), rows[1]);
    }
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

fn field_line(label: &str, field: &TextField, focused: bool) -> Line<'static> {
    let value = if focused {
        field.with_caret()
    } else {
        field.value().to_string()
    };
    Line::from(vec![
        Span::styled(format!("{:<8}", label), label_style(focused)),
        Span::raw(value),
    ])
}

fn label_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        dim()
    }
}

fn draw_form_overlay(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    form: &OrderForm,
    is_edit: bool,
    regions: &mut RegionFrame,
) {
    let height = if form.has_column_field() { 9 } else { 7 };
    let popup = centered_rect(area, 46, height);
    regions.register(popup, Marker::Overlay);
    frame.render_widget(Clear, popup);

    let block = Block::bordered()
        .title(format!(" {} ", title))
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let mut lines = vec![
        field_line("Title", &form.title, form.focus == FormField::Title),
        Line::raw(""),
        field_line("Table", &form.table, form.focus == FormField::Table),
    ];
    if form.has_column_field() {
        let focused = form.focus == FormField::Column;
        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::styled(format!("{:<8}", "Column"), label_style(focused)),
            Span::styled(
                format!("‹ {} ›", form.column.label()),
                if focused {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default()
                },
            ),
        ]));
    }
    lines.push(Line::raw(""));
    let hint = if is_edit {
        "Enter save   Tab field   Ctrl-D delete   Esc cancel"
    } else {
        "Enter save   Tab field   Esc cancel"
    };
    lines.push(Line::styled(hint, dim()));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_confirm_overlay(
    frame: &mut Frame,
    area: Rect,
    app: &BoardApp,
    id: Uuid,
    regions: &mut RegionFrame,
) {
    let popup = centered_rect(area, 40, 6);
    regions.register(popup, Marker::Overlay);
    frame.render_widget(Clear, popup);

    let block = Block::bordered()
        .title(" Delete order? ")
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let title = app
        .api
        .order(&id)
        .map(|order| order.title.clone())
        .unwrap_or_else(|| "(already gone)".to_string());
    let lines = vec![
        Line::raw(truncate_to_width(&title, inner.width as usize)),
        Line::raw(""),
        Line::styled("y delete   n keep", dim()),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_help_overlay(frame: &mut Frame, area: Rect, regions: &mut RegionFrame) {
    let popup = centered_rect(area, 56, 15);
    regions.register(popup, Marker::Overlay);
    frame.render_widget(Clear, popup);

    let block = Block::bordered()
        .title(" Help ")
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let key = |k: &'static str, what: &'static str| -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("  {:<10}", k), Style::default().fg(Color::Cyan)),
            Span::raw(what),
        ])
    };
    let lines = vec![
        Line::raw("Drag a card with the mouse and drop it on a column"),
        Line::raw("to change its status."),
        Line::raw(""),
        key("a", "add a new order"),
        key("e / Enter", "edit the selected order"),
        key("d", "delete the selected order"),
        key("[ / ]", "move the selected order between columns"),
        key("h j k l", "change column / selection (arrows too)"),
        key("?", "toggle this help"),
        key("q", "quit"),
        Line::raw(""),
        Line::styled("Esc closes any open window.", dim()),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
