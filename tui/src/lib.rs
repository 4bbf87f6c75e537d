//! Terminal host for Breaker using ratatui.
//!
//! The page is a title bar, the rendered component tree, and a status bar.
//! Everything outside the tree is drawn by the host and survives whatever
//! happens inside it.

mod app;
mod input;
mod theme;

pub use app::{PageApp, TreeFactory};
pub use input::{InputPump, apply_key, handle_events};
pub use theme::{Glyphs, Palette, UiOptions, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use breaker_core::{ActionId, Node};

const PAGE_TITLE: &str = " Breaker ";
const PAGE_SUBTITLE: &str = "error boundary demo";

/// Main draw function
pub fn draw(frame: &mut Frame, app: &PageApp) {
    let options = app.options();
    let palette = palette(options);
    let glyphs = glyphs(options);

    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(3),    // Page content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_title(frame, chunks[0], &palette);
    draw_content(frame, app, chunks[1], &palette, &glyphs);
    draw_status_bar(frame, app, chunks[2], &palette, &glyphs);
}

fn draw_title(frame: &mut Frame, area: Rect, palette: &Palette) {
    let title = Line::from(vec![
        Span::styled(
            PAGE_TITLE,
            Style::default()
                .fg(palette.bg_dark)
                .bg(palette.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(PAGE_SUBTITLE, Style::default().fg(palette.text_muted)),
    ]);
    frame.render_widget(Paragraph::new(title), area);
}

fn draw_content(
    frame: &mut Frame,
    app: &PageApp,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.bg_border))
        .padding(Padding::horizontal(1));

    let lines = match app.frame() {
        Some(node) => node_lines(node, app.focused_action(), palette, glyphs),
        None => vec![Line::from(Span::styled(
            "The page failed to render.",
            styles::heading(palette),
        ))],
    };

    let content = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(content, area);
}

/// Flatten a rendered node tree into styled lines, one block element per line.
#[must_use]
pub fn node_lines(
    node: &Node,
    focused: Option<ActionId>,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    push_node_lines(node, focused, palette, glyphs, &mut lines);
    lines
}

fn push_node_lines(
    node: &Node,
    focused: Option<ActionId>,
    palette: &Palette,
    glyphs: &Glyphs,
    lines: &mut Vec<Line<'static>>,
) {
    match node {
        Node::Empty => {}
        Node::Heading(text) => {
            lines.push(Line::from(Span::styled(
                text.clone(),
                styles::heading(palette),
            )));
            lines.push(Line::from(""));
        }
        Node::Text(text) => {
            lines.push(Line::from(Span::styled(text.clone(), styles::body(palette))));
        }
        Node::Button { label, action } => {
            let is_focused = focused == Some(*action);
            let (marker, style) = if is_focused {
                (glyphs.focus, styles::button_focused(palette))
            } else {
                (" ", styles::button(palette))
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{marker} "), styles::button(palette)),
                Span::styled(
                    format!("{}{label}{}", glyphs.button_open, glyphs.button_close),
                    style,
                ),
            ]));
        }
        Node::Column(children) => {
            for child in children {
                push_node_lines(child, focused, palette, glyphs, lines);
            }
        }
    }
}

fn draw_status_bar(
    frame: &mut Frame,
    app: &PageApp,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let hints = [
        ("Enter", "press"),
        ("Tab", "focus"),
        ("r", "refresh"),
        ("q", "quit"),
    ];

    let mut spans = vec![Span::raw(" ")];
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(
                format!(" {} ", glyphs.separator),
                Style::default().fg(palette.text_muted),
            ));
        }
        spans.push(Span::styled(*key, styles::key_hint(palette)));
        spans.push(Span::styled(
            format!(" {action}"),
            Style::default().fg(palette.text_muted),
        ));
    }

    let counters = format!(
        "renders {} {} refreshes {} ",
        app.root().passes(),
        glyphs.separator,
        app.refreshes()
    );
    let used: usize = spans.iter().map(|span| span.content.width()).sum();
    let padding = usize::from(area.width).saturating_sub(used + counters.width());
    spans.push(Span::raw(" ".repeat(padding)));
    spans.push(Span::styled(counters, Style::default().fg(palette.text_muted)));

    let status = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(palette.bg_highlight));
    frame.render_widget(status, area);
}
