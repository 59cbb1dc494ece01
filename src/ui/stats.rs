//! Statistics Page UI Module
//!
//! Renders the catalog's aggregate counts: totals, a per-category bar
//! breakdown and the skill-level split.

use crate::app::App;
use crate::ui::components::render_bottom_bar;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget},
};

const BAR_WIDTH: usize = 30;

pub fn render(frame: &mut Frame, app: &App) {
    let palette = app.theme.palette();
    let main_area = frame.area();

    let block = Block::bordered()
        .title(" 󰄨 Library Statistics ")
        .title_alignment(Alignment::Center)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(palette.highlight_high));

    let inner_area = block.inner(main_area);
    block.render(main_area, frame.buffer_mut());

    let chunks = Layout::vertical([Constraint::Fill(1), Constraint::Length(3)]).split(inner_area);

    let content_area = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(64),
        Constraint::Fill(1),
    ])
    .split(chunks[0])[1];

    render_breakdown(frame, content_area, app);
    render_bottom_bar(frame, chunks[1], app);
}

fn render_breakdown(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();
    let stats = app.catalog.stats();

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Total snippets: ", Style::default().fg(palette.subtle)),
        Span::styled(stats.total.to_string(), Style::default().fg(palette.text).bold()),
        Span::styled("   Categories: ", Style::default().fg(palette.subtle)),
        Span::styled(
            stats.categories.to_string(),
            Style::default().fg(palette.text).bold(),
        ),
        Span::styled("   Favorites: ", Style::default().fg(palette.subtle)),
        Span::styled(
            app.favorites.len().to_string(),
            Style::default().fg(palette.love).bold(),
        ),
    ]));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "By category",
        Style::default().fg(palette.iris).bold(),
    )));
    for entry in &stats.by_category {
        lines.push(bar_line(
            entry.category,
            entry.count,
            stats.total,
            palette.foam,
            app,
        ));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "By skill level",
        Style::default().fg(palette.iris).bold(),
    )));
    lines.push(bar_line(
        "beginner",
        stats.by_level.beginner,
        stats.total,
        palette.pine,
        app,
    ));
    lines.push(bar_line(
        "intermediate",
        stats.by_level.intermediate,
        stats.total,
        palette.gold,
        app,
    ));
    lines.push(bar_line(
        "advanced",
        stats.by_level.advanced,
        stats.total,
        palette.love,
        app,
    ));

    let featured = app.catalog.featured().len();
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Featured picks: ", Style::default().fg(palette.subtle)),
        Span::styled(featured.to_string(), Style::default().fg(palette.gold).bold()),
    ]));

    Paragraph::new(lines).render(area, frame.buffer_mut());
}

/// `label ▇▇▇▇▇  n` scaled so the largest possible value fills BAR_WIDTH.
fn bar_line(
    label: &str,
    count: usize,
    total: usize,
    color: ratatui::style::Color,
    app: &App,
) -> Line<'static> {
    let palette = app.theme.palette();
    let filled = if total == 0 {
        0
    } else {
        (count * BAR_WIDTH).div_ceil(total)
    };

    Line::from(vec![
        Span::styled(
            format!("  {:<14}", label),
            Style::default().fg(palette.text),
        ),
        Span::styled("▇".repeat(filled), Style::default().fg(color)),
        Span::styled(
            format!(" {count}"),
            Style::default().fg(palette.subtle),
        ),
    ])
}
