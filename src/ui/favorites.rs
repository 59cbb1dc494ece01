//! Favorites Page UI Module
//!
//! The starred snippets as a table, filtered by the scoped (search +
//! level) filter. The pool itself is owned by the favorites store; this
//! page only narrows it.

use crate::app::App;
use crate::ui::components::{render_bottom_bar, truncate_to_width};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    widgets::{Block, BorderType, Cell, Paragraph, Row, Table, TableState, Widget},
};

pub fn render(frame: &mut Frame, app: &App) {
    let palette = app.theme.palette();
    let main_area = frame.area();

    let block = Block::bordered()
        .title(" ★ Favorites ")
        .title_alignment(Alignment::Center)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(palette.love));

    let inner_area = block.inner(main_area);
    block.render(main_area, frame.buffer_mut());

    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1), // Filter status
        Constraint::Length(3), // Bottom bar
    ])
    .split(inner_area);

    let favorites = app.favorite_snippets();

    if favorites.is_empty() {
        render_empty_state(frame, chunks[0], app);
    } else {
        render_table(frame, chunks[0], app, &favorites);
    }

    render_status(frame, chunks[1], app, favorites.len());
    render_bottom_bar(frame, chunks[2], app);
}

fn render_empty_state(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();

    let message = if app.favorites.is_empty() {
        "No favorites yet. Press 'f' on a snippet in the library to star it."
    } else {
        "No favorites match the current filters."
    };

    Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(palette.muted))
        .render(area, frame.buffer_mut());
}

fn render_table(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    favorites: &[crate::catalog::Snippet],
) {
    let palette = app.theme.palette();

    let header = Row::new(vec![
        Cell::from("Title").style(Style::default().fg(palette.iris).bold()),
        Cell::from("Language").style(Style::default().fg(palette.iris).bold()),
        Cell::from("Level").style(Style::default().fg(palette.iris).bold()),
        Cell::from("Tags").style(Style::default().fg(palette.iris).bold()),
    ]);

    let rows: Vec<Row> = favorites
        .iter()
        .map(|snippet| {
            let tags = if snippet.tags.is_empty() {
                "-".to_string()
            } else {
                snippet
                    .tags
                    .iter()
                    .map(|tag| format!("#{tag}"))
                    .collect::<Vec<_>>()
                    .join(" ")
            };

            Row::new(vec![
                Cell::from(truncate_to_width(snippet.title, 38))
                    .style(Style::default().fg(palette.text)),
                Cell::from(format!(
                    "{} {}",
                    snippet.language.icon(),
                    snippet.language.short_name()
                ))
                .style(Style::default().fg(palette.foam)),
                Cell::from(format!(
                    "{} {}",
                    snippet.level.icon(),
                    snippet.level.display_name()
                ))
                .style(Style::default().fg(palette.pine)),
                Cell::from(tags).style(Style::default().fg(palette.gold)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        &[
            Constraint::Percentage(40),
            Constraint::Percentage(15),
            Constraint::Percentage(18),
            Constraint::Percentage(27),
        ],
    )
    .header(header)
    .row_highlight_style(
        Style::default()
            .fg(palette.love)
            .bg(palette.highlight_low)
            .bold(),
    )
    .highlight_symbol("▶ ")
    .column_spacing(1);

    let mut state = TableState::default();
    state.select(Some(app.selected_favorite.min(favorites.len() - 1)));
    frame.render_stateful_widget(table, area, &mut state);
}

fn render_status(frame: &mut Frame, area: Rect, app: &App, shown: usize) {
    let palette = app.theme.palette();
    let query = &app.favorites_filter.query;

    let mut status = format!(
        " {} starred │ Level: {}",
        app.favorites.len(),
        app.favorites_filter.level().label()
    );

    if !query.raw().is_empty() {
        status.push_str(&format!("  Search: \"{}\"", query.raw()));
        if query.is_pending() {
            status.push_str(" (applying…)");
        }
    }

    status.push_str(&format!("  - {shown} shown"));

    Paragraph::new(status)
        .style(Style::default().fg(palette.muted))
        .render(area, frame.buffer_mut());
}
