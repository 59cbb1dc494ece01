//! About Page UI Module

use crate::app::App;
use crate::ui::components::render_bottom_bar;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};

pub fn render(frame: &mut Frame, app: &App) {
    let palette = app.theme.palette();
    let main_area = frame.area();

    let block = Block::bordered()
        .title("  About snipdex ")
        .title_alignment(Alignment::Center)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(palette.highlight_high));

    let inner_area = block.inner(main_area);
    block.render(main_area, frame.buffer_mut());

    let chunks = Layout::vertical([Constraint::Fill(1), Constraint::Length(3)]).split(inner_area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "snipdex - a curated code-snippet library for the terminal",
            Style::default().fg(palette.rose).bold(),
        )),
        Line::from(""),
        Line::from("A read-only shelf of TypeScript, JavaScript, React, CSS and HTML"),
        Line::from("patterns, browsable by category and skill level, searchable by"),
        Line::from("title, description and tags."),
        Line::from(""),
        Line::from(vec![
            Span::styled("★ ", Style::default().fg(palette.love)),
            Span::raw("Favorites are yours: stored locally, never synced anywhere."),
        ]),
        Line::from(vec![
            Span::styled("󰍉 ", Style::default().fg(palette.foam)),
            Span::raw("Search is debounced - results settle 200ms after you stop typing."),
        ]),
        Line::from(vec![
            Span::styled(" ", Style::default().fg(palette.iris)),
            Span::raw("Snippet content is compiled into the binary; there is nothing to"),
        ]),
        Line::from("   configure and no network access at all."),
        Line::from(""),
        Line::from(Span::styled(
            "Press '?' anywhere for the full keyboard reference.",
            Style::default().fg(palette.muted).italic(),
        )),
    ];

    Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .style(Style::default().fg(palette.text))
        .render(chunks[0], frame.buffer_mut());

    render_bottom_bar(frame, chunks[1], app);
}
