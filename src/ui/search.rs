//! Floating Search Dialog
//!
//! Rendered on top of the library or favorites page while search input is
//! active. Echoes the raw query on every keystroke; the result count
//! below reflects only the applied (debounced) query, with a pending
//! indicator in between.

use crate::app::{App, AppState};
use crate::ui::components::centered_popup;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Widget},
};

pub fn render_floating_search(frame: &mut Frame, app: &App) {
    let palette = app.theme.palette();
    let area = frame.area();
    let popup_area = centered_popup(area, 64, 7);

    Clear.render(popup_area, frame.buffer_mut());

    let scope = match app.state {
        AppState::Favorites => " 󰍉 Search Favorites ",
        _ => " 󰍉 Search Library ",
    };

    let block = Block::bordered()
        .title(scope)
        .title_alignment(Alignment::Center)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(palette.foam));

    let inner_area = block.inner(popup_area);
    block.render(popup_area, frame.buffer_mut());

    let chunks = Layout::vertical([
        Constraint::Length(1), // Input line
        Constraint::Length(1), // Status line
        Constraint::Length(1),
        Constraint::Length(1), // Help line
    ])
    .split(inner_area);

    let query = app.active_query();

    let input_line = Line::from(vec![
        Span::styled(" › ", Style::default().fg(palette.love).bold()),
        Span::styled(query.raw().to_string(), Style::default().fg(palette.text)),
        Span::styled("▌", Style::default().fg(palette.love)),
    ]);
    Paragraph::new(input_line).render(chunks[0], frame.buffer_mut());

    let status = if query.is_pending() {
        Span::styled(" typing…", Style::default().fg(palette.gold))
    } else if query.is_active() {
        let count = match app.state {
            AppState::Favorites => app.favorite_snippets().len(),
            _ => app.visible_snippets().len(),
        };
        Span::styled(
            format!(" {count} matching snippets"),
            Style::default().fg(palette.pine),
        )
    } else {
        Span::styled(
            " Matches titles, descriptions and tags",
            Style::default().fg(palette.muted),
        )
    };
    Paragraph::new(Line::from(status)).render(chunks[1], frame.buffer_mut());

    Paragraph::new(" [⏎] Apply now   [Esc] Cancel search")
        .style(Style::default().fg(palette.muted))
        .render(chunks[3], frame.buffer_mut());
}
