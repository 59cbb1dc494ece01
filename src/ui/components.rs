//! UI Components and Layout Module
//!
//! Reusable pieces shared by every page: the bottom navigation bar with
//! breadcrumbs and context-aware shortcuts, centered popup geometry,
//! message toasts, the help overlay, and display-width-aware truncation.

use crate::app::{App, AppState, InputMode};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Renders the bottom navigation bar: breadcrumbs on the left, the
/// shortcuts that currently apply on the right.
pub fn render_bottom_bar(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();
    let navbar_chunks = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(area);

    let left_content = Paragraph::new(breadcrumbs(app))
        .alignment(Alignment::Left)
        .style(Style::default().fg(palette.subtle))
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(palette.highlight_high)),
        );

    let right_content = Paragraph::new(context_shortcuts(app))
        .alignment(Alignment::Right)
        .style(Style::default().fg(palette.muted))
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(palette.highlight_high)),
        );

    left_content.render(navbar_chunks[0], frame.buffer_mut());
    right_content.render(navbar_chunks[1], frame.buffer_mut());
}

fn context_shortcuts(app: &App) -> String {
    let back_hint = if app.can_go_back() {
        " [⌫] Back │"
    } else {
        ""
    };

    match (app.state, app.input_mode) {
        (_, InputMode::Search) => " [⏎] Apply │ [Esc] Cancel ".to_string(),
        (_, InputMode::HelpMenu) => " [Esc] Close ".to_string(),
        (AppState::StartPage, _) => {
            " [↑↓] Navigate │ [⏎] Select │ [s] Library │ [f] Favorites │ [q] Quit ".to_string()
        }
        (AppState::Library, _) => format!(
            "{} [↑↓] Snippet │ [←→] Category │ [/] Search │ [l] Level │ [f] ★ │ [?] Help ",
            back_hint
        ),
        (AppState::Favorites, _) => format!(
            "{} [↑↓] Snippet │ [/] Search │ [l] Level │ [f] Unstar │ [?] Help ",
            back_hint
        ),
        _ => format!("{} [h] Home │ [q] Quit ", back_hint),
    }
}

/// Breadcrumb trail showing where the user is, plus the active filter
/// scope on the library page.
fn breadcrumbs(app: &App) -> Line<'static> {
    let palette = app.theme.palette();
    let mut spans = Vec::new();

    spans.push(Span::styled(
        " 󰋜 snipdex ",
        Style::default().fg(palette.base).bg(palette.iris),
    ));

    let page = match app.state {
        AppState::StartPage => None,
        AppState::Library => Some(" Library "),
        AppState::Favorites => Some(" ★ Favorites "),
        AppState::Stats => Some(" Statistics "),
        AppState::About => Some(" About "),
    };

    if let Some(page) = page {
        spans.push(Span::styled(" ", Style::default().fg(palette.muted)));
        spans.push(Span::styled(
            page,
            Style::default().fg(palette.text).bg(palette.highlight_low),
        ));
    }

    if app.state == AppState::Library {
        spans.push(Span::styled(" ", Style::default().fg(palette.muted)));
        spans.push(Span::styled(
            format!(" {} ", app.filter.category().label()),
            Style::default().fg(palette.foam),
        ));
    }

    Line::from(spans)
}

/// Geometry for a centered popup, clamped to the frame.
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    Rect::new(
        (area.width.saturating_sub(width)) / 2,
        (area.height.saturating_sub(height)) / 2,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Truncates to a display-cell limit, appending an ellipsis when cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width.saturating_sub(1) {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// One-line toast rendered over the bottom edge: errors in red, success
/// in green. Cleared by the next state change.
pub fn render_messages(frame: &mut Frame, app: &App) {
    let palette = app.theme.palette();
    let (text, color) = match (&app.error_message, &app.success_message) {
        (Some(error), _) => (error.as_str(), palette.love),
        (None, Some(success)) => (success.as_str(), palette.pine),
        (None, None) => return,
    };

    let area = frame.area();
    if area.height < 4 {
        return;
    }

    let width = (text.width() as u16 + 4).min(area.width);
    let toast_area = Rect::new(
        (area.width.saturating_sub(width)) / 2,
        area.height - 4,
        width,
        3,
    );

    Clear.render(toast_area, frame.buffer_mut());
    Paragraph::new(truncate_to_width(text, width.saturating_sub(4) as usize))
        .alignment(Alignment::Center)
        .style(Style::default().fg(color))
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(color)),
        )
        .render(toast_area, frame.buffer_mut());
}

/// Full keyboard reference, shown over any page with '?'.
pub fn render_help_overlay(frame: &mut Frame, app: &App) {
    let palette = app.theme.palette();
    let area = frame.area();
    let popup_area = centered_popup(area, 60, 20);

    Clear.render(popup_area, frame.buffer_mut());

    let block = Block::bordered()
        .title("  Keyboard Reference ")
        .title_alignment(Alignment::Center)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(palette.iris));

    let inner_area = block.inner(popup_area);
    block.render(popup_area, frame.buffer_mut());

    let entries: [(&str, &str); 14] = [
        ("↑/↓, j/k", "Move through the snippet list"),
        ("←/→, [/]", "Previous / next category"),
        ("/", "Open the search box"),
        ("l", "Cycle the skill-level filter"),
        ("f", "Star / unstar the selected snippet"),
        ("J/K", "Scroll the code preview"),
        ("⏎", "Apply a typed search immediately"),
        ("Esc", "Cancel search, close overlays"),
        ("T", "Toggle the color theme"),
        ("⌫", "Back to the previous page"),
        ("h", "Home"),
        ("s/f/t/i", "Jump to Library / Favorites / Stats / About"),
        ("?", "This overlay"),
        ("q", "Quit"),
    ];

    let lines: Vec<Line> = entries
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(
                    format!("  {:<10}", key),
                    Style::default().fg(palette.gold).bold(),
                ),
                Span::styled(*action, Style::default().fg(palette.text)),
            ])
        })
        .collect();

    Paragraph::new(lines)
        .style(Style::default().fg(palette.text))
        .render(inner_area, frame.buffer_mut());
}
