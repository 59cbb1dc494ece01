//! Start Page UI Module
//!
//! The landing screen and navigation hub: ASCII title, the page menu, a
//! strip of featured snippets, and a contextual description for the
//! highlighted menu item.

use crate::app::{App, MENU_ITEMS};
use crate::ui::components::render_bottom_bar;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, List, ListItem, ListState, Paragraph, Widget},
};

/// Main rendering function for the start page
///
/// Lays out the title, menu, featured strip and bottom bar. The featured
/// strip surfaces the snippets carrying an editorial note so the library
/// has a front door beyond raw browsing.
pub fn render(frame: &mut Frame, app: &App) {
    let palette = app.theme.palette();
    let main_area = frame.area();

    let block = Block::bordered()
        .title(" snipdex - Code Snippet Library ")
        .title_alignment(Alignment::Center)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(palette.highlight_high));

    let inner_area = block.inner(main_area);
    block.render(main_area, frame.buffer_mut());

    let main_chunks = Layout::vertical([
        Constraint::Fill(1),   // Title + menu
        Constraint::Length(4), // Featured strip
        Constraint::Length(3), // Description
        Constraint::Length(3), // Bottom bar
    ])
    .split(inner_area);

    let content_area = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(62),
        Constraint::Fill(1),
    ])
    .split(main_chunks[0])[1];

    let content_chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(7),  // Title
        Constraint::Length(2),  // Tagline
        Constraint::Length(11), // Menu
        Constraint::Fill(1),
    ])
    .split(content_area);

    render_title(frame, content_chunks[1], app);
    render_tagline(frame, content_chunks[2], app);
    render_menu(frame, content_chunks[3], app);
    render_featured(frame, main_chunks[1], app);
    render_description(frame, main_chunks[2], app);
    render_bottom_bar(frame, main_chunks[3], app);
}

fn render_title(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();
    let title = Paragraph::new(ascii_title())
        .alignment(Alignment::Center)
        .style(Style::default().fg(palette.rose).bold());

    title.render(area, frame.buffer_mut());
}

fn ascii_title() -> String {
    r#"
███████╗███╗   ██╗██╗██████╗ ██████╗ ███████╗██╗  ██╗
██╔════╝████╗  ██║██║██╔══██╗██╔══██╗██╔════╝╚██╗██╔╝
███████╗██╔██╗ ██║██║██████╔╝██║  ██║█████╗   ╚███╔╝
╚════██║██║╚██╗██║██║██╔═══╝ ██║  ██║██╔══╝   ██╔██╗
███████║██║ ╚████║██║██║     ██████╔╝███████╗██╔╝ ██╗
╚══════╝╚═╝  ╚═══╝╚═╝╚═╝     ╚═════╝ ╚══════╝╚═╝  ╚═╝
"#
    .to_string()
}

fn render_tagline(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();
    let stats = app.catalog.stats();
    let tagline = format!(
        "{} snippets across {} categories, curated for the working front-end",
        stats.total, stats.categories
    );

    Paragraph::new(tagline)
        .alignment(Alignment::Center)
        .style(Style::default().fg(palette.subtle).italic())
        .render(area, frame.buffer_mut());
}

fn render_menu(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();
    let menu_area = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(48),
        Constraint::Fill(1),
    ])
    .split(area)[1];

    let list_items: Vec<ListItem> = MENU_ITEMS
        .iter()
        .enumerate()
        .map(|(i, (icon, name, key, _))| {
            let style = if i == app.selected_menu_item {
                Style::default().fg(palette.love).bold()
            } else {
                Style::default().fg(palette.text)
            };

            let prefix = if i == app.selected_menu_item {
                "▶"
            } else {
                " "
            };

            let line = format!("{:<24} {:>18}", format!("{prefix} {icon} {name}"), format!("[{key}]"));
            ListItem::new(format!("{:^46}", line)).style(style)
        })
        .collect();

    let mut spaced_items = Vec::new();
    for (i, item) in list_items.into_iter().enumerate() {
        spaced_items.push(item);
        if i < MENU_ITEMS.len() - 1 {
            spaced_items.push(ListItem::new(""));
        }
    }

    let list = List::new(spaced_items)
        .style(Style::default().fg(palette.text))
        .highlight_style(
            Style::default()
                .fg(palette.love)
                .bg(palette.highlight_low)
                .bold(),
        );

    let mut list_state = ListState::default();
    list_state.select(Some(app.selected_menu_item * 2));

    frame.render_stateful_widget(list, menu_area, &mut list_state);
}

/// One line of featured titles, joined with dots. Featured = snippets
/// carrying an editorial note.
fn render_featured(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();
    let featured = app.catalog.featured();
    if featured.is_empty() {
        return;
    }

    let titles: Vec<String> = featured
        .iter()
        .take(4)
        .map(|snippet| snippet.title.to_string())
        .collect();

    let lines = vec![
        Line::from(Span::styled(
            "☀ Featured",
            Style::default().fg(palette.gold).bold(),
        )),
        Line::from(Span::styled(
            titles.join("  ·  "),
            Style::default().fg(palette.foam),
        )),
    ];

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(area, frame.buffer_mut());
}

fn render_description(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();
    let description = MENU_ITEMS
        .get(app.selected_menu_item)
        .map(|(_, _, _, description)| *description)
        .unwrap_or("");

    Paragraph::new(description)
        .alignment(Alignment::Center)
        .style(Style::default().fg(palette.muted))
        .render(area, frame.buffer_mut());
}
