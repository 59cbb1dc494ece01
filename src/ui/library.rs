//! Library Page UI Module
//!
//! The main browsing screen: category sidebar, filtered snippet list and
//! a highlighted code preview, with a status line spelling out the active
//! filter combination.

use crate::app::App;
use crate::catalog::Snippet;
use crate::ui::components::{render_bottom_bar, truncate_to_width};
use crate::ui::theme::Theme;
use once_cell::sync::Lazy;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, List, ListItem, ListState, Paragraph, Widget, Wrap},
};
use syntect::{
    easy::HighlightLines, highlighting::ThemeSet, parsing::SyntaxSet, util::LinesWithEndings,
};

static SYNTAX_SET: Lazy<SyntaxSet> = Lazy::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: Lazy<ThemeSet> = Lazy::new(ThemeSet::load_defaults);

pub fn render(frame: &mut Frame, app: &App) {
    let palette = app.theme.palette();
    let main_area = frame.area();

    let block = Block::bordered()
        .title("  Snippet Library ")
        .title_alignment(Alignment::Center)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(palette.highlight_high));

    let inner_area = block.inner(main_area);
    block.render(main_area, frame.buffer_mut());

    let main_chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1), // Filter status line
        Constraint::Length(3), // Bottom bar
    ])
    .split(inner_area);

    let content_chunks = Layout::horizontal([
        Constraint::Length(24),
        Constraint::Length(42),
        Constraint::Fill(1),
    ])
    .split(main_chunks[0]);

    let results = app.visible_snippets();

    render_sidebar(frame, content_chunks[0], app);
    render_snippet_list(frame, content_chunks[1], app, &results);
    render_preview(frame, content_chunks[2], app, &results);
    render_filter_status(frame, main_chunks[1], app, results.len());
    render_bottom_bar(frame, main_chunks[2], app);
}

/// Category sidebar. While a search is applied the category scope is
/// bypassed, so the whole pane dims to say so.
fn render_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.theme.palette();
    let search_active = app.filter.query.is_active();

    let title = if search_active {
        " Categories (bypassed) "
    } else {
        " Categories "
    };

    let base_color = if search_active {
        palette.muted
    } else {
        palette.text
    };

    let mut items: Vec<ListItem> = Vec::with_capacity(app.category_row_count());
    items.push(ListItem::new(format!(
        "  All ({})",
        app.catalog.all().len()
    )));

    for category in app.catalog.categories() {
        items.push(ListItem::new(format!(
            "  {} ({})",
            category.name,
            category.len()
        )));
    }

    let list = List::new(items)
        .style(Style::default().fg(base_color))
        .highlight_style(
            Style::default()
                .fg(palette.foam)
                .bg(palette.highlight_low)
                .bold(),
        )
        .highlight_symbol("▶")
        .block(
            Block::bordered()
                .title(title)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(palette.highlight_high)),
        );

    let mut state = ListState::default();
    state.select(Some(app.category_index()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_snippet_list(frame: &mut Frame, area: Rect, app: &App, results: &[Snippet]) {
    let palette = app.theme.palette();

    let block = Block::bordered()
        .title(format!(" Snippets ({}) ", results.len()))
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(palette.highlight_high));

    if results.is_empty() {
        let inner_area = block.inner(area);
        block.render(area, frame.buffer_mut());
        Paragraph::new("No snippets match the current filters.")
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(palette.muted))
            .render(inner_area, frame.buffer_mut());
        return;
    }

    let width = area.width.saturating_sub(8) as usize;
    let items: Vec<ListItem> = results
        .iter()
        .map(|snippet| {
            let star = if app.favorites.contains(snippet.id) {
                "★ "
            } else {
                "  "
            };
            let label = format!(
                "{}{} {}",
                star,
                snippet.level.icon(),
                truncate_to_width(snippet.title, width),
            );
            ListItem::new(label).style(Style::default().fg(palette.text))
        })
        .collect();

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .fg(palette.love)
                .bg(palette.highlight_low)
                .bold(),
        )
        .highlight_symbol("▶")
        .block(block);

    let mut state = ListState::default();
    state.select(Some(app.selected_snippet.min(results.len() - 1)));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_preview(frame: &mut Frame, area: Rect, app: &App, results: &[Snippet]) {
    let palette = app.theme.palette();

    let Some(snippet) = results.get(app.selected_snippet.min(results.len().saturating_sub(1)))
    else {
        let block = Block::bordered()
            .title(" Preview ")
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(palette.highlight_high));
        let inner_area = block.inner(area);
        block.render(area, frame.buffer_mut());
        Paragraph::new("Nothing to preview.")
            .alignment(Alignment::Center)
            .style(Style::default().fg(palette.muted))
            .render(inner_area, frame.buffer_mut());
        return;
    };

    let block = Block::bordered()
        .title(format!(" {} {} ", snippet.language.icon(), snippet.title))
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(palette.highlight_high));

    let inner_area = block.inner(area);
    block.render(area, frame.buffer_mut());

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(vec![
        Span::styled(
            format!("{} {}", snippet.language.icon(), snippet.language.display_name()),
            Style::default().fg(palette.foam),
        ),
        Span::styled("  │  ", Style::default().fg(palette.muted)),
        Span::styled(
            format!("{} {}", snippet.level.icon(), snippet.level.display_name()),
            Style::default().fg(palette.iris),
        ),
    ]));

    if !snippet.tags.is_empty() {
        let tags = snippet
            .tags
            .iter()
            .map(|tag| format!("#{tag}"))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(Line::from(Span::styled(
            tags,
            Style::default().fg(palette.gold),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        snippet.description,
        Style::default().fg(palette.subtle),
    )));

    if let Some(note) = snippet.featured_note {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("☀ {note}"),
            Style::default().fg(palette.gold).italic(),
        )));
    }

    let related = app.catalog.related_to(snippet);
    if !related.is_empty() {
        let titles = related
            .iter()
            .map(|related| related.title)
            .collect::<Vec<_>>()
            .join("  ·  ");
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Related: ", Style::default().fg(palette.muted)),
            Span::styled(titles, Style::default().fg(palette.rose)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "─".repeat(inner_area.width.saturating_sub(2) as usize),
        Style::default().fg(palette.highlight_high),
    )));

    lines.extend(highlight_code(snippet, app.theme));

    Paragraph::new(lines)
        .scroll((app.preview_scroll, 0))
        .render(inner_area, frame.buffer_mut());
}

/// Syntect-highlighted code body. Falls back to plain text when the
/// grammar lookup or a highlight pass fails.
fn highlight_code(snippet: &Snippet, theme: Theme) -> Vec<Line<'static>> {
    let code = snippet.code.trim();

    let syntax = SYNTAX_SET
        .find_syntax_by_token(snippet.language.syntax_token())
        .unwrap_or_else(|| SYNTAX_SET.find_syntax_plain_text());

    let theme_name = match theme {
        Theme::RosePine => "base16-ocean.dark",
        Theme::RosePineDawn => "InspiredGitHub",
    };

    let Some(syntect_theme) = THEME_SET.themes.get(theme_name) else {
        return code.lines().map(|line| Line::from(line.to_string())).collect();
    };

    let mut highlighter = HighlightLines::new(syntax, syntect_theme);
    let mut lines = Vec::new();

    for line in LinesWithEndings::from(code) {
        match highlighter.highlight_line(line, &SYNTAX_SET) {
            Ok(ranges) => {
                let spans: Vec<Span> = ranges
                    .into_iter()
                    .map(|(style, text)| {
                        let fg = style.foreground;
                        Span::styled(
                            text.trim_end_matches('\n').to_string(),
                            Style::default().fg(Color::Rgb(fg.r, fg.g, fg.b)),
                        )
                    })
                    .collect();
                lines.push(Line::from(spans));
            }
            Err(_) => lines.push(Line::from(line.trim_end_matches('\n').to_string())),
        }
    }

    lines
}

fn render_filter_status(frame: &mut Frame, area: Rect, app: &App, result_count: usize) {
    let palette = app.theme.palette();
    let query = &app.filter.query;

    let mut spans = vec![
        Span::styled(" Level: ", Style::default().fg(palette.muted)),
        Span::styled(app.filter.level().label(), Style::default().fg(palette.iris)),
    ];

    if !query.raw().is_empty() {
        spans.push(Span::styled("  Search: ", Style::default().fg(palette.muted)));
        spans.push(Span::styled(
            format!("\"{}\"", query.raw()),
            Style::default().fg(palette.foam),
        ));
        if query.is_pending() {
            spans.push(Span::styled(
                " (applying…)",
                Style::default().fg(palette.gold),
            ));
        }
    }

    spans.push(Span::styled(
        format!("  - {result_count} shown"),
        Style::default().fg(palette.muted),
    ));

    Paragraph::new(Line::from(spans)).render(area, frame.buffer_mut());
}
