//! Render projection: state in, widgets out.
//!
//! Pure and idempotent; every call draws the same widgets for the same state.
//! Mutations happen only through [`NewsApp`](crate::tui::app::NewsApp)
//! transitions before the next draw. The only thing written here is ratatui's
//! own `ListState` scroll bookkeeping.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{NewsApp, View};

const DESCRIPTION_PREVIEW_CHARS: usize = 200;

pub fn render(frame: &mut Frame, app: &mut NewsApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Main view
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    match app.view {
        View::List => render_list(frame, app, chunks[0]),
        View::Article => render_article(frame, app, chunks[0]),
    }
    render_status_bar(frame, app, chunks[1]);
}

fn render_list(frame: &mut Frame, app: &mut NewsApp, area: Rect) {
    let title = format!(
        " News | page {}/{} ({} items) ",
        app.page + 1,
        app.page_count(),
        app.items.len()
    );
    let block = Block::default().title(title).borders(Borders::ALL);

    if app.items.is_empty() {
        let placeholder = Paragraph::new("Loading news…")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let rows: Vec<ListItem> = app
        .visible_items()
        .iter()
        .map(|item| {
            let lines = vec![
                Line::from(Span::styled(
                    item.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    item.short_description(DESCRIPTION_PREVIEW_CHARS),
                    Style::default().fg(Color::DarkGray),
                )),
            ];
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(rows)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::BOLD).bg(Color::DarkGray))
        .highlight_symbol("▸ ");

    frame.render_stateful_widget(list, area, &mut app.list_state);
}

fn render_article(frame: &mut Frame, app: &mut NewsApp, area: Rect) {
    let block = Block::default().title(" Article ").borders(Borders::ALL);

    let Some(article) = &app.current_article else {
        let placeholder = Paragraph::new("Loading article…")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            article.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(article.content.trim_end().lines().map(Line::from));

    let body = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.article_scroll, 0));

    frame.render_widget(body, area);
}

fn render_status_bar(frame: &mut Frame, app: &NewsApp, area: Rect) {
    let mut spans = Vec::new();

    if let Some(message) = &app.status_message {
        spans.push(Span::styled(
            format!(" {message} "),
            Style::default().fg(Color::Yellow),
        ));
    } else if app.is_refreshing {
        spans.push(Span::styled(
            " Refreshing… ",
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = match app.view {
        // Pagination hints appear only when the transition is available,
        // mirroring buttons that are hidden rather than disabled.
        View::List => {
            let mut hints = String::from(" ↑/↓: select  Enter: read");
            if app.has_prev_page() {
                hints.push_str("  p: prev page");
            }
            if app.has_next_page() {
                hints.push_str("  n: next page");
            }
            hints.push_str("  R: refresh  o: open  q: quit");
            hints
        }
        View::Article => String::from(" ↑/↓: scroll  Esc: back  q: quit"),
    };
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;
    use crate::domain::{Article, FeedItem};

    fn make_items(count: usize) -> Vec<FeedItem> {
        (0..count)
            .map(|n| FeedItem {
                title: format!("Title {n}"),
                link: format!("https://e.com/{n}"),
                description: format!("Description {n}"),
                image_url: None,
            })
            .collect()
    }

    fn draw(app: &mut NewsApp) -> String {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();

        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol().chars().next().unwrap_or(' '))
            .collect()
    }

    #[test]
    fn empty_list_shows_loading_placeholder() {
        let mut app = NewsApp::new();
        let screen = draw(&mut app);
        assert!(screen.contains("Loading news…"));
    }

    #[test]
    fn list_view_shows_titles_and_page_indicator() {
        let mut app = NewsApp::with_page_size(10);
        app.apply_items(make_items(25));
        let screen = draw(&mut app);
        assert!(screen.contains("Title 0"));
        assert!(screen.contains("page 1/3"));
        assert!(screen.contains("n: next page"));
        assert!(!screen.contains("p: prev page"), "no prev on page 0");
    }

    #[test]
    fn last_page_hides_next_hint() {
        let mut app = NewsApp::with_page_size(10);
        app.apply_items(make_items(25));
        app.next_page();
        app.next_page();
        let screen = draw(&mut app);
        assert!(screen.contains("Title 20"));
        assert!(screen.contains("p: prev page"));
        assert!(!screen.contains("n: next page"));
    }

    #[test]
    fn pending_article_shows_loading_placeholder() {
        let mut app = NewsApp::new();
        app.apply_items(make_items(3));
        app.begin_read();
        let screen = draw(&mut app);
        assert!(screen.contains("Loading article…"));
    }

    #[test]
    fn loaded_article_shows_title_and_content() {
        let mut app = NewsApp::new();
        app.apply_items(make_items(3));
        app.begin_read();
        app.finish_read(Article {
            title: "Big Story".into(),
            content: "First paragraph.\n\nSecond paragraph.\n\n".into(),
        });
        let screen = draw(&mut app);
        assert!(screen.contains("Big Story"));
        assert!(screen.contains("First paragraph."));
        assert!(screen.contains("Second paragraph."));
        assert!(screen.contains("Esc: back"));
    }

    #[test]
    fn status_message_is_rendered() {
        let mut app = NewsApp::new();
        app.apply_items(make_items(1));
        app.set_status("Fetched 1 items".into());
        let screen = draw(&mut app);
        assert!(screen.contains("Fetched 1 items"));
    }
}
