pub mod app;
pub mod event;
pub mod layout;

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing::error;

use crate::app::{AppContext, Result};
use crate::domain::{Article, FeedItem};

use self::app::{NewsApp, View};
use self::event::{Action, AppEvent, EventHandler};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Completions reported by background tasks.
///
/// Each message is applied as one atomic state update on the UI loop; the
/// tasks themselves never touch [`NewsApp`]. In-flight work is not cancelled
/// when superseded — last writer wins, only the latest result is displayed.
enum Msg {
    Refreshed(Result<Vec<FeedItem>>),
    ArticleLoaded(Article),
}

pub async fn run(ctx: Arc<AppContext>) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, ctx).await;
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app(terminal: &mut Tui, ctx: Arc<AppContext>) -> Result<()> {
    let mut app = NewsApp::with_page_size(ctx.config.items_per_page);
    let event_handler = EventHandler::new(Duration::from_millis(100));
    let (tx, mut rx) = mpsc::unbounded_channel::<Msg>();

    // First refresh fires immediately, then repeats on the fixed period.
    // Ticks are not gated on the previous refresh having finished.
    spawn_periodic_refresh(ctx.clone(), tx.clone());
    app.is_refreshing = true;

    loop {
        // Apply completed background work before drawing.
        while let Ok(msg) = rx.try_recv() {
            apply_message(&mut app, msg);
        }

        terminal.draw(|frame| layout::render(frame, &mut app))?;

        match event_handler.next()? {
            AppEvent::Key(key) => handle_action(Action::from(key), &mut app, &ctx, &tx),
            AppEvent::Tick => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn apply_message(app: &mut NewsApp, msg: Msg) {
    match msg {
        Msg::Refreshed(Ok(items)) => {
            let count = items.len();
            app.apply_items(items);
            app.is_refreshing = false;
            app.set_status(format!("Fetched {count} items"));
        }
        Msg::Refreshed(Err(err)) => {
            error!(error = %err, "feed refresh failed");
            app.refresh_failed(format!("Refresh failed: {err}"));
        }
        Msg::ArticleLoaded(article) => {
            app.finish_read(article);
        }
    }
}

fn handle_action(
    action: Action,
    app: &mut NewsApp,
    ctx: &Arc<AppContext>,
    tx: &mpsc::UnboundedSender<Msg>,
) {
    match action {
        Action::Quit => app.should_quit = true,
        Action::MoveUp => app.move_up(),
        Action::MoveDown => app.move_down(),
        Action::NextPage => app.next_page(),
        Action::PrevPage => app.prev_page(),
        Action::Read => {
            if app.view != View::List {
                return;
            }
            if let Some(item) = app.selected_item().cloned() {
                app.begin_read();
                spawn_article_read(ctx.clone(), tx.clone(), item);
            }
        }
        Action::Back => app.back(),
        Action::Refresh => {
            app.is_refreshing = true;
            app.clear_status();
            spawn_refresh(ctx.clone(), tx.clone());
        }
        Action::OpenInBrowser => {
            if app.view != View::List {
                return;
            }
            if let Some(item) = app.selected_item() {
                if let Err(err) = open::that(&item.link) {
                    app.set_status(format!("Failed to open browser: {err}"));
                }
            }
        }
        Action::None => {}
    }
}

fn spawn_refresh(ctx: Arc<AppContext>, tx: mpsc::UnboundedSender<Msg>) {
    tokio::spawn(async move {
        let result = ctx.refresh().await;
        let _ = tx.send(Msg::Refreshed(result));
    });
}

fn spawn_article_read(ctx: Arc<AppContext>, tx: mpsc::UnboundedSender<Msg>, item: FeedItem) {
    tokio::spawn(async move {
        let article = ctx.read_article(&item).await;
        let _ = tx.send(Msg::ArticleLoaded(article));
    });
}

fn spawn_periodic_refresh(ctx: Arc<AppContext>, tx: mpsc::UnboundedSender<Msg>) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(ctx.config.refresh_period);
        loop {
            ticker.tick().await;
            spawn_refresh(ctx.clone(), tx.clone());
        }
    });
}
