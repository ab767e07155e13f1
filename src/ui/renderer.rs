//! Terminal setup and the main event loop

use crate::api::HttpApi;
use crate::config::Config;
use crate::ui::app_component::AppComponent;
use crate::ui::core::{Action, EventHandler, EventType};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Instant;

/// Run the dashboard until the user quits
pub async fn run_app(config: Config) -> anyhow::Result<()> {
    let api = HttpApi::from_config(&config.api)?;
    log::info!("Using backend at {}", api.base_url());

    let mut terminal = setup_terminal()?;

    let mut app = AppComponent::new(Arc::new(api), &config);
    let mut event_handler = EventHandler::new();

    app.mount();
    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> anyhow::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    undo_on_error(
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            Ok(Terminal::new(CrosstermBackend::new(stdout))?)
        },
        || {
            // The alternate screen may or may not have been entered
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
        },
    )
}

/// Every step runs even if an earlier one fails; the first error is reported.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> anyhow::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let cursor = terminal.show_cursor();
    raw?;
    screen?;
    cursor?;
    Ok(())
}

/// Run `setup`, calling `undo` before handing back its error
fn undo_on_error<T>(setup: impl FnOnce() -> anyhow::Result<T>, undo: impl FnOnce()) -> anyhow::Result<T> {
    let result = setup();
    if let Err(err) = &result {
        log::error!("Terminal setup failed, restoring: {}", err);
        undo();
    }
    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> anyhow::Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render {
            terminal.draw(|f| app.render(f, f.area()))?;
            needs_render = false;
        }

        let event = event_handler.next_event().await?;

        match event {
            EventType::Key(_) | EventType::Resize(_, _) => {
                app.handle_event(event).await?;
                needs_render = true;
            }
            EventType::Tick => {
                for action in app.process_background_actions() {
                    if let Action::Quit = app.handle_app_action(action).await {
                        return Ok(());
                    }
                    needs_render = true;
                }
                if app.maybe_auto_refresh(Instant::now()) {
                    needs_render = true;
                }
            }
            EventType::Other => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
