use anyhow::{Context, Result};
use hoox::{create_store, CreatedStore, Dispatch, Provider, Scope};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::time::Duration;

mod actions;
mod config;
mod logger;
mod middleware;
mod reducer;
mod reducers;
mod state;
mod view;

use actions::Action;
use config::AppConfig;
use state::AppState;

fn main() -> Result<()> {
    let log_file = logger::init()?;

    log::info!("Starting hoox-counter (logging to {})", log_file.display());

    let config = AppConfig::load();
    let store = create_store(
        reducer::root_reducer()?,
        AppState::from_config(&config),
        middleware::stack(),
    );
    let mut provider = store.provider();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main event loop
    let result = run_app(&mut terminal, &store, &mut provider);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match &result {
        Ok(()) => log::info!("Exiting hoox-counter at {}", provider.state().count),
        Err(e) => log::error!("hoox-counter failed: {:#}", e),
    }
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &CreatedStore<AppState, Action>,
    provider: &mut Provider<AppState, Action>,
) -> Result<()> {
    let root = Scope::root();

    loop {
        // Render
        let dispatch = draw_frame(terminal, &root, store, provider)?;

        // Check if we should quit
        if !provider.state().running {
            break;
        }

        // Handle events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    dispatch.dispatch(Action::KeyPressed(key));
                }
            }
        }

        provider.flush()?;
    }

    Ok(())
}

/// Draw one frame and return the dispatch it was rendered with
fn draw_frame<B: Backend>(
    terminal: &mut Terminal<B>,
    root: &Scope<'_>,
    store: &CreatedStore<AppState, Action>,
    provider: &Provider<AppState, Action>,
) -> Result<Dispatch<Action>> {
    let mut rendered = None;
    terminal.draw(|frame| {
        rendered = Some(provider.render(root, |scope| view::render(store, scope, frame)));
    })?;
    Ok(rendered.context("Frame was not drawn")??)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ratatui::backend::TestBackend;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn press(c: char) -> Action {
        Action::KeyPressed(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    /// Render once, send `keys` through the rendered dispatch, then apply them
    fn frame(
        store: &CreatedStore<AppState, Action>,
        provider: &mut Provider<AppState, Action>,
        keys: &[char],
    ) {
        let root = Scope::root();
        let dispatch = provider.render(&root, |scope| store.use_store(scope).unwrap().dispatch);
        for key in keys {
            dispatch.dispatch(press(*key));
        }
        provider.flush().unwrap();
    }

    #[test]
    fn test_keys_drive_the_store() {
        let store = create_store(
            reducer::root_reducer().unwrap(),
            AppState::default(),
            middleware::stack(),
        );
        let mut provider = store.provider();

        frame(&store, &mut provider, &['3', '+']);
        frame(&store, &mut provider, &['-']);
        frame(&store, &mut provider, &['-']);

        let state = provider.state();
        assert_eq!(state.count, 0);
        assert_eq!(state.step, 3);
        assert_eq!(state.history, vec!["step = 3", "increment", "decrement"]);
        assert!(state.running);

        frame(&store, &mut provider, &['q']);
        assert!(!provider.state().running);
    }

    #[test]
    fn test_negative_step_in_config_cannot_break_floor() {
        let config = AppConfig::parse("step = -5\nfloor = 0").unwrap_or_default();
        let store = create_store(
            reducer::root_reducer().unwrap(),
            AppState::from_config(&config),
            middleware::stack(),
        );
        let mut provider = store.provider();

        frame(&store, &mut provider, &['+']);
        assert_eq!(provider.state().count, 1);

        frame(&store, &mut provider, &['-']);
        frame(&store, &mut provider, &['-']);

        let state = provider.state();
        assert_eq!(state.step, 1);
        assert_eq!(state.count, 0);
        assert_eq!(state.count, state.floor);
    }

    #[test]
    fn test_draw_frame_returns_rendered_dispatch() {
        let store = create_store(
            reducer::root_reducer().unwrap(),
            AppState::default(),
            middleware::stack(),
        );
        let mut provider = store.provider();
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        let root = Scope::root();

        let dispatch = draw_frame(&mut terminal, &root, &store, &provider).unwrap();
        dispatch.dispatch(press('+'));
        provider.flush().unwrap();

        assert_eq!(provider.state().count, 1);
    }
}
