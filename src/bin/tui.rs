//! ChefMate TUI (Terminal User Interface)
//!
//! A terminal client for the ChefMate cooking assistant backend.

use anyhow::Context;
use chefmate::storage::settings::DEFAULT_DATA_DIR;
use chefmate::storage::Settings;
use chefmate::tui::{ui::ui, App, Tab};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};
use std::io;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    // Logging goes to a file; stdout belongs to the terminal UI
    let settings = Settings::load(Path::new(DEFAULT_DATA_DIR).join("settings.json")).unwrap_or_default();
    chefmate::init_logging(&settings.log_path);

    // Create app state before touching the terminal so errors print normally
    let mut app = App::new().context("Failed to start ChefMate")?;

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Probe the backend in the background
    app.trigger_health_check();

    // Run main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if app.has_pending_requests() {
        tracing::info!("Quitting with requests in flight; they are dropped");
    }

    if let Err(err) = res {
        tracing::error!("TUI loop failed: {:?}", err);
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        // Collect finished requests and advance the spinner
        app.on_tick();

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(app, key);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Keys shared by every tab; returns true if the key was consumed
fn handle_global_key(app: &mut App, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('c') if ctrl => app.should_quit = true,
        KeyCode::F(1) => app.switch_tab(Tab::Chat),
        KeyCode::F(2) => app.switch_tab(Tab::Recipes),
        KeyCode::F(3) => app.switch_tab(Tab::Substitutions),
        KeyCode::Right if ctrl => app.next_tab(),
        KeyCode::Left if ctrl => app.previous_tab(),
        KeyCode::Char('l') if ctrl => {
            app.clear_active_tab();
        }
        KeyCode::Char('s') if ctrl => {
            app.submit_active_tab();
        }
        _ => return false,
    }
    true
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if handle_global_key(app, key) {
        return;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match app.active_tab {
        Tab::Chat => match key.code {
            KeyCode::Enter if alt || key.modifiers.contains(KeyModifiers::SHIFT) => {
                app.chat_screen.insert_newline();
            }
            KeyCode::Enter => {
                app.submit_chat();
            }
            KeyCode::Char('y') if ctrl => {
                app.copy_last_response();
            }
            KeyCode::Char(c @ '1'..='4') if alt => {
                let index = c as usize - '1' as usize;
                app.chat_screen.use_quick_prompt(index);
            }
            KeyCode::Char(c) if !ctrl && !alt => {
                app.chat_screen.add_char(c);
            }
            KeyCode::Backspace => {
                app.chat_screen.backspace();
            }
            KeyCode::Up => {
                app.chat_screen.scroll_up();
            }
            KeyCode::Down => {
                app.chat_screen.scroll_down();
            }
            KeyCode::PageUp => {
                for _ in 0..10 {
                    app.chat_screen.scroll_up();
                }
            }
            KeyCode::PageDown => {
                for _ in 0..10 {
                    app.chat_screen.scroll_down();
                }
            }
            _ => {}
        },
        Tab::Recipes => match key.code {
            KeyCode::Enter => {
                app.confirm_recipe_input();
            }
            KeyCode::Tab | KeyCode::BackTab => {
                app.recipe_screen.toggle_focus();
            }
            KeyCode::Char(c) if !ctrl && !alt => {
                app.recipe_screen.add_char(c);
            }
            KeyCode::Backspace => {
                app.recipe_screen.backspace();
            }
            KeyCode::Right => {
                app.recipe_screen.select_next_chip();
            }
            KeyCode::Left => {
                app.recipe_screen.select_previous_chip();
            }
            KeyCode::Delete => {
                app.recipe_screen.remove_selected_chip();
            }
            KeyCode::Up => {
                app.recipe_screen.result.scroll_up();
            }
            KeyCode::Down => {
                app.recipe_screen.result.scroll_down();
            }
            _ => {}
        },
        Tab::Substitutions => match key.code {
            KeyCode::Enter => {
                app.submit_substitution();
            }
            KeyCode::Tab | KeyCode::BackTab => {
                app.substitution_screen.toggle_focus();
            }
            KeyCode::Char(c) if !ctrl && !alt => {
                app.substitution_screen.add_char(c);
            }
            KeyCode::Backspace => {
                app.substitution_screen.backspace();
            }
            KeyCode::Up => {
                app.substitution_screen.result.scroll_up();
            }
            KeyCode::Down => {
                app.substitution_screen.result.scroll_down();
            }
            _ => {}
        },
    }
}
