use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{App, Pane};
use crate::catalog::SearchWorker;
use crate::config::Settings;
use crate::player::{Player, PlayerCmd};
use crate::session::SessionStore;
use crate::ui;

/// Main terminal event loop: applies finished searches, keeps the player's
/// playlist in sync, draws, and dispatches key input. Returns `Ok(())`
/// when shutdown is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &Settings,
    app: &mut App,
    session: &mut SessionStore,
    player: &Player,
    worker: &SearchWorker,
) -> anyhow::Result<()> {
    let transport = player.transport_handle();

    loop {
        // Drain finished searches; apply_results drops stale generations.
        while let Some(results) = worker.try_recv() {
            app.apply_results(results.generation, results.tracks);
        }

        // The queue-advance playlist follows the visible result list.
        if app.playlist_dirty {
            let _ = player.send(PlayerCmd::SetPlaylist(app.results.clone()));
            app.playlist_dirty = false;
        }

        // Issue a fresh search for the edited query. An empty query falls
        // back to the default one, so the screen never goes blank.
        if app.search_dirty {
            let query = if app.query.trim().is_empty() {
                settings.api.default_query.clone()
            } else {
                app.query.clone()
            };
            let generation = app.next_search_generation();
            worker.request(generation, query);
            app.search_dirty = false;
            app.search_in_flight = true;
        }

        // Latest transport snapshot for rendering.
        if let Ok(info) = transport.lock() {
            app.transport = info.clone();
        }

        terminal.draw(|f| {
            ui::draw(f, app, session.recent_songs(), settings.controls.scrub_seconds)
        })?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, settings, app, session, player) {
                    break;
                }
            }
        }
    }

    Ok(())
}

fn pane_len(app: &App, session: &SessionStore) -> usize {
    match app.pane {
        Pane::Results => app.results.len(),
        Pane::Recent => session.recent_songs().len(),
    }
}

/// Handle one key press. Returns true when the application should quit.
fn handle_key_event(
    key: KeyEvent,
    settings: &Settings,
    app: &mut App,
    session: &mut SessionStore,
    player: &Player,
) -> bool {
    if app.search_mode {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => app.exit_search_mode(),
            KeyCode::Backspace => app.pop_query_char(),
            KeyCode::Char(c) if !c.is_control() => app.push_query_char(c),
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('/') => app.enter_search_mode(),
        KeyCode::Tab => app.toggle_pane(),
        KeyCode::Char('j') | KeyCode::Down => {
            let len = pane_len(app, session);
            app.select_next(len);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            let len = pane_len(app, session);
            app.select_prev(len);
        }
        KeyCode::Enter => {
            let track = match app.pane {
                Pane::Results => app.results.get(app.selected).cloned(),
                Pane::Recent => session.recent_songs().get(app.selected).cloned(),
            };
            // Tracks without an audio URL keep their play affordance
            // disabled; they never reach the session or the player.
            if let Some(track) = track {
                if track.is_playable() {
                    session.play_track(track.clone());
                    let _ = player.send(PlayerCmd::Play(track));
                }
            }
        }
        KeyCode::Char(' ') | KeyCode::Char('p') => {
            let _ = player.send(PlayerCmd::TogglePause);
        }
        KeyCode::Char('l') => {
            let _ = player.send(PlayerCmd::Next);
        }
        KeyCode::Char('h') => {
            let _ = player.send(PlayerCmd::Prev);
        }
        KeyCode::Char('L') => {
            let scrub = Duration::from_secs(settings.controls.scrub_seconds);
            let _ = player.send(PlayerCmd::Seek(app.transport.elapsed + scrub));
        }
        KeyCode::Char('H') => {
            let scrub = Duration::from_secs(settings.controls.scrub_seconds);
            let _ = player.send(PlayerCmd::Seek(app.transport.elapsed.saturating_sub(scrub)));
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            let volume = app.transport.volume + settings.controls.volume_step;
            let _ = player.send(PlayerCmd::SetVolume(volume));
        }
        KeyCode::Char('-') => {
            let volume = app.transport.volume - settings.controls.volume_step;
            let _ = player.send(PlayerCmd::SetVolume(volume));
        }
        KeyCode::Char('r') => {
            let _ = player.send(PlayerCmd::ToggleLoop);
        }
        _ => {}
    }

    false
}
