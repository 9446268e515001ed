use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::catalog::SearchWorker;
use crate::player::Player;
use crate::session::SessionStore;
use crate::storage::Storage;

mod event_loop;
mod logging;
mod settings;
mod startup;

pub fn run() -> anyhow::Result<()> {
    let settings = settings::load_settings();

    let storage = match &settings.storage.dir {
        Some(dir) => Storage::open_at(dir),
        None => Storage::open_default(),
    };
    if let Err(e) = logging::init(storage.dir()) {
        eprintln!("sargam: logging disabled: {e}");
    }

    let mut session = SessionStore::load(storage);
    let player = Player::spawn(settings.playback.clone());
    let worker = SearchWorker::spawn(settings.api.clone())?;

    let mut app = App::new();

    // Pick the last session's track back up.
    if let Some(cmd) = startup::resume_command(&session) {
        let _ = player.send(cmd);
    }

    // Startup search, so the first screen is not empty.
    let generation = app.next_search_generation();
    worker.request(generation, settings.api.default_query.clone());
    app.search_in_flight = true;

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(
        &mut terminal,
        &settings,
        &mut app,
        &mut session,
        &player,
        &worker,
    );

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    player.quit();

    run_result
}
