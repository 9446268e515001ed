use std::fs;
use std::path::Path;

/// Route the `log` facade to a file next to the session data. A TUI owns
/// the terminal, so stderr is not an option.
pub fn init(dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(dir)?;
    let log_path = dir.join("sargam.log");

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .chain(fern::log_file(log_path)?)
        .apply()?;

    Ok(())
}
