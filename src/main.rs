mod app;
mod catalog;
mod config;
mod player;
mod runtime;
mod session;
mod storage;
mod track;
mod ui;

fn main() -> anyhow::Result<()> {
    runtime::run()
}
