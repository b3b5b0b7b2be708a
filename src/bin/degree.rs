use std::path::Path;

use benchplot::{app, pipeline, Pipeline};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let figure = pipeline::run(&Pipeline::degree(), Path::new("."))?;

    // The figure is already on disk; a headless environment only costs
    // us the interactive window.
    if let Err(err) = app::show("B+ tree performance – degree sweep", figure) {
        log::warn!("Viewer unavailable: {err}");
    }
    Ok(())
}
