//! Map Measure CLI.
//!
//! Spielt eine gespeicherte Messsitzung (`{ "points": [...] }`) durch den
//! Controller und gibt die formatierten Messwerte aus.
//!
//! Aufruf: `map-measure [--log] <session.json> [distance|elevation|area]`
//!
//! Mit `--log` werden zusätzlich die ausgeführten Commands aufgelistet.

use anyhow::Context;
use map_measure::{
    MeasureIntent, MeasureOptions, MeasureState, MeasurementController, MeasurementTool,
    MeasurementView, SessionState,
};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Map Measure v{} startet...", env!("CARGO_PKG_VERSION"));

    let (flags, positional): (Vec<String>, Vec<String>) =
        std::env::args().skip(1).partition(|a| a.starts_with("--"));
    let show_log = flags.iter().any(|f| f == "--log");
    if let Some(unknown) = flags.iter().find(|f| *f != "--log") {
        anyhow::bail!("Unbekannte Option: {}", unknown);
    }

    let mut args = positional.into_iter();
    let session_path = args
        .next()
        .map(PathBuf::from)
        .context("Aufruf: map-measure [--log] <session.json> [distance|elevation|area]")?;
    let tool: MeasurementTool = match args.next() {
        Some(raw) => raw.parse()?,
        None => MeasurementTool::Distance,
    };

    let options = MeasureOptions::load_from_file(&MeasureOptions::config_path());
    let session = SessionState::load_from_file(&session_path)?;

    let mut state = MeasureState::with_options(options);
    let mut controller = MeasurementController::new();
    let intents = [
        MeasureIntent::ToolSelected { tool: Some(tool) },
        MeasureIntent::SessionRestored { session },
    ];
    for intent in intents {
        if let Err(e) = controller.handle_intent(&mut state, intent) {
            log::error!("Event handling failed: {:#}", e);
        }
    }

    print_view(&state.view);
    if show_log {
        println!("Ausgeführte Commands:");
        for line in state.command_log.summary_lines() {
            println!("{line}");
        }
    }
    Ok(())
}

fn print_view(view: &MeasurementView) {
    println!("Punkte: {}", view.points.len());

    if let Some(length) = &view.length {
        for line in length.lines() {
            println!("{line}");
        }
    }
    if let Some(area) = &view.area {
        for line in area.lines() {
            println!("{line}");
        }
    }
    if !view.has_result() {
        println!("Noch kein Messergebnis");
    }
}
