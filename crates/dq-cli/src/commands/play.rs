//! Play one exploration of the mansion on the terminal.

use std::io;

use dq_fiction::{ExplorationConfig, ExplorationSession, play};
use dq_map::{build_mansion_map, release};
use log::info;

/// Build the mansion, run one session on stdin/stdout, then release the map.
pub fn run() -> Result<(), String> {
    let mansion = build_mansion_map().map_err(|e| format!("failed to build mansion: {e}"))?;
    let config = ExplorationConfig::default();

    let state = {
        let mut session = ExplorationSession::with_config(&mansion, &config)
            .map_err(|e| format!("failed to start session: {e}"))?;
        play::run(&mut session, io::stdin().lock(), io::stdout().lock(), &config)
            .map_err(|e| e.to_string())?
    };
    info!("session finished: {state:?}");

    release(Some(mansion), |_| {});
    Ok(())
}
