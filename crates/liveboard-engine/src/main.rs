//! Board engine binary for the Liveboard progress board.
//!
//! This is the main entry point that wires together the tick cycle,
//! roster seeding, observer controls, and the broadcast state for
//! board consumers. It loads configuration, initializes all
//! subsystems, and runs the board loop until a termination condition
//! is met.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `liveboard-config.yaml`
//! 3. Create the random source from the configured seed
//! 4. Seed the roster with initial scores
//! 5. Create operator state from the board bounds
//! 6. Resolve the configured favorite, if any
//! 7. Create the broadcast state and tick callback
//! 8. Run the board loop
//! 9. Log the result

mod board;
mod callback;
mod celebrate;
mod error;

use std::path::Path;
use std::sync::Arc;

use liveboard_core::config::SimulationConfig;
use liveboard_core::operator::OperatorState;
use liveboard_core::{runner, seed};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::board::BoardState;
use crate::callback::BoardCallback;
use crate::error::EngineError;

/// Application entry point for the board engine.
///
/// Initializes all subsystems and runs the board loop. Returns an
/// error code on failure.
///
/// # Errors
///
/// Returns an error if any initialization step or the run itself fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration first so logging can honor its level.
    let config = load_config()?;

    // 2. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone())),
        )
        .with_target(true)
        .init();

    info!("liveboard-engine starting");
    info!(
        board_name = config.board.name,
        seed = config.board.seed,
        tick_interval_ms = config.board.tick_interval_ms,
        roster_size = config.roster.names.len(),
        "Configuration loaded"
    );

    // 3. Create the random source. A configured seed gives reproducible
    //    runs; otherwise seed from OS entropy.
    let mut rng = config
        .board
        .seed
        .map_or_else(SmallRng::from_os_rng, SmallRng::seed_from_u64);

    // 4. Seed the roster.
    let mut sim_state = seed::seed_state(
        &config.roster.names,
        config.board.time_step_seconds,
        config.board.window,
        config.board.leaderboard_size,
        config.board.chart_size,
        &mut rng,
    )?;
    info!(
        participants = sim_state.participants.len(),
        "Roster seeded"
    );

    // 5. Create operator state.
    let operator = Arc::new(OperatorState::new(
        config.board.tick_interval_ms,
        &config.simulation,
    ));
    info!(
        max_ticks = operator.max_ticks(),
        max_real_time_seconds = operator.max_real_time_seconds(),
        tick_interval_ms = operator.tick_interval_ms(),
        "Operator state initialized"
    );

    // 6. Resolve the configured favorite by name, if any.
    if let Some(ref favorite_name) = config.board.favorite {
        let id = sim_state
            .participants
            .iter()
            .find(|p| p.name == *favorite_name)
            .map(|p| p.id)
            .ok_or_else(|| EngineError::UnknownFavorite {
                name: favorite_name.clone(),
            })?;
        operator.set_favorite(id).await;
        info!(favorite = %favorite_name, "Favorite selected from config");
    }

    // 7. Create the broadcast state and tick callback.
    let board_state = BoardState::new();
    let mut callback = BoardCallback::new(board_state.clone());

    info!("Board state assembled, entering tick loop");

    // 8. Run the board loop.
    let result = runner::run_simulation(&mut sim_state, &operator, &mut callback, &mut rng).await?;

    // 9. Log results.
    runner::log_simulation_end(&result);

    info!(
        end_reason = ?result.end_reason,
        total_ticks = result.total_ticks,
        "liveboard-engine shutdown complete"
    );

    Ok(())
}

/// Load the board configuration from `liveboard-config.yaml`.
///
/// Looks for the config file relative to the current working directory.
fn load_config() -> Result<SimulationConfig, EngineError> {
    let config_path = Path::new("liveboard-config.yaml");
    if config_path.exists() {
        let config = SimulationConfig::from_file(config_path)?;
        Ok(config)
    } else {
        Ok(SimulationConfig::default())
    }
}
