//! Shot Clock - A frame and shot clock controller for timed snooker frames
//!
//! This is the main entry point for the shot-clock application.

use std::sync::Arc;
use anyhow::Context;
use tokio::{net::TcpListener, sync::oneshot};
use tracing::{info, warn};

use shot_clock::{
    api::create_router,
    config::Config,
    observers::{AudioCues, CueSink, IndicatorPanel, LogCueSink, LogIndicatorDriver},
    services::CommandCueSink,
    state::{AppState, TimerEngine},
    tasks::{engine_loop_task, keyboard_input_task, EngineRunner},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("shot_clock={},tower_http=info", config.log_level()))
        .init();

    info!("Starting shot-clock server v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration: host={}, port={}, frame={}s, first half until {}s left, shot={}s/{}s",
        config.host,
        config.port,
        config.frame_duration,
        config.first_half_duration,
        config.shot_first_half,
        config.shot_second_half
    );

    let timer_config = config.timer_config();
    for warning in timer_config.warnings() {
        warn!("Timer configuration: {}", warning);
    }

    let cue_sink: Box<dyn CueSink> = match config.cue_command.as_deref() {
        Some(command_line) => {
            let sink = CommandCueSink::from_command_line(command_line)
                .map_err(anyhow::Error::msg)
                .context("Invalid --cue-command")?;
            info!("Audio cues played with {}", sink.program());
            Box::new(sink)
        }
        None => Box::new(LogCueSink),
    };

    // Engine loop owns the engine; everyone else talks to it through the queue
    let engine = TimerEngine::new(timer_config);
    let (state, channels) = AppState::new(config.port, config.host.clone(), engine.snapshot());
    let state = Arc::new(state);

    let runner = EngineRunner::new(engine)
        .with_observer(AudioCues::new(&timer_config, cue_sink).with_enabled(!config.mute))
        .with_observer(IndicatorPanel::new(config.indicators, LogIndicatorDriver));

    let (stop_tx, stop_rx) = oneshot::channel();
    let engine_handle = tokio::spawn(engine_loop_task(runner, channels, config.tick_period(), stop_rx));

    let keyboard_state = Arc::clone(&state);
    let keyboard_enabled = config.keyboard;
    let quit_requested = async move {
        if keyboard_enabled && keyboard_input_task(keyboard_state).await {
            return;
        }
        futures::future::pending::<()>().await
    };

    // Create HTTP router with all endpoints
    let app = create_router(Arc::clone(&state));

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /frame/start - Start a new frame");
    info!("  POST /frame/reset - Reset the frame");
    info!("  POST /frame/pause - Pause or resume the frame");
    info!("  POST /shot/reset  - Reset the shot clock");
    info!("  PUT  /rolling     - Set balls rolling {{\"active\": bool}}");
    info!("  GET  /status      - Current timer state");
    info!("  GET  /health      - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
        _ = quit_requested => {
            info!("Quit requested");
        }
    }

    // Let the engine loop switch its outputs off before exiting
    let _ = stop_tx.send(());
    if let Err(e) = engine_handle.await {
        warn!("Engine loop ended abnormally: {}", e);
    }

    info!("Server shutdown complete");
    Ok(())
}
