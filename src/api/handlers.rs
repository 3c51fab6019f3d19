//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use tracing::error;

use crate::state::{AppState, TimerCommand};
use super::responses::{CommandResponse, ErrorResponse, HealthResponse, RollingRequest, StatusResponse};

type CommandResult = Result<Json<CommandResponse>, (StatusCode, Json<ErrorResponse>)>;

/// Queue a command and answer with the snapshot it produced
async fn run_command(state: &AppState, command: TimerCommand) -> CommandResult {
    match state.dispatch(command).await {
        Ok(timer) => Ok(Json(CommandResponse::new(command.name(), timer))),
        Err(e) => {
            error!("Failed to apply {}: {}", command.name(), e);
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorResponse::new(e.to_string())),
            ))
        }
    }
}

/// Handle POST /frame/start - Start a fresh frame
pub async fn start_frame_handler(State(state): State<Arc<AppState>>) -> CommandResult {
    run_command(&state, TimerCommand::StartFrame).await
}

/// Handle POST /frame/reset - Reset the frame to idle
pub async fn reset_frame_handler(State(state): State<Arc<AppState>>) -> CommandResult {
    run_command(&state, TimerCommand::ResetFrame).await
}

/// Handle POST /frame/pause - Toggle pause
pub async fn pause_frame_handler(State(state): State<Arc<AppState>>) -> CommandResult {
    run_command(&state, TimerCommand::PauseFrame).await
}

/// Handle POST /shot/reset - Grant a new shot
pub async fn reset_shot_handler(State(state): State<Arc<AppState>>) -> CommandResult {
    run_command(&state, TimerCommand::ResetShot).await
}

/// Handle PUT /rolling - Suspend or release the shot clock
pub async fn rolling_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RollingRequest>,
) -> CommandResult {
    run_command(&state, TimerCommand::SetRolling(request.active)).await
}

/// Handle GET /status - Return the latest timer snapshot
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let (last_command, last_command_time) = state.get_last_command();

    Json(StatusResponse {
        timer: state.get_timer_state(),
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_command,
        last_command_time,
    })
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
