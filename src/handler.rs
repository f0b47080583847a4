use std::{path::Path, sync::Arc};

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Local;
use tracing::info;

use crate::{
    attendance,
    database::ConnectionState,
    error::AppError,
    model::sample_employees,
    request::{CreateRecord, SaveNote},
    response::{
        DbStatus, EmployeeList, Listing, MessageResponse, Saved, ServiceStatus, UploadResponse,
    },
    validate, AppState,
};

pub async fn root_handler() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Server is running!",
    })
}

pub async fn status_handler(State(data): State<Arc<AppState>>) -> impl IntoResponse {
    let state = data.db.state().await;
    let code = match state {
        ConnectionState::Connected => StatusCode::OK,
        ConnectionState::Disconnected | ConnectionState::Unreachable => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    let body = ServiceStatus {
        server: "Server is running",
        database: state.message(),
        status: match state {
            ConnectionState::Connected => "All systems are operational",
            ConnectionState::Disconnected | ConnectionState::Unreachable => {
                "Database unavailable"
            }
        },
    };
    (code, Json(body))
}

pub async fn db_status_handler(State(data): State<Arc<AppState>>) -> impl IntoResponse {
    let state = data.db.state().await;
    (
        state.status_code(),
        Json(DbStatus {
            message: state.message(),
        }),
    )
}

pub async fn list_employees_handler() -> Json<EmployeeList> {
    Json(EmployeeList {
        employees: sample_employees(),
    })
}

pub async fn create_record_handler(
    State(data): State<Arc<AppState>>,
    Json(body): Json<CreateRecord>,
) -> Result<impl IntoResponse, AppError> {
    let [name, email] = validate::require_fields([
        ("name", body.name.as_deref()),
        ("email", body.email.as_deref()),
    ])?;
    let record = data.db.create_record(name, email).await?;
    info!(id = record.id, "record saved");
    Ok((
        StatusCode::CREATED,
        Json(Saved {
            message: "Record saved successfully",
            record,
        }),
    ))
}

pub async fn list_records_handler(
    State(data): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let records = data.db.list_records().await?;
    Ok(Json(Listing { records }))
}

pub async fn save_note_handler(
    State(data): State<Arc<AppState>>,
    Json(body): Json<SaveNote>,
) -> Result<impl IntoResponse, AppError> {
    let [text] = validate::require_fields([("text", body.text.as_deref())])?;
    let note = data.db.create_note(text).await?;
    info!(id = note.id, "note saved");
    Ok((
        StatusCode::CREATED,
        Json(Saved {
            message: "Note saved successfully",
            record: note,
        }),
    ))
}

pub async fn list_notes_handler(
    State(data): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let records = data.db.list_notes().await?;
    Ok(Json(Listing { records }))
}

pub async fn upload_handler(
    State(data): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| AppError::Internal(Box::new(err)))?
    {
        // fields without a filename are plain form values, not the upload
        let Some(filename) = field.file_name().and_then(base_name) else {
            continue;
        };
        let bytes = field
            .bytes()
            .await
            .map_err(|err| AppError::Internal(Box::new(err)))?;
        tokio::fs::create_dir_all(&data.config.upload_dir)
            .await
            .map_err(|err| AppError::Internal(Box::new(err)))?;
        tokio::fs::write(data.config.upload_dir.join(&filename), &bytes)
            .await
            .map_err(|err| AppError::Internal(Box::new(err)))?;
        info!(%filename, size = bytes.len(), "file stored");
        return Ok(Json(UploadResponse { filename }));
    }
    Err(AppError::MissingFile)
}

/// Strips any client-supplied directory components.
fn base_name(filename: &str) -> Option<String> {
    Path::new(filename)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
}

pub async fn clock_in_handler() -> Json<attendance::ClockEvent> {
    Json(attendance::clock_in(Local::now()))
}

pub async fn clock_out_handler() -> Json<attendance::ClockEvent> {
    Json(attendance::clock_out(Local::now()))
}

pub async fn not_found_handler() -> AppError {
    AppError::NotFound
}
