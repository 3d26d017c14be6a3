//! NPT entry CRUD handlers

use actix_web::{HttpResponse, delete, get, http::StatusCode, post, put, web};
use tracing::debug;

use npt_persistence::{NptEntry, NptEntryInput};

use crate::{
    error::AppError,
    model::{AppState, ENTRY_DELETED_MESSAGE, ENTRY_SAVED_MESSAGE, ENTRY_UPDATED_MESSAGE, Envelope},
};

#[post("")]
pub async fn create(
    data: web::Data<AppState>,
    body: web::Json<NptEntryInput>,
) -> Result<HttpResponse, AppError> {
    let entry = data.npt_entry_service.create(body.into_inner()).await?;

    Ok(HttpResponse::Ok().json(Envelope::success_with_message(ENTRY_SAVED_MESSAGE, entry)))
}

/// List every entry, newest id first. A store that cannot be read answers
/// 500 with an empty list instead of an error message.
#[get("")]
pub async fn list(data: web::Data<AppState>) -> HttpResponse {
    let listing = data.npt_entry_service.list().await;

    if listing.degraded {
        return Envelope::http_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            Envelope {
                success: false,
                message: None,
                data: Some(Vec::<NptEntry>::new()),
            },
        );
    }

    debug!(count = listing.entries.len(), "Listing NPT entries");
    HttpResponse::Ok().json(Envelope::success(listing.entries))
}

#[get("/{id}")]
pub async fn find_one(
    data: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let entry = data.npt_entry_service.get(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(Envelope::success(entry)))
}

#[put("/{id}")]
pub async fn update(
    data: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<NptEntryInput>,
) -> Result<HttpResponse, AppError> {
    let entry = data
        .npt_entry_service
        .update(path.into_inner(), body.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(Envelope::success_with_message(ENTRY_UPDATED_MESSAGE, entry)))
}

#[delete("/{id}")]
pub async fn remove(
    data: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    data.npt_entry_service.delete(path.into_inner()).await?;

    Ok(Envelope::http_message(StatusCode::OK, ENTRY_DELETED_MESSAGE))
}
