//! Author handlers.

use actix_web::{HttpResponse, web};

use blog_shared::dto::CreateAuthorRequest;

use crate::mapping;
use crate::middleware::error::{AppError, RequestResult};
use crate::observability::RequestId;
use crate::state::AppState;

/// POST /api/author
pub async fn create_author(
    state: web::Data<AppState>,
    request_id: RequestId,
    body: web::Json<CreateAuthorRequest>,
) -> RequestResult<HttpResponse> {
    let author = state
        .authors
        .create_author(mapping::author_submission(body.into_inner()))
        .await
        .map_err(|e| AppError::from(e).in_request(&request_id))?;

    Ok(HttpResponse::Created().json(mapping::author_response(author)))
}
