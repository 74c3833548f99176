//! Post handlers.

use actix_web::http::header;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, mime, web};
use uuid::Uuid;

use blog_shared::dto::{CreatePostRequest, GetPostQuery};

use crate::mapping;
use crate::middleware::error::{AppError, AppResult, RequestResult};
use crate::observability::RequestId;
use crate::state::AppState;

/// Body returned when the request carries no post.
pub const NULL_POST_MESSAGE: &str = "Post is null.";

/// Decode a JSON body, treating an empty body and a literal `null` as absent.
fn parse_body(body: &[u8]) -> AppResult<Option<CreatePostRequest>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice::<Option<CreatePostRequest>>(body)
        .map_err(|e| AppError::BadRequest(format!("Malformed post body: {}", e)))
}

/// Same acceptance rule as `web::Json`: `application/json` or a `+json` type.
fn require_json(req: &HttpRequest) -> AppResult<()> {
    match req.mime_type() {
        Ok(Some(m)) if m.subtype() == mime::JSON || m.suffix() == Some(mime::JSON) => Ok(()),
        _ => Err(AppError::UnsupportedMediaType(
            "Content type error: expected application/json".to_string(),
        )),
    }
}

/// POST /api/post
pub async fn create_post(
    state: web::Data<AppState>,
    http: HttpRequest,
    request_id: RequestId,
    body: web::Bytes,
) -> RequestResult<HttpResponse> {
    require_json(&http).map_err(|e| e.in_request(&request_id))?;
    let Some(req) = parse_body(&body).map_err(|e| e.in_request(&request_id))? else {
        return Ok(HttpResponse::BadRequest()
            .content_type(header::ContentType::plaintext())
            .body(NULL_POST_MESSAGE));
    };

    let created = state
        .posts
        .create_post(mapping::post_submission(req))
        .await
        .map_err(|e| AppError::from(e).in_request(&request_id))?;
    let response = mapping::post_response(created);

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/api/post/{}", response.id)))
        .json(response))
}

/// GET /api/post/{id}?includeAuthor=bool
pub async fn get_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    path: web::Path<Uuid>,
    query: web::Query<GetPostQuery>,
) -> RequestResult<HttpResponse> {
    let id = path.into_inner();

    let found = state
        .posts
        .get_post(id, query.include_author)
        .await
        .map_err(|e| AppError::from(e).in_request(&request_id))?;

    match found {
        Some(details) => Ok(HttpResponse::Ok().json(mapping::post_response(details))),
        None => {
            tracing::debug!(post_id = %id, "Post not found");
            Ok(HttpResponse::NotFound().finish())
        }
    }
}
