use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{AssistantRequest, AssistantResponse, ErrorResponse};
use crate::routes::{validation_error, AppState};

/// Configure assistant routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/assistant/reply", web::post().to(reply));
}

/// Canned assistant reply
///
/// POST /api/v1/assistant/reply
///
/// Request body:
/// ```json
/// { "message": "What are the best waterfalls to visit?" }
/// ```
async fn reply(state: web::Data<AppState>, req: web::Json<AssistantRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    match state.assistant.reply(&req.message) {
        Some(reply) => HttpResponse::Ok().json(AssistantResponse {
            reply: reply.to_string(),
        }),
        None => HttpResponse::BadRequest().json(ErrorResponse::new(
            "Empty message",
            "message must contain non-whitespace text",
            400,
        )),
    }
}
