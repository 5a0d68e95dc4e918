use actix_web::HttpResponse;
use serde::Serialize;
use serde_json::json;

/// Response envelope helpers. Every endpoint answers with
/// `{ "success": bool, "data" | "message": ... }`.
pub struct Response;

impl Response {
    pub fn ok<T: Serialize>(data: T) -> HttpResponse {
        HttpResponse::Ok()
            .content_type("application/json")
            .json(json!({ "success": true, "data": data }))
    }

    pub fn created<T: Serialize>(data: T) -> HttpResponse {
        HttpResponse::Created()
            .content_type("application/json")
            .json(json!({ "success": true, "data": data }))
    }

    pub fn message(message: &str) -> HttpResponse {
        HttpResponse::Ok()
            .content_type("application/json")
            .json(json!({ "success": true, "message": message }))
    }

    pub fn bad_request(message: &str) -> HttpResponse {
        HttpResponse::BadRequest()
            .content_type("application/json")
            .json(json!({ "success": false, "message": message }))
    }

    pub fn unauthorized(message: &str) -> HttpResponse {
        HttpResponse::Unauthorized()
            .content_type("application/json")
            .json(json!({ "success": false, "message": message }))
    }

    pub fn forbidden(message: &str) -> HttpResponse {
        HttpResponse::Forbidden()
            .content_type("application/json")
            .json(json!({ "success": false, "message": message }))
    }

    pub fn not_found(message: &str) -> HttpResponse {
        HttpResponse::NotFound()
            .content_type("application/json")
            .json(json!({ "success": false, "message": message }))
    }

    pub fn internal_server_error(message: &str) -> HttpResponse {
        HttpResponse::InternalServerError()
            .content_type("application/json")
            .json(json!({ "success": false, "message": message }))
    }
}
