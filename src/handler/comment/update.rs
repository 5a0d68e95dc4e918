use chrono::Utc;
use mongodb::bson::doc;
use crate::BuiltIns::mongo::MongoDB;
use serde::{ Serialize, Deserialize };
use crate::utils::response::Response;
use crate::model::user::Role;
use crate::model::comment::Comment;
use actix_web::{web, Error, HttpResponse, HttpRequest};
use crate::middleware::auth::{require_access, AccessRequirement};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReqBody {
    content: String,
}

pub async fn task(
    req: HttpRequest,
    comment_id: web::Path<String>,
    form_data: web::Json<ReqBody>
) -> Result<HttpResponse, Error> {
    let user = require_access(&req, AccessRequirement::AnyToken)?;
    let user_id = user.user_id;

    let comment_id = comment_id.into_inner();
    if comment_id.len() == 0 {
        return Ok(Response::bad_request("comment id required"));
    }

    if let Err(error) = Comment::validate_content(&form_data.content) {
        return Ok(Response::bad_request(&error.to_string()));
    }

    let db = MongoDB.connect();
    let collection = db.collection::<Comment>("comments");
    let result = collection.find_one(doc!{ "uuid": &comment_id }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    let option = result.unwrap();
    if let None = option {
        return Ok(Response::not_found("Comment not found"));
    }

    let mut comment = option.unwrap();
    if comment.author != user_id && user.role != Role::Admin {
        return Ok(Response::forbidden(
            "Not authorized to update this comment"
        ));
    }

    let now = Utc::now().timestamp_millis();
    comment.content = form_data.content.trim().to_string();
    comment.modified_at = now;

    //only content and modified_at are mutable through edit
    let result = collection.update_one(
        doc!{ "uuid": &comment_id },
        doc!{ "$set": {
            "content": &comment.content,
            "modified_at": now,
        }},
    ).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    Ok(Response::ok(comment))
}
