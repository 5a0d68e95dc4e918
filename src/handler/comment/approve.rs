use chrono::Utc;
use mongodb::bson::doc;
use crate::BuiltIns::mongo::MongoDB;
use crate::utils::response::Response;
use crate::model::user::Role;
use crate::model::comment::Comment;
use actix_web::{web, Error, HttpResponse, HttpRequest};
use crate::middleware::auth::{require_access, AccessRequirement};

pub async fn task(
    req: HttpRequest,
    comment_id: web::Path<String>
) -> Result<HttpResponse, Error> {
    require_access(&req, AccessRequirement::Role(Role::Admin))?;

    let comment_id = comment_id.into_inner();
    if comment_id.len() == 0 {
        return Ok(Response::bad_request("comment id required"));
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

    //approving twice is a no-op success, down to modified_at
    let mut comment = option.unwrap();
    if !comment.approve() {
        return Ok(Response::ok(comment));
    }
    comment.modified_at = Utc::now().timestamp_millis();

    let result = collection.update_one(
        doc!{ "uuid": &comment_id },
        doc!{ "$set": {
            "approved": true,
            "modified_at": comment.modified_at,
        }},
    ).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    Ok(Response::ok(comment))
}
