use mongodb::bson::doc;
use crate::BuiltIns::mongo::MongoDB;
use crate::utils::response::Response;
use crate::model::user::Role;
use crate::model::post::Post;
use crate::model::tag::Tag;
use actix_web::{web, Error, HttpResponse, HttpRequest};
use crate::middleware::auth::{require_access, AccessRequirement};

pub async fn task(
    req: HttpRequest,
    tag_id: web::Path<String>
) -> Result<HttpResponse, Error> {
    require_access(&req, AccessRequirement::Role(Role::Admin))?;

    let tag_id = tag_id.into_inner();
    if tag_id.len() == 0 {
        return Ok(Response::bad_request("tag id required"));
    }

    let db = MongoDB.connect();
    let collection = db.collection::<Tag>("tags");
    let result = collection.delete_one(doc!{ "uuid": &tag_id }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    if result.unwrap().deleted_count == 0 {
        return Ok(Response::not_found("Tag not found"));
    }

    let posts = db.collection::<Post>("posts");
    let result = posts.update_many(
        doc!{ "tags": &tag_id },
        doc!{ "$pull": { "tags": &tag_id } },
    ).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    Ok(Response::message("Tag removed"))
}
