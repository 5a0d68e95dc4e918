use mongodb::bson::doc;
use crate::BuiltIns::mongo::MongoDB;
use crate::utils::response::Response;
use crate::model::user::Role;
use crate::model::post::Post;
use crate::model::comment::Comment;
use actix_web::{web, Error, HttpResponse, HttpRequest};
use crate::middleware::auth::{require_access, AccessRequirement};

pub async fn task(
    req: HttpRequest,
    post_id: web::Path<String>
) -> Result<HttpResponse, Error> {
    let user = require_access(&req, AccessRequirement::AnyToken)?;
    let user_id = user.user_id;

    let post_id = post_id.into_inner();
    if post_id.len() == 0 {
        return Ok(Response::bad_request("post id required"));
    }

    let db = MongoDB.connect();
    let collection = db.collection::<Post>("posts");
    let result = collection.find_one(doc!{ "uuid": &post_id }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    let option = result.unwrap();
    if let None = option {
        return Ok(Response::not_found("Post not found"));
    }

    let post = option.unwrap();
    if post.author != user_id && user.role != Role::Admin {
        return Ok(Response::forbidden("Not authorized to delete this post"));
    }

    //the post's comments go with it, before the post itself
    let comments = db.collection::<Comment>("comments");
    let result = comments.delete_many(doc!{ "post": &post_id }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    let result = collection.delete_one(doc!{ "uuid": &post_id }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    Ok(Response::message("Post removed"))
}
