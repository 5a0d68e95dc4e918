use serde_json::json;
use mongodb::bson::doc;
use crate::BuiltIns::mongo::MongoDB;
use crate::utils::response::Response;
use crate::model::user::User;
use actix_web::{web, Error, HttpResponse};

pub async fn task(user_id: web::Path<String>) -> Result<HttpResponse, Error> {
    let user_id = user_id.into_inner();
    if user_id.len() == 0 {
        return Ok(Response::bad_request("user id required"));
    }

    let db = MongoDB.connect();
    let collection = db.collection::<User>("users");
    let result = collection.find_one(doc!{ "uuid": &user_id }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    let option = result.unwrap();
    if let None = option {
        return Ok(Response::not_found("User not found"));
    }

    let account = option.unwrap();

    Ok(Response::ok(json!({
        "uuid": account.uuid,
        "name": account.name,
        "avatar": account.avatar,
        "bio": account.bio,
        "social_links": account.social_links,
        "created_at": account.created_at,
    })))
}
