use mongodb::bson::doc;
use crate::BuiltIns::mongo::MongoDB;
use crate::utils::response::Response;
use crate::model::user::User;
use actix_web::{Error, HttpResponse, HttpRequest};
use crate::middleware::auth::{require_access, AccessRequirement};

pub async fn task(req: HttpRequest) -> Result<HttpResponse, Error> {
    let user = require_access(&req, AccessRequirement::AnyToken)?;

    let db = MongoDB.connect();
    let collection = db.collection::<User>("users");
    let result = collection.find_one(doc!{ "uuid": &user.user_id }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    let option = result.unwrap();
    if let None = option {
        return Ok(Response::not_found("User not found"));
    }

    Ok(Response::ok(option.unwrap().display_json()))
}
