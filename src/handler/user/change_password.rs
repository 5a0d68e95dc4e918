use chrono::Utc;
use mongodb::bson::doc;
use crate::BuiltIns::mongo::MongoDB;
use serde::{ Serialize, Deserialize };
use crate::utils::response::Response;
use crate::model::user::{User, MIN_PASSWORD_LENGTH};
use actix_web::{web, Error, HttpResponse, HttpRequest};
use crate::middleware::auth::{require_access, AccessRequirement};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReqBody {
    current_password: String,
    new_password: String,
}

pub async fn task(
    req: HttpRequest,
    form_data: web::Json<ReqBody>
) -> Result<HttpResponse, Error> {
    let user = require_access(&req, AccessRequirement::AnyToken)?;
    let user_id = user.user_id;

    if form_data.current_password.len() == 0 {
        return Ok(Response::bad_request("Current password is required"));
    }

    if form_data.new_password.chars().count() < MIN_PASSWORD_LENGTH {
        return Ok(Response::bad_request(
            "New password must be at least 6 characters"
        ));
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
    let matches = match bcrypt::verify(&form_data.current_password, &account.password) {
        Ok(matches) => matches,
        Err(error) => {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error(&error.to_string()));
        }
    };

    if !matches {
        return Ok(Response::bad_request("Current password is incorrect"));
    }

    let hash = match bcrypt::hash(&form_data.new_password, bcrypt::DEFAULT_COST) {
        Ok(hash) => hash,
        Err(error) => {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error(&error.to_string()));
        }
    };

    let result = collection.update_one(
        doc!{ "uuid": &user_id },
        doc!{ "$set": {
            "password": hash,
            "modified_at": Utc::now().timestamp_millis(),
        }},
    ).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    Ok(Response::message("Password updated"))
}
