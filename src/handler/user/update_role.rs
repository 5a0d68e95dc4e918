use chrono::Utc;
use mongodb::bson::doc;
use crate::BuiltIns::mongo::MongoDB;
use serde::{ Serialize, Deserialize };
use crate::utils::response::Response;
use crate::model::user::{Role, User};
use actix_web::{web, Error, HttpResponse, HttpRequest};
use crate::middleware::auth::{require_access, AccessRequirement};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReqBody {
    //deserializing into the closed enum rejects unknown roles up front
    role: Role,
}

pub async fn task(
    req: HttpRequest,
    user_id: web::Path<String>,
    form_data: web::Json<ReqBody>
) -> Result<HttpResponse, Error> {
    require_access(&req, AccessRequirement::Role(Role::Admin))?;

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

    let mut account = option.unwrap();
    account.role = form_data.role;
    account.modified_at = Utc::now().timestamp_millis();

    let result = collection.update_one(
        doc!{ "uuid": &user_id },
        doc!{ "$set": {
            "role": form_data.role.to_string(),
            "modified_at": account.modified_at,
        }},
    ).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    Ok(Response::ok(account.display_json()))
}
