use serde_json::json;
use mongodb::bson::doc;
use crate::BuiltIns::jwt;
use crate::BuiltIns::mongo::MongoDB;
use serde::{ Serialize, Deserialize };
use crate::utils::response::Response;
use crate::model::user::User;
use actix_web::{web, Error, HttpResponse};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReqBody {
    email: String,
    password: String,
}

pub async fn task(form_data: web::Json<ReqBody>) -> Result<HttpResponse, Error> {
    let email = form_data.email.trim().to_lowercase();
    if email.len() == 0 || form_data.password.len() == 0 {
        return Ok(Response::bad_request("Email and password are required"));
    }

    let db = MongoDB.connect();
    let collection = db.collection::<User>("users");

    let result = collection.find_one(doc!{ "email": &email }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    //the same message for unknown email and wrong password
    let option = result.unwrap();
    if let None = option {
        return Ok(Response::bad_request("Invalid credentials"));
    }

    let account = option.unwrap();
    let matches = match bcrypt::verify(&form_data.password, &account.password) {
        Ok(matches) => matches,
        Err(error) => {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error(&error.to_string()));
        }
    };

    if !matches {
        return Ok(Response::bad_request("Invalid credentials"));
    }

    let (access_token, _) = jwt::access_token::generate_default(&account.uuid, account.role);

    Ok(
        HttpResponse::Ok()
        .content_type("application/json")
        .json(json!({
            "success": true,
            "token": access_token,
            "user": account.display_json()
        }))
    )
}
