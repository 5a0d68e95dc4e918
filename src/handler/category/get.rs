use mongodb::bson::doc;
use crate::BuiltIns::mongo::MongoDB;
use crate::utils::response::Response;
use crate::model::category::Category;
use actix_web::{web, Error, HttpResponse};

pub async fn task(category_id: web::Path<String>) -> Result<HttpResponse, Error> {
    let category_id = category_id.into_inner();
    if category_id.len() == 0 {
        return Ok(Response::bad_request("category id required"));
    }

    let db = MongoDB.connect();
    let collection = db.collection::<Category>("categories");
    let result = collection.find_one(doc!{ "uuid": &category_id }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    let option = result.unwrap();
    if let None = option {
        return Ok(Response::not_found("Category not found"));
    }

    Ok(Response::ok(option.unwrap()))
}
