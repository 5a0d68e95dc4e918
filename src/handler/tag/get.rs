use mongodb::bson::doc;
use crate::BuiltIns::mongo::MongoDB;
use crate::utils::response::Response;
use crate::model::tag::Tag;
use actix_web::{web, Error, HttpResponse};

pub async fn task(tag_id: web::Path<String>) -> Result<HttpResponse, Error> {
    let tag_id = tag_id.into_inner();
    if tag_id.len() == 0 {
        return Ok(Response::bad_request("tag id required"));
    }

    let db = MongoDB.connect();
    let collection = db.collection::<Tag>("tags");
    let result = collection.find_one(doc!{ "uuid": &tag_id }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    let option = result.unwrap();
    if let None = option {
        return Ok(Response::not_found("Tag not found"));
    }

    Ok(Response::ok(option.unwrap()))
}
