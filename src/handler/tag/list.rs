use mongodb::bson::doc;
use futures::stream::TryStreamExt;
use crate::BuiltIns::mongo::MongoDB;
use crate::utils::response::Response;
use crate::model::tag::Tag;
use actix_web::{Error, HttpResponse};

pub async fn task() -> Result<HttpResponse, Error> {
    let db = MongoDB.connect();
    let collection = db.collection::<Tag>("tags");

    let result = collection.find(doc!{}).sort(doc!{ "name": 1 }).await;

    let cursor = match result {
        Ok(cursor) => cursor,
        Err(error) => {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error(&error.to_string()));
        }
    };

    let tags = match cursor.try_collect::<Vec<Tag>>().await {
        Ok(tags) => tags,
        Err(error) => {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error(&error.to_string()));
        }
    };

    Ok(Response::ok(tags))
}
