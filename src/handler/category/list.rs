use mongodb::bson::doc;
use futures::stream::TryStreamExt;
use crate::BuiltIns::mongo::MongoDB;
use crate::utils::response::Response;
use crate::model::category::Category;
use actix_web::{Error, HttpResponse};

pub async fn task() -> Result<HttpResponse, Error> {
    let db = MongoDB.connect();
    let collection = db.collection::<Category>("categories");

    let result = collection.find(doc!{}).sort(doc!{ "name": 1 }).await;

    let cursor = match result {
        Ok(cursor) => cursor,
        Err(error) => {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error(&error.to_string()));
        }
    };

    let categories = match cursor.try_collect::<Vec<Category>>().await {
        Ok(categories) => categories,
        Err(error) => {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error(&error.to_string()));
        }
    };

    Ok(Response::ok(categories))
}
