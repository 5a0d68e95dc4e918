use serde_json::json;
use mongodb::bson::doc;
use futures::stream::TryStreamExt;
use crate::BuiltIns::mongo::MongoDB;
use serde::{ Serialize, Deserialize };
use crate::utils::mongo::{find_with_pagination, total_pages};
use crate::utils::response::Response;
use crate::model::user::{Role, User};
use actix_web::{web, Error, HttpResponse, HttpRequest};
use crate::middleware::auth::{require_access, AccessRequirement};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Query {
    page: Option<u32>,
    limit: Option<u32>,
}

pub async fn task(
    req: HttpRequest,
    query: web::Query<Query>
) -> Result<HttpResponse, Error> {
    require_access(&req, AccessRequirement::Role(Role::Admin))?;

    let page = query.page.unwrap_or(1);
    let limit = query.limit.unwrap_or(10);

    let db = MongoDB.connect();
    let collection = db.collection::<User>("users");

    let total = match collection.count_documents(doc!{}).await {
        Ok(total) => total,
        Err(error) => {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error(&error.to_string()));
        }
    };

    let result = find_with_pagination(
        &collection,
        doc!{},
        None,
        None,
        Some(limit),
        Some(page),
    ).await;

    let cursor = match result {
        Ok(cursor) => cursor,
        Err(error) => {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error(&error.to_string()));
        }
    };

    let accounts = match cursor.try_collect::<Vec<User>>().await {
        Ok(accounts) => accounts,
        Err(error) => {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error(&error.to_string()));
        }
    };

    let data: Vec<serde_json::Value> = accounts
        .iter()
        .map(User::display_json)
        .collect();

    Ok(
        HttpResponse::Ok()
        .content_type("application/json")
        .json(json!({
            "success": true,
            "count": data.len(),
            "total": total,
            "page": page,
            "pages": total_pages(total, limit),
            "data": data
        }))
    )
}
