use serde_json::json;
use mongodb::bson::doc;
use futures::stream::TryStreamExt;
use crate::BuiltIns::mongo::MongoDB;
use serde::{ Serialize, Deserialize };
use crate::utils::mongo::{find_with_pagination, total_pages};
use crate::utils::response::Response;
use crate::model::post::{Post, PostStatus};
use actix_web::{web, Error, HttpResponse, HttpRequest};
use crate::middleware::auth::{require_access, AccessRequirement};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Query {
    page: Option<u32>,
    limit: Option<u32>,
    status: Option<PostStatus>,
}

pub async fn task(
    req: HttpRequest,
    query: web::Query<Query>
) -> Result<HttpResponse, Error> {
    let user = require_access(&req, AccessRequirement::AnyToken)?;
    let user_id = user.user_id;

    let page = query.page.unwrap_or(1);
    let limit = query.limit.unwrap_or(10);

    //own dashboard shows every status unless one is asked for
    let mut filter = doc!{ "author": &user_id };
    if let Some(status) = query.status {
        filter.insert("status", status.to_string());
    }

    let db = MongoDB.connect();
    let collection = db.collection::<Post>("posts");

    let total = match collection.count_documents(filter.clone()).await {
        Ok(total) => total,
        Err(error) => {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error(&error.to_string()));
        }
    };

    let result = find_with_pagination(
        &collection,
        filter,
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

    let posts = match cursor.try_collect::<Vec<Post>>().await {
        Ok(posts) => posts,
        Err(error) => {
            log::error!("{:?}", error);
            return Ok(Response::internal_server_error(&error.to_string()));
        }
    };

    Ok(
        HttpResponse::Ok()
        .content_type("application/json")
        .json(json!({
            "success": true,
            "count": posts.len(),
            "total": total,
            "page": page,
            "pages": total_pages(total, limit),
            "data": posts
        }))
    )
}
