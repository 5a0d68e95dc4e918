use serde_json::json;
use futures::stream::TryStreamExt;
use mongodb::bson::doc;
use crate::BuiltIns::mongo::MongoDB;
use serde::{ Serialize, Deserialize };
use crate::utils::mongo::{find_with_pagination, total_pages};
use crate::utils::response::Response;
use crate::model::post::Post;
use actix_web::{web, Error, HttpResponse};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Query {
    page: Option<u32>,
    limit: Option<u32>,
    search: Option<String>,
    category: Option<String>,
    tag: Option<String>,
    author: Option<String>,
    sort_by: Option<String>,
    sort_order: Option<String>,
}

pub async fn task(query: web::Query<Query>) -> Result<HttpResponse, Error> {
    let page = query.page.unwrap_or(1);
    let limit = query.limit.unwrap_or(10);

    //the public listing only ever shows published posts
    let mut filter = doc!{ "status": "published" };

    if let Some(search) = &query.search {
        if search.len() > 0 {
            let pattern = regex_escape(search);
            filter.insert("$or", vec![
                doc!{ "title": doc!{ "$regex": &pattern, "$options": "i" } },
                doc!{ "content": doc!{ "$regex": &pattern, "$options": "i" } },
                doc!{ "excerpt": doc!{ "$regex": &pattern, "$options": "i" } },
            ]);
        }
    }
    if let Some(category) = &query.category {
        if category.len() > 0 {
            filter.insert("categories", category);
        }
    }
    if let Some(tag) = &query.tag {
        if tag.len() > 0 {
            filter.insert("tags", tag);
        }
    }
    if let Some(author) = &query.author {
        if author.len() > 0 {
            filter.insert("author", author);
        }
    }

    let ascending = matches!(query.sort_order.as_deref(), Some("asc"));
    let sort_by = sortable_field(query.sort_by.as_deref());

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
        Some(sort_by),
        Some(ascending),
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

fn regex_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if "\\.+*?()|[]{}^$".contains(c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

//sort field names come straight from the query string; anything outside
//the whitelist falls back to the default ordering
fn sortable_field(requested: Option<&str>) -> &str {
    match requested {
        Some(field @ ("created_at" | "view_count" | "title" | "read_time")) => field,
        _ => "created_at",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_whitelisted_sort_fields_pass_through() {
        assert_eq!(sortable_field(Some("view_count")), "view_count");
        assert_eq!(sortable_field(Some("title")), "title");
        assert_eq!(sortable_field(Some("$natural")), "created_at");
        assert_eq!(sortable_field(Some("password")), "created_at");
        assert_eq!(sortable_field(None), "created_at");
    }
}
