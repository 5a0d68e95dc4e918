use chrono::Utc;
use mongodb::bson::{doc, Document};
use crate::BuiltIns::mongo::MongoDB;
use serde::{ Serialize, Deserialize };
use crate::utils::string;
use crate::utils::response::Response;
use crate::model::user::Role;
use crate::model::post::{
    Post, PostStatus, Seo, MAX_EXCERPT_LENGTH, MAX_TITLE_LENGTH,
};
use actix_web::{web, Error, HttpResponse, HttpRequest};
use crate::middleware::auth::{require_access, AccessRequirement};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReqBody {
    title: Option<String>,
    content: Option<String>,
    excerpt: Option<String>,
    cover_image: Option<String>,
    categories: Option<Vec<String>>,
    tags: Option<Vec<String>>,
    status: Option<PostStatus>,
    featured: Option<bool>,
    scheduled_for: Option<i64>,
    seo: Option<Seo>,
}

pub async fn task(
    req: HttpRequest,
    post_id: web::Path<String>,
    form_data: web::Json<ReqBody>
) -> Result<HttpResponse, Error> {
    let user = require_access(&req, AccessRequirement::AnyToken)?;
    let user_id = user.user_id;

    let post_id = post_id.into_inner();
    if post_id.len() == 0 {
        return Ok(Response::bad_request("post id required"));
    }

    let db = MongoDB.connect();
    let collection = db.collection::<Post>("posts");
    let result = collection.find_one(doc!{ "uuid": &post_id }).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    let option = result.unwrap();
    if let None = option {
        return Ok(Response::not_found("Post not found"));
    }

    let mut post = option.unwrap();
    if post.author != user_id && user.role != Role::Admin {
        return Ok(Response::forbidden("Not authorized to update this post"));
    }

    let now = Utc::now().timestamp_millis();
    let mut set = Document::new();

    if let Some(title) = &form_data.title {
        let title = title.trim();
        if title.len() == 0 {
            return Ok(Response::bad_request("Title is required"));
        }
        if title.chars().count() > MAX_TITLE_LENGTH {
            return Ok(Response::bad_request(
                "Title cannot be more than 200 characters"
            ));
        }
        if title != post.title {
            post.slug = string::slugify_unique(title, now);
            set.insert("slug", &post.slug);
        }
        post.title = title.to_string();
        set.insert("title", &post.title);
    }

    if let Some(content) = &form_data.content {
        if content.trim().len() == 0 {
            return Ok(Response::bad_request("Content is required"));
        }
        post.read_time = string::read_time(content);
        post.content = content.clone();
        set.insert("content", &post.content);
        set.insert("read_time", post.read_time);
    }

    if let Some(excerpt) = &form_data.excerpt {
        let excerpt = excerpt.trim();
        if excerpt.len() == 0 {
            return Ok(Response::bad_request("Excerpt is required"));
        }
        if excerpt.chars().count() > MAX_EXCERPT_LENGTH {
            return Ok(Response::bad_request(
                "Excerpt cannot be more than 500 characters"
            ));
        }
        post.excerpt = excerpt.to_string();
        set.insert("excerpt", &post.excerpt);
    }

    if let Some(cover_image) = &form_data.cover_image {
        if cover_image.len() > 0 {
            post.cover_image = cover_image.clone();
            set.insert("cover_image", &post.cover_image);
        }
    }
    if let Some(categories) = &form_data.categories {
        post.categories = categories.clone();
        set.insert("categories", &post.categories);
    }
    if let Some(tags) = &form_data.tags {
        post.tags = tags.clone();
        set.insert("tags", &post.tags);
    }
    if let Some(status) = form_data.status {
        post.status = status;
        set.insert("status", status.to_string());
    }
    if let Some(featured) = form_data.featured {
        post.featured = featured;
        set.insert("featured", featured);
    }
    if let Some(scheduled_for) = form_data.scheduled_for {
        post.scheduled_for = Some(scheduled_for);
        set.insert("scheduled_for", scheduled_for);
    }
    if let Some(seo) = &form_data.seo {
        let seo_bson = match mongodb::bson::to_bson(seo) {
            Ok(seo_bson) => seo_bson,
            Err(error) => {
                log::error!("{:?}", error);
                return Ok(Response::internal_server_error(&error.to_string()));
            }
        };
        post.seo = seo.clone();
        set.insert("seo", seo_bson);
    }

    post.modified_at = now;
    set.insert("modified_at", now);

    let result = collection.update_one(
        doc!{ "uuid": &post_id },
        doc!{ "$set": set },
    ).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    Ok(Response::ok(post))
}
