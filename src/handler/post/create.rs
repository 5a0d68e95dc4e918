use uuid::Uuid;
use chrono::Utc;
use mongodb::bson::doc;
use crate::BuiltIns::mongo::MongoDB;
use serde::{ Serialize, Deserialize };
use crate::utils::string;
use crate::utils::response::Response;
use crate::model::post::{
    Post, PostStatus, Seo, DEFAULT_COVER_IMAGE, MAX_EXCERPT_LENGTH, MAX_TITLE_LENGTH,
};
use actix_web::{web, Error, HttpResponse, HttpRequest};
use crate::middleware::auth::{require_access, AccessRequirement};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReqBody {
    title: String,
    content: String,
    excerpt: String,
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
    form_data: web::Json<ReqBody>
) -> Result<HttpResponse, Error> {
    let user = require_access(&req, AccessRequirement::AnyToken)?;
    let user_id = user.user_id;

    if let Err(error) = check_required_fields(&form_data) {
        return Ok(Response::bad_request(&error));
    }

    let now = Utc::now().timestamp_millis();
    let title = form_data.title.trim().to_string();

    let post = Post {
        uuid: Uuid::new_v4().to_string(),
        slug: string::slugify_unique(&title, now),
        read_time: string::read_time(&form_data.content),
        title,
        content: form_data.content.clone(),
        excerpt: form_data.excerpt.trim().to_string(),
        cover_image: form_data
            .cover_image
            .clone()
            .filter(|v| v.len() > 0)
            .unwrap_or_else(|| DEFAULT_COVER_IMAGE.to_string()),
        author: user_id,
        categories: form_data.categories.clone().unwrap_or_default(),
        tags: form_data.tags.clone().unwrap_or_default(),
        status: form_data.status.unwrap_or(PostStatus::Draft),
        featured: form_data.featured.unwrap_or(false),
        view_count: 0,
        scheduled_for: form_data.scheduled_for,
        seo: form_data.seo.clone().unwrap_or_default(),
        created_at: now,
        modified_at: now,
    };

    let db = MongoDB.connect();
    let collection = db.collection::<Post>("posts");
    let result = collection.insert_one(&post).await;

    if let Err(error) = result {
        log::error!("{:?}", error);
        return Ok(Response::internal_server_error(&error.to_string()));
    }

    Ok(Response::created(post))
}

fn check_required_fields(form_data: &ReqBody) -> Result<(), String> {
    let title = form_data.title.trim();
    if title.len() == 0 {
        return Err("Title is required".to_string());
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err("Title cannot be more than 200 characters".to_string());
    }
    if form_data.content.trim().len() == 0 {
        return Err("Content is required".to_string());
    }
    let excerpt = form_data.excerpt.trim();
    if excerpt.len() == 0 {
        return Err("Excerpt is required".to_string());
    }
    if excerpt.chars().count() > MAX_EXCERPT_LENGTH {
        return Err("Excerpt cannot be more than 500 characters".to_string());
    }
    Ok(())
}
