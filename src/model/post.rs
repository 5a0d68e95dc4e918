use serde::{Deserialize, Serialize};

pub const DEFAULT_COVER_IMAGE: &str =
    "https://res.cloudinary.com/demo/image/upload/v1580125061/samples/landscapes/default-blog-cover.jpg";

pub const MAX_TITLE_LENGTH: usize = 200;
pub const MAX_EXCERPT_LENGTH: usize = 500;

//status for post
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus { Draft, Published, Archived }
impl std::fmt::Display for PostStatus {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            PostStatus::Draft => write!(fmt, "draft"),
            PostStatus::Published => write!(fmt, "published"),
            PostStatus::Archived => write!(fmt, "archived"),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Seo {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub keywords: String,
    #[serde(default)]
    pub og_image: String,
}

//post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub uuid: String,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub cover_image: String,
    pub author: String,

    pub categories: Vec<String>,
    pub tags: Vec<String>,

    pub status: PostStatus,
    pub featured: bool,
    pub view_count: i64,
    pub read_time: i64,
    pub scheduled_for: Option<i64>,
    pub seo: Seo,

    pub created_at: i64,
    pub modified_at: i64,
}
