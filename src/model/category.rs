use serde::{Deserialize, Serialize};

pub const MAX_NAME_LENGTH: usize = 50;
pub const MAX_DESCRIPTION_LENGTH: usize = 500;
pub const DEFAULT_COLOR: &str = "#3498db";

//category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub uuid: String,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub image: String,
    pub color: String,

    pub created_at: i64,
    pub modified_at: i64,
}
