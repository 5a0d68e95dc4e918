use serde::{Deserialize, Serialize};

pub const MAX_NAME_LENGTH: usize = 30;
pub const MAX_DESCRIPTION_LENGTH: usize = 300;

//tag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub uuid: String,
    pub name: String,
    pub slug: String,
    pub description: String,

    pub created_at: i64,
    pub modified_at: i64,
}
