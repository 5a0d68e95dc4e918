pub mod create;
pub use create as Create;

pub mod list;
pub use list as List;

pub mod get;
pub use get as Get;

pub mod get_by_slug;
pub use get_by_slug as GetBySlug;

pub mod update;
pub use update as Update;

pub mod delete;
pub use delete as Delete;

pub mod mine;
pub use mine as Mine;
