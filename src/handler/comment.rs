pub mod create;
pub use create as Create;

pub mod list;
pub use list as List;

pub mod update;
pub use update as Update;

pub mod delete;
pub use delete as Delete;

pub mod like;
pub use like as Like;

pub mod unlike;
pub use unlike as Unlike;

pub mod approve;
pub use approve as Approve;
