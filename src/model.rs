pub mod user;
pub use user as User;

pub mod post;
pub use post as Post;

pub mod category;
pub use category as Category;

pub mod tag;
pub use tag as Tag;

pub mod comment;
pub use comment as Comment;
