pub mod mongo;
pub mod response;
pub mod string;
