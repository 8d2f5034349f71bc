pub mod error;
pub mod lesson;
pub mod response;
pub mod session;
pub mod user;
