pub mod category;
pub mod chat;
pub mod chat_message;
pub mod columns;
pub mod course;
pub mod custom_learn_courses;
pub mod file;
pub mod lesson;
pub mod user;

pub use columns::ColumnNames;

/*
 A course lives in exactly one category and is created by one user. Other users
 follow it through custom_learn_courses. Categories form a tree through parent_id;
 the database only checks that the parent exists, the service refuses cycles.
 Every lesson can carry files and a single chat, and the chat keeps its messages
 in the order they were written.
 */
