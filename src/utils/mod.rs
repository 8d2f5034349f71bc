pub mod password;
pub mod webutils;
