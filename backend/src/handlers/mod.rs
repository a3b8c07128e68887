pub mod auth;
pub mod contact;
pub mod frontend;
pub mod users;
