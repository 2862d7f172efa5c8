pub mod admin;
pub mod auth;
pub mod me;
pub mod menu;
pub mod responses;
