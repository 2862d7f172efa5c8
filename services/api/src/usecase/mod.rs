pub mod admin;
pub mod identity;
pub mod menu;
pub mod provision;
pub mod publication;
