pub mod auth;
pub mod controls;
pub mod dashboard;
pub mod export;
pub mod health;
