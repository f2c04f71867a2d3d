//! HTTP request handlers

pub mod api;
pub mod health;
pub mod page;
pub mod session;
