//! HTTP Handlers

pub mod company;
pub mod health;
pub mod home;
