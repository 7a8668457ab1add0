//! HTTP surface: server, routing, and page rendering.

pub mod app;
pub mod config;
pub mod contact;
pub mod render;
pub mod services;
