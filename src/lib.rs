//! Catalog API: paginated category and product CRUD behind JWT role checks.

pub mod app;
pub mod config;
pub mod constants;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod validators;
