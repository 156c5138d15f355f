pub mod analyzer;
pub mod app_state;
pub mod articles;
pub mod config;
pub mod docs;
pub mod extractor;
pub mod fetcher;
pub mod health;
pub mod pipeline;
pub mod routes;
