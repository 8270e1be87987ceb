pub mod api;
pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod generator;
pub mod models;
pub mod store;
