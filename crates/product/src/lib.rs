pub mod abstract_trait;
pub mod config;
pub mod handler;
pub mod model;
pub mod repository;
