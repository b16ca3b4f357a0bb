pub mod abstract_trait;
pub mod config;
pub mod controller;
pub mod di;
pub mod domain;
pub mod frontend;
pub mod service;
pub mod state;
