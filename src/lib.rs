pub mod aggregate;
pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod filter;
pub mod github;
pub mod models;
pub mod orchestrator;
pub mod pagination;
pub mod presenter;
pub mod render;
pub mod session;
pub mod theme;
pub mod types;
