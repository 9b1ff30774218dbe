pub mod config;
pub mod error;
pub mod handlers;
pub mod llm;
pub mod prompt;
pub mod relay;
pub mod routes;
pub mod state;
