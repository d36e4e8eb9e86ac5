// HTTP Server modules
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;

// Startup and configuration
pub mod config;
pub mod supervisor;

// LLM abstraction layer
pub mod llm;
