//! Stockroom web front end: server-rendered form UI over the in-memory store.

pub mod app;
pub mod config;
