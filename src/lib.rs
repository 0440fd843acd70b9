//! golens library: grammar-free scanning of Go interfaces and receiver methods,
//! with go-to-implementation navigation.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod server;
