//! Career OS REST API access

pub mod auth;
mod client;

pub use client::*;
