//! Career OS - Dioxus fullstack web shell
//!
//! The shell declares the document metadata, wires the cross-cutting
//! providers (query cache, theme, auth, toasts) and renders the persistent
//! page frame around every routed page.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web,server
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web,server
//! ```

#![allow(non_snake_case)]

pub mod api;
pub mod app;
pub mod auth;
pub mod components;
pub mod config;
pub mod error;
pub mod metadata;
pub mod notifications;
pub mod pages;
pub mod query;
pub mod routes;
pub mod shell;
pub mod theme;
pub mod timer;

pub use app::App;
pub use config::AppConfig;
pub use shell::{AppShell, ShellServices};
