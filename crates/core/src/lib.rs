#![warn(clippy::all, missing_docs)]

//! Core logic for the WinZones terminal site.
//!
//! This crate hosts the static site content, the game catalog filter, the
//! contact form validator and its submit lifecycle, and configuration
//! handling used by the terminal UI and any future frontends.

pub mod catalog;
pub mod config;
pub mod contact;
pub mod content;

pub use catalog::{filter, CatalogQuery, CatalogView, GameRecord, ALL_GAMES};
pub use config::AppConfig;
pub use contact::{validate, ContactForm, ContactFormInput, DeepLink, Field, FormErrors};
pub use content::{ContentError, SiteContent};
