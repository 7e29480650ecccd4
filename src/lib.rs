// src/lib.rs
//! notionhq-client — a typed Rust client for the Notion API.
//!
//! Construct a [`Client`] from [`ClientOptions`], then call endpoint
//! methods grouped by resource (`blocks().children()`, `databases()`,
//! `pages()`, `users()`) or the flat [`Client::search`]. Every call funnels
//! through one request primitive that serializes recognized parameters into
//! the path, query string, or JSON body, and normalizes failures into
//! [`Error`].
//!
//! ```no_run
//! use notionhq_client::{Client, ClientOptions, RequestArgs};
//!
//! # async fn run() -> notionhq_client::Result<()> {
//! let client = Client::new(ClientOptions {
//!     auth: Some("secret_token".to_string()),
//!     ..ClientOptions::default()
//! })?;
//!
//! let page = client
//!     .pages()
//!     .retrieve(RequestArgs::new().field("page_id", "b55c9c91-384d-452b-81db-d1ef79372b75"))
//!     .await?;
//! println!("{}", page["url"]);
//! # Ok(())
//! # }
//! ```
//!
//! Responses are returned as parsed JSON values verbatim; this crate does
//! not validate them against a schema, retry failures, or paginate.
//! Callers pass cursors themselves.

mod client;
mod config;
pub mod endpoints;
mod error;
mod logging;
mod request;

// --- Client ---
pub use crate::client::{BlockChildren, Blocks, Client, Databases, Pages, Users};

// --- Configuration ---
pub use crate::config::{
    ClientOptions, DEFAULT_BASE_URL, DEFAULT_NOTION_VERSION, DEFAULT_TIMEOUT,
};

// --- Request arguments ---
pub use crate::request::RequestArgs;

// --- Error handling ---
pub use crate::error::{
    ApiErrorCode, Error, Result, REQUEST_TIMEOUT_CODE, RESPONSE_ERROR_CODE,
};

// --- Logging ---
pub use crate::logging::{LogLevel, Logger};

// The method vocabulary used by `Client::request` and the endpoint table.
pub use reqwest::Method;
