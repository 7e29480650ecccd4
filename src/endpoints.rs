// src/endpoints.rs
//! Static metadata for every Notion API operation.
//!
//! Each operation is described once: its HTTP method, the parameter names
//! that become path segments, and the names it recognizes for the query
//! string and JSON body. The client dispatches every call through these
//! records; nothing about an operation's shape lives anywhere else.

use reqwest::Method;

/// Metadata describing one API operation.
///
/// `query_params` and `body_params` never overlap, and path parameters are
/// a separate category again: they are resolved by name from the caller's
/// arguments and handed to `path` positionally, in `path_params` order.
pub struct Endpoint {
    pub method: Method,
    pub path_params: &'static [&'static str],
    pub query_params: &'static [&'static str],
    pub body_params: &'static [&'static str],
    pub path: fn(&[&str]) -> String,
}

/// Append block children
pub static BLOCKS_CHILDREN_APPEND: Endpoint = Endpoint {
    method: Method::PATCH,
    path_params: &["block_id"],
    query_params: &[],
    body_params: &["children"],
    path: |p| format!("blocks/{}/children", p[0]),
};

/// Retrieve block children
pub static BLOCKS_CHILDREN_LIST: Endpoint = Endpoint {
    method: Method::GET,
    path_params: &["block_id"],
    query_params: &["start_cursor", "page_size"],
    body_params: &[],
    path: |p| format!("blocks/{}/children", p[0]),
};

/// List databases
pub static DATABASES_LIST: Endpoint = Endpoint {
    method: Method::GET,
    path_params: &[],
    query_params: &["start_cursor", "page_size"],
    body_params: &[],
    path: |_| "databases".to_string(),
};

/// Query a database
pub static DATABASES_QUERY: Endpoint = Endpoint {
    method: Method::POST,
    path_params: &["database_id"],
    query_params: &[],
    body_params: &["filter", "sorts", "start_cursor", "page_size"],
    path: |p| format!("databases/{}/query", p[0]),
};

/// Retrieve a database
pub static DATABASES_RETRIEVE: Endpoint = Endpoint {
    method: Method::GET,
    path_params: &["database_id"],
    query_params: &[],
    body_params: &[],
    path: |p| format!("databases/{}", p[0]),
};

/// Create a page
pub static PAGES_CREATE: Endpoint = Endpoint {
    method: Method::POST,
    path_params: &[],
    query_params: &[],
    body_params: &["parent", "properties", "children"],
    path: |_| "pages".to_string(),
};

/// Retrieve a page
pub static PAGES_RETRIEVE: Endpoint = Endpoint {
    method: Method::GET,
    path_params: &["page_id"],
    query_params: &[],
    body_params: &[],
    path: |p| format!("pages/{}", p[0]),
};

/// Update page properties
pub static PAGES_UPDATE: Endpoint = Endpoint {
    method: Method::PATCH,
    path_params: &["page_id"],
    query_params: &[],
    body_params: &["properties"],
    path: |p| format!("pages/{}", p[0]),
};

/// Retrieve a user
pub static USERS_RETRIEVE: Endpoint = Endpoint {
    method: Method::GET,
    path_params: &["user_id"],
    query_params: &[],
    body_params: &[],
    path: |p| format!("users/{}", p[0]),
};

/// List all users
pub static USERS_LIST: Endpoint = Endpoint {
    method: Method::GET,
    path_params: &[],
    query_params: &["start_cursor", "page_size"],
    body_params: &[],
    path: |_| "users".to_string(),
};

/// Search
pub static SEARCH: Endpoint = Endpoint {
    method: Method::POST,
    path_params: &[],
    query_params: &[],
    body_params: &["query", "sort", "filter", "start_cursor", "page_size"],
    path: |_| "search".to_string(),
};
