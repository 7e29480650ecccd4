// src/client.rs
//! The Notion API client: one generic request primitive plus a thin typed
//! facade generated by hand from the endpoint table.
//!
//! Every endpoint method funnels through [`Client::request`], which owns
//! the whole dispatch story: effective-auth resolution, body suppression,
//! lifecycle logging, and failure normalization. The facade itself adds no
//! logic beyond one forwarding call per descriptor.

use crate::config::ClientOptions;
use crate::endpoints::{self, Endpoint};
use crate::error::{normalize_error_response, normalize_transport_error, Error};
use crate::logging::{console_logger, LogLevel, Logger};
use crate::request::{pick, query_pairs, RequestArgs};
use indexmap::IndexMap;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Method;
use serde_json::{json, Value};

/// Sent as the `user-agent` header on every request.
const USER_AGENT: &str = concat!("notionhq-client/", env!("CARGO_PKG_VERSION"));

/// A configured Notion API client.
///
/// All state is set at construction and read-only afterwards, so one
/// instance serves unlimited concurrent calls; each call is independent
/// and issues exactly one HTTP request. Cheap to clone.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    prefix_url: String,
    auth: Option<String>,
    log_level: LogLevel,
    logger: Logger,
}

impl Client {
    /// Creates a client from options.
    ///
    /// Fails fast on a base URL without an `http`/`https` scheme, or on a
    /// token or version string that cannot form a header value; malformed
    /// configuration is rejected here rather than at the first call.
    pub fn new(options: ClientOptions) -> Result<Self, Error> {
        let prefix_url = options.prefix_url()?;
        if let Some(token) = &options.auth {
            bearer_header(token)?;
        }

        let http = reqwest::Client::builder()
            .default_headers(default_headers(&options.notion_version)?)
            .user_agent(USER_AGENT)
            .timeout(options.timeout)
            .build()?;

        Ok(Self {
            http,
            prefix_url,
            auth: options.auth,
            log_level: options.log_level,
            logger: options.logger.unwrap_or_else(console_logger),
        })
    }

    /// Sends one request. Every endpoint method funnels through here; it is
    /// public so callers can reach operations this crate has no descriptor
    /// for yet.
    ///
    /// `query` and `body` must already be projected to the endpoint's
    /// recognized shape. An empty body map sends no request body at all
    /// (not an empty JSON object, which some endpoints reject). The
    /// effective token is `auth` if given, else the configured one, else
    /// none.
    ///
    /// Failures are normalized: timeouts become
    /// [`Error::RequestTimeout`], non-2xx responses become
    /// [`Error::ApiResponse`] or [`Error::HttpResponse`], and anything else
    /// passes through as [`Error::Transport`] untouched. Nothing is
    /// retried.
    pub async fn request(
        &self,
        path: &str,
        method: Method,
        query: IndexMap<String, Value>,
        body: IndexMap<String, Value>,
        auth: Option<&str>,
    ) -> Result<Value, Error> {
        self.log(
            LogLevel::Info,
            "request start",
            json!({ "method": method.as_str(), "path": path }),
        );

        let url = format!("{}{}", self.prefix_url, path);
        let mut builder = self.http.request(method.clone(), url);
        if !query.is_empty() {
            builder = builder.query(&query_pairs(&query));
        }
        if !body.is_empty() {
            builder = builder.json(&body);
        }
        if let Some(token) = auth.or(self.auth.as_deref()) {
            builder = builder.header(AUTHORIZATION, bearer_header(token)?);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(error) => return Err(self.fail(normalize_transport_error(error))),
        };

        let status = response.status();
        if !status.is_success() {
            let headers = response.headers().clone();
            let body_text = response.text().await.unwrap_or_default();
            return Err(self.fail(normalize_error_response(status, headers, &body_text)));
        }

        let parsed = match response.json::<Value>().await {
            Ok(value) => value,
            Err(error) => return Err(self.fail(normalize_transport_error(error))),
        };

        self.log(
            LogLevel::Info,
            "request success",
            json!({ "method": method.as_str(), "path": path }),
        );
        Ok(parsed)
    }

    /// Block operations.
    pub fn blocks(&self) -> Blocks<'_> {
        Blocks { client: self }
    }

    /// Database operations.
    pub fn databases(&self) -> Databases<'_> {
        Databases { client: self }
    }

    /// Page operations.
    pub fn pages(&self) -> Pages<'_> {
        Pages { client: self }
    }

    /// User operations.
    pub fn users(&self) -> Users<'_> {
        Users { client: self }
    }

    /// Search
    pub async fn search(&self, args: RequestArgs) -> Result<Value, Error> {
        self.call(&endpoints::SEARCH, args).await
    }

    /// Resolves one descriptor against caller arguments and dispatches it:
    /// path parameters by name (missing ones fail fast, before any request
    /// is issued), query and body by projection.
    async fn call(&self, endpoint: &Endpoint, args: RequestArgs) -> Result<Value, Error> {
        let mut segments = Vec::with_capacity(endpoint.path_params.len());
        for &name in endpoint.path_params {
            let value = args
                .get(name)
                .ok_or(Error::MissingPathParameter { name })?;
            segments.push(path_segment(value));
        }
        let positional: Vec<&str> = segments.iter().map(String::as_str).collect();
        let path = (endpoint.path)(&positional);

        let query = pick(&args, endpoint.query_params);
        let body = pick(&args, endpoint.body_params);
        self.request(&path, endpoint.method.clone(), query, body, args.auth_override())
            .await
    }

    /// Logs a failure at the levels the event warrants and hands the error
    /// back for the caller to raise. Unclassified failures pass through
    /// without a summary line; the caller sees the original, untouched.
    fn fail(&self, error: Error) -> Error {
        let Some(code) = error.code().map(str::to_owned) else {
            return error;
        };
        self.log(
            LogLevel::Warn,
            "request fail",
            json!({ "code": code, "message": error.to_string() }),
        );
        if error.is_http_response_error() {
            // The response body may hold sensitive resource content, so it
            // is withheld from the detail event.
            self.log(LogLevel::Debug, "failed response body", json!({}));
        }
        error
    }

    fn log(&self, level: LogLevel, message: &str, context: Value) {
        if level >= self.log_level {
            (self.logger)(level, message, &context);
        }
    }
}

/// Block operations, via [`Client::blocks`].
pub struct Blocks<'a> {
    client: &'a Client,
}

impl<'a> Blocks<'a> {
    /// Block children operations.
    pub fn children(&self) -> BlockChildren<'a> {
        BlockChildren {
            client: self.client,
        }
    }
}

/// Block children operations, via [`Blocks::children`].
pub struct BlockChildren<'a> {
    client: &'a Client,
}

impl BlockChildren<'_> {
    /// Append block children
    pub async fn append(&self, args: RequestArgs) -> Result<Value, Error> {
        self.client
            .call(&endpoints::BLOCKS_CHILDREN_APPEND, args)
            .await
    }

    /// Retrieve block children
    pub async fn list(&self, args: RequestArgs) -> Result<Value, Error> {
        self.client
            .call(&endpoints::BLOCKS_CHILDREN_LIST, args)
            .await
    }
}

/// Database operations, via [`Client::databases`].
pub struct Databases<'a> {
    client: &'a Client,
}

impl Databases<'_> {
    /// List databases
    #[deprecated(note = "use `Client::search` instead")]
    pub async fn list(&self, args: RequestArgs) -> Result<Value, Error> {
        self.client.call(&endpoints::DATABASES_LIST, args).await
    }

    /// Retrieve a database
    pub async fn retrieve(&self, args: RequestArgs) -> Result<Value, Error> {
        self.client.call(&endpoints::DATABASES_RETRIEVE, args).await
    }

    /// Query a database
    pub async fn query(&self, args: RequestArgs) -> Result<Value, Error> {
        self.client.call(&endpoints::DATABASES_QUERY, args).await
    }
}

/// Page operations, via [`Client::pages`].
pub struct Pages<'a> {
    client: &'a Client,
}

impl Pages<'_> {
    /// Create a page
    pub async fn create(&self, args: RequestArgs) -> Result<Value, Error> {
        self.client.call(&endpoints::PAGES_CREATE, args).await
    }

    /// Retrieve a page
    pub async fn retrieve(&self, args: RequestArgs) -> Result<Value, Error> {
        self.client.call(&endpoints::PAGES_RETRIEVE, args).await
    }

    /// Update page properties
    pub async fn update(&self, args: RequestArgs) -> Result<Value, Error> {
        self.client.call(&endpoints::PAGES_UPDATE, args).await
    }
}

/// User operations, via [`Client::users`].
pub struct Users<'a> {
    client: &'a Client,
}

impl Users<'_> {
    /// Retrieve a user
    pub async fn retrieve(&self, args: RequestArgs) -> Result<Value, Error> {
        self.client.call(&endpoints::USERS_RETRIEVE, args).await
    }

    /// List all users
    pub async fn list(&self, args: RequestArgs) -> Result<Value, Error> {
        self.client.call(&endpoints::USERS_LIST, args).await
    }
}

/// Builds the headers every request carries.
fn default_headers(notion_version: &str) -> Result<HeaderMap, Error> {
    let mut headers = HeaderMap::new();
    headers.insert(
        "Notion-Version",
        HeaderValue::from_str(notion_version).map_err(|e| Error::InvalidHeader {
            message: format!("invalid Notion-Version value: {}", e),
        })?,
    );
    Ok(headers)
}

/// Formats a token as an `Authorization` header value, marked sensitive so
/// the transport never prints it.
fn bearer_header(token: &str) -> Result<HeaderValue, Error> {
    let mut value =
        HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|e| Error::InvalidHeader {
            message: format!("invalid bearer token: {}", e),
        })?;
    value.set_sensitive(true);
    Ok(value)
}

/// Renders a path parameter value as a URL segment. IDs are strings in
/// practice; other scalars fall back to their JSON text.
fn path_segment(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
