//! Provider - Trait abstracting the remote API
//!
//! A `RemoteClient` performs the wire-level operations for every resource
//! kind. Controllers hold it behind an `Arc` and never see HTTP details.

use std::fmt;
use std::future::Future;
use std::pin::Pin;

use crate::codec::WireRecord;

/// Wire field holding the remote object ID
pub const WIRE_ID_FIELD: &str = "_id";

/// Where a resource kind lives on the remote API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Controller-wide collection, not site scoped (e.g., "site")
    Global(&'static str),
    /// Site-scoped collection (e.g., "networkconf")
    Scoped(&'static str),
    /// Site-scoped settings document (e.g., "mgmt")
    Singleton(&'static str),
}

impl Endpoint {
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::Global(name) | Endpoint::Scoped(name) | Endpoint::Singleton(name) => name,
        }
    }

    pub fn is_scoped(&self) -> bool {
        !matches!(self, Endpoint::Global(_))
    }

    pub fn is_singleton(&self) -> bool {
        matches!(self, Endpoint::Singleton(_))
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Global(name) => write!(f, "{}", name),
            Endpoint::Scoped(name) => write!(f, "rest/{}", name),
            Endpoint::Singleton(name) => write!(f, "setting/{}", name),
        }
    }
}

/// Error type for remote operations
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("{endpoint} object '{id}' not found")]
    NotFound { endpoint: String, id: String },

    #[error("API error ({rc}): {message}")]
    Api { rc: String, message: String },

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid client configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    pub fn not_found(endpoint: Endpoint, id: impl Into<String>) -> Self {
        ClientError::NotFound {
            endpoint: endpoint.to_string(),
            id: id.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::NotFound { .. })
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Return type for async operations
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Wire-level operations against the remote API
///
/// `scope` is the site name; it is ignored for `Endpoint::Global`.
/// Records passed to `update` carry the object ID under [`WIRE_ID_FIELD`].
pub trait RemoteClient: Send + Sync {
    /// Fetch one object. For singleton endpoints `id` is ignored.
    fn get(
        &self,
        endpoint: Endpoint,
        scope: &str,
        id: &str,
    ) -> BoxFuture<'_, ClientResult<WireRecord>>;

    fn list(&self, endpoint: Endpoint, scope: &str) -> BoxFuture<'_, ClientResult<Vec<WireRecord>>>;

    /// Create an object and return the record as stored remotely
    fn create(
        &self,
        endpoint: Endpoint,
        scope: &str,
        record: WireRecord,
    ) -> BoxFuture<'_, ClientResult<WireRecord>>;

    /// Replace an object and return the record as stored remotely
    fn update(
        &self,
        endpoint: Endpoint,
        scope: &str,
        record: WireRecord,
    ) -> BoxFuture<'_, ClientResult<WireRecord>>;

    fn delete(&self, endpoint: Endpoint, scope: &str, id: &str) -> BoxFuture<'_, ClientResult<()>>;

    /// Find the first object whose string field `field` equals `value`
    fn find(
        &self,
        endpoint: Endpoint,
        scope: &str,
        field: &str,
        value: &str,
    ) -> BoxFuture<'_, ClientResult<WireRecord>> {
        let scope = scope.to_string();
        let field = field.to_string();
        let value = value.to_string();
        Box::pin(async move {
            let records = self.list(endpoint, &scope).await?;
            records
                .into_iter()
                .find(|record| {
                    record.get(&field).and_then(|v| v.as_str()) == Some(value.as_str())
                })
                .ok_or_else(|| ClientError::not_found(endpoint, format!("{}={}", field, value)))
        })
    }
}
