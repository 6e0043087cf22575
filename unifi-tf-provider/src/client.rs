//! UniFi controller client
//!
//! Implements [`RemoteClient`] against the Network application's classic
//! REST API (`/proxy/network/api/...`). Every response is wrapped in a
//! `{ meta: { rc, msg }, data: [] }` envelope which is stripped here, so
//! controllers only ever see bare wire records.

use std::time::Duration;

use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Method, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::json;
use url::Url;

use unifi_tf_core::codec::WireRecord;
use unifi_tf_core::provider::{
    BoxFuture, ClientError, ClientResult, Endpoint, RemoteClient, WIRE_ID_FIELD,
};

const API_KEY_HEADER: &str = "X-API-KEY";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Global endpoint served by the site manager
pub const SITE_ENDPOINT: &str = "site";

/// Site manager commands are always issued against this site
const MANAGER_SITE: &str = "default";

#[derive(Debug, Deserialize)]
struct Envelope {
    meta: Meta,
    #[serde(default)]
    data: Vec<WireRecord>,
}

#[derive(Debug, Deserialize)]
struct Meta {
    rc: String,
    #[serde(default)]
    msg: Option<String>,
}

/// HTTP client for a single UniFi controller
pub struct UnifiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl UnifiClient {
    /// Build a client for `host`, authenticating every request with `api_key`.
    ///
    /// A host without a scheme is assumed to be `https://`. TLS verification
    /// is only disabled when `allow_insecure` is set.
    pub fn new(host: &str, api_key: &SecretString, allow_insecure: bool) -> ClientResult<Self> {
        let base_url = parse_host(host)?;

        let mut key = HeaderValue::from_str(api_key.expose_secret()).map_err(|_| {
            ClientError::Configuration("API key contains invalid header characters".to_string())
        })?;
        key.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, key);

        if allow_insecure {
            warn!("TLS certificate verification disabled for {}", base_url);
        }

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("unifi-tf-provider/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .danger_accept_invalid_certs(allow_insecure)
            .build()
            .map_err(|e| ClientError::Configuration(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// `{base}/proxy/network/api/{segments}`, each segment percent-encoded
    fn api_url(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::Configuration(format!("{} cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(["proxy", "network", "api"])
            .extend(segments);
        Ok(url)
    }

    /// `{base}/proxy/network/api/s/{site}/{segments}`
    fn site_url(&self, site: &str, segments: &[&str]) -> ClientResult<Url> {
        let mut path = vec!["s", site];
        path.extend_from_slice(segments);
        self.api_url(&path)
    }

    // ── Request helpers ──────────────────────────────────────────────

    async fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<serde_json::Value>,
        endpoint: Endpoint,
        id: &str,
    ) -> ClientResult<Vec<WireRecord>> {
        debug!("{} {}", method, url);

        let mut request = self.http.request(method, url);
        if let Some(body) = &body {
            request = request.json(body);
        }
        let resp = request
            .send()
            .await
            .map_err(|e| ClientError::Http(e.to_string()))?;

        parse_envelope(resp, endpoint, id).await
    }

    // ── Site-scoped collections ──────────────────────────────────────

    async fn get_object(&self, endpoint: Endpoint, site: &str, id: &str) -> ClientResult<WireRecord> {
        require_path_id(endpoint, id)?;
        let url = self.site_url(site, &["rest", endpoint.name(), id])?;
        let records = self.send(Method::GET, url, None, endpoint, id).await?;
        single(records, endpoint, id)
    }

    async fn list_objects(&self, endpoint: Endpoint, site: &str) -> ClientResult<Vec<WireRecord>> {
        let url = self.site_url(site, &["rest", endpoint.name()])?;
        self.send(Method::GET, url, None, endpoint, "").await
    }

    async fn create_object(
        &self,
        endpoint: Endpoint,
        site: &str,
        mut record: WireRecord,
    ) -> ClientResult<WireRecord> {
        // The controller assigns both; sending empty strings is rejected.
        for field in [WIRE_ID_FIELD, "site_id"] {
            if record.get(field).and_then(|v| v.as_str()) == Some("") {
                record.remove(field);
            }
        }
        let url = self.site_url(site, &["rest", endpoint.name()])?;
        let records = self
            .send(Method::POST, url, Some(record.into()), endpoint, "")
            .await?;
        records.into_iter().next().ok_or_else(|| {
            ClientError::InvalidResponse(format!("create on {} returned no object", endpoint))
        })
    }

    async fn update_object(
        &self,
        endpoint: Endpoint,
        site: &str,
        record: WireRecord,
    ) -> ClientResult<WireRecord> {
        let id = require_id(&record)?;
        let url = self.site_url(site, &["rest", endpoint.name(), id.as_str()])?;
        let records = self
            .send(Method::PUT, url, Some(record.into()), endpoint, &id)
            .await?;
        single(records, endpoint, &id)
    }

    async fn delete_object(&self, endpoint: Endpoint, site: &str, id: &str) -> ClientResult<()> {
        require_path_id(endpoint, id)?;
        let url = self.site_url(site, &["rest", endpoint.name(), id])?;
        self.send(Method::DELETE, url, None, endpoint, id).await?;
        Ok(())
    }

    // ── Settings ─────────────────────────────────────────────────────

    async fn get_setting(&self, endpoint: Endpoint, site: &str) -> ClientResult<WireRecord> {
        let key = endpoint.name();
        let url = self.site_url(site, &["get", "setting", key])?;
        let records = self.send(Method::GET, url, None, endpoint, key).await?;
        records
            .into_iter()
            .find(|record| {
                record
                    .get("key")
                    .and_then(|v| v.as_str())
                    .is_none_or(|k| k == key)
            })
            .ok_or_else(|| ClientError::not_found(endpoint, key))
    }

    async fn update_setting(
        &self,
        endpoint: Endpoint,
        site: &str,
        mut record: WireRecord,
    ) -> ClientResult<WireRecord> {
        let key = endpoint.name();
        // A setting document always exists; a first write adopts its ID.
        let id = match record_id(&record) {
            Some(id) => id.to_string(),
            None => {
                let current = self.get_setting(endpoint, site).await?;
                require_id(&current)?
            }
        };
        record.insert(WIRE_ID_FIELD.to_string(), id.clone().into());
        record.insert("key".to_string(), key.into());

        let url = self.site_url(site, &["set", "setting", key, id.as_str()])?;
        let records = self
            .send(Method::PUT, url, Some(record.into()), endpoint, key)
            .await?;
        match records.into_iter().next() {
            Some(updated) => Ok(updated),
            None => self.get_setting(endpoint, site).await,
        }
    }

    // ── Sites ────────────────────────────────────────────────────────

    async fn list_sites(&self, endpoint: Endpoint) -> ClientResult<Vec<WireRecord>> {
        let url = self.api_url(&["self", "sites"])?;
        self.send(Method::GET, url, None, endpoint, "").await
    }

    async fn get_site(&self, endpoint: Endpoint, id: &str) -> ClientResult<WireRecord> {
        self.list_sites(endpoint)
            .await?
            .into_iter()
            .find(|site| record_id(site) == Some(id))
            .ok_or_else(|| ClientError::not_found(endpoint, id))
    }

    async fn site_command(
        &self,
        endpoint: Endpoint,
        site: &str,
        command: serde_json::Value,
    ) -> ClientResult<Vec<WireRecord>> {
        let url = self.site_url(site, &["cmd", "sitemgr"])?;
        self.send(Method::POST, url, Some(command), endpoint, site)
            .await
    }

    async fn create_site(&self, endpoint: Endpoint, record: WireRecord) -> ClientResult<WireRecord> {
        let command = json!({ "cmd": "add-site", "desc": string_field(&record, "desc") });
        let records = self.site_command(endpoint, MANAGER_SITE, command).await?;
        records.into_iter().next().ok_or_else(|| {
            ClientError::InvalidResponse("add-site returned no site".to_string())
        })
    }

    async fn update_site(&self, endpoint: Endpoint, record: WireRecord) -> ClientResult<WireRecord> {
        let id = require_id(&record)?;
        // Site manager commands address a site by its short name.
        let name = match string_field(&record, "name") {
            "" => {
                let current = self.get_site(endpoint, &id).await?;
                string_field(&current, "name").to_string()
            }
            name => name.to_string(),
        };
        let command = json!({ "cmd": "update-site", "desc": string_field(&record, "desc") });
        self.site_command(endpoint, &name, command).await?;
        self.get_site(endpoint, &id).await
    }

    async fn delete_site(&self, endpoint: Endpoint, id: &str) -> ClientResult<()> {
        let command = json!({ "cmd": "delete-site", "site": id });
        self.site_command(endpoint, MANAGER_SITE, command).await?;
        Ok(())
    }
}

impl RemoteClient for UnifiClient {
    fn get(
        &self,
        endpoint: Endpoint,
        scope: &str,
        id: &str,
    ) -> BoxFuture<'_, ClientResult<WireRecord>> {
        let scope = scope.to_string();
        let id = id.to_string();
        Box::pin(async move {
            match endpoint {
                Endpoint::Global(SITE_ENDPOINT) => self.get_site(endpoint, &id).await,
                Endpoint::Global(_) => Err(unsupported(endpoint, "get")),
                Endpoint::Scoped(_) => self.get_object(endpoint, &scope, &id).await,
                Endpoint::Singleton(_) => self.get_setting(endpoint, &scope).await,
            }
        })
    }

    fn list(&self, endpoint: Endpoint, scope: &str) -> BoxFuture<'_, ClientResult<Vec<WireRecord>>> {
        let scope = scope.to_string();
        Box::pin(async move {
            match endpoint {
                Endpoint::Global(SITE_ENDPOINT) => self.list_sites(endpoint).await,
                Endpoint::Global(_) => Err(unsupported(endpoint, "list")),
                Endpoint::Scoped(_) => self.list_objects(endpoint, &scope).await,
                Endpoint::Singleton(_) => Ok(vec![self.get_setting(endpoint, &scope).await?]),
            }
        })
    }

    fn create(
        &self,
        endpoint: Endpoint,
        scope: &str,
        record: WireRecord,
    ) -> BoxFuture<'_, ClientResult<WireRecord>> {
        let scope = scope.to_string();
        Box::pin(async move {
            match endpoint {
                Endpoint::Global(SITE_ENDPOINT) => self.create_site(endpoint, record).await,
                Endpoint::Global(_) => Err(unsupported(endpoint, "create")),
                Endpoint::Scoped(_) => self.create_object(endpoint, &scope, record).await,
                Endpoint::Singleton(_) => self.update_setting(endpoint, &scope, record).await,
            }
        })
    }

    fn update(
        &self,
        endpoint: Endpoint,
        scope: &str,
        record: WireRecord,
    ) -> BoxFuture<'_, ClientResult<WireRecord>> {
        let scope = scope.to_string();
        Box::pin(async move {
            match endpoint {
                Endpoint::Global(SITE_ENDPOINT) => self.update_site(endpoint, record).await,
                Endpoint::Global(_) => Err(unsupported(endpoint, "update")),
                Endpoint::Scoped(_) => self.update_object(endpoint, &scope, record).await,
                Endpoint::Singleton(_) => self.update_setting(endpoint, &scope, record).await,
            }
        })
    }

    fn delete(&self, endpoint: Endpoint, scope: &str, id: &str) -> BoxFuture<'_, ClientResult<()>> {
        let scope = scope.to_string();
        let id = id.to_string();
        Box::pin(async move {
            match endpoint {
                Endpoint::Global(SITE_ENDPOINT) => self.delete_site(endpoint, &id).await,
                Endpoint::Scoped(_) => self.delete_object(endpoint, &scope, &id).await,
                Endpoint::Global(_) | Endpoint::Singleton(_) => Err(unsupported(endpoint, "delete")),
            }
        })
    }
}

/// Parse the `{ meta, data }` envelope, returning `data` on success
async fn parse_envelope(
    resp: reqwest::Response,
    endpoint: Endpoint,
    id: &str,
) -> ClientResult<Vec<WireRecord>> {
    let status = resp.status();

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(ClientError::Authentication(format!(
            "controller returned {}, check the API key",
            status
        )));
    }
    if status == StatusCode::NOT_FOUND {
        return Err(ClientError::not_found(endpoint, id));
    }

    let body = resp
        .text()
        .await
        .map_err(|e| ClientError::Http(e.to_string()))?;

    let envelope: Envelope = match serde_json::from_str(&body) {
        Ok(envelope) => envelope,
        Err(_) if !status.is_success() => {
            return Err(ClientError::Http(format!("{}: {}", status, body)));
        }
        Err(e) => return Err(ClientError::InvalidResponse(e.to_string())),
    };

    match envelope.meta.rc.as_str() {
        "ok" => Ok(envelope.data),
        rc => Err(ClientError::Api {
            rc: rc.to_string(),
            message: envelope.meta.msg.unwrap_or_else(|| format!("rc={}", rc)),
        }),
    }
}

fn parse_host(host: &str) -> ClientResult<Url> {
    let host = host.trim();
    let with_scheme = if host.contains("://") {
        host.to_string()
    } else {
        format!("https://{}", host)
    };
    let url = Url::parse(&with_scheme)
        .map_err(|e| ClientError::Configuration(format!("invalid host {:?}: {}", host, e)))?;
    if url.cannot_be_a_base() || url.host_str().is_none() {
        return Err(ClientError::Configuration(format!(
            "invalid host {:?}: no host name",
            host
        )));
    }
    Ok(url)
}

/// The one record addressed by `id`
fn single(records: Vec<WireRecord>, endpoint: Endpoint, id: &str) -> ClientResult<WireRecord> {
    let count = records.len();
    let mut records = records.into_iter();
    match (records.next(), count) {
        (None, _) => Err(ClientError::not_found(endpoint, id)),
        (Some(record), 1) => Ok(record),
        (Some(_), count) => Err(ClientError::InvalidResponse(format!(
            "expected one {} object for '{}', got {}",
            endpoint, id, count
        ))),
    }
}

fn require_path_id(endpoint: Endpoint, id: &str) -> ClientResult<()> {
    if id.is_empty() {
        return Err(ClientError::InvalidRequest(format!("{} object id is empty", endpoint)));
    }
    Ok(())
}

fn record_id(record: &WireRecord) -> Option<&str> {
    record
        .get(WIRE_ID_FIELD)
        .and_then(|v| v.as_str())
        .filter(|id| !id.is_empty())
}

fn require_id(record: &WireRecord) -> ClientResult<String> {
    record_id(record)
        .map(str::to_string)
        .ok_or_else(|| ClientError::InvalidRequest(format!("record has no {}", WIRE_ID_FIELD)))
}

fn string_field<'a>(record: &'a WireRecord, field: &str) -> &'a str {
    record.get(field).and_then(|v| v.as_str()).unwrap_or_default()
}

fn unsupported(endpoint: Endpoint, operation: &str) -> ClientError {
    ClientError::InvalidRequest(format!("{} is not supported on {}", operation, endpoint))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(host: &str) -> UnifiClient {
        UnifiClient::new(host, &SecretString::from("secret".to_string()), false).unwrap()
    }

    #[test]
    fn host_without_scheme_defaults_to_https() {
        assert_eq!(client("192.168.1.1").base_url().as_str(), "https://192.168.1.1/");
        assert_eq!(
            client("http://unifi.local:8443").base_url().as_str(),
            "http://unifi.local:8443/"
        );
    }

    #[test]
    fn rejects_unusable_host() {
        let err = UnifiClient::new("https://", &SecretString::from("secret".to_string()), false)
            .err()
            .unwrap();
        assert!(matches!(err, ClientError::Configuration(_)));
    }

    #[test]
    fn rejects_api_key_with_newline() {
        let err = UnifiClient::new("unifi.local", &SecretString::from("bad\nkey".to_string()), false)
            .err()
            .unwrap();
        assert_eq!(
            err.to_string(),
            "Invalid client configuration: API key contains invalid header characters"
        );
    }

    #[test]
    fn builds_site_scoped_urls() {
        let client = client("https://unifi.local/");
        assert_eq!(
            client.site_url("default", &["rest", "networkconf"]).unwrap().as_str(),
            "https://unifi.local/proxy/network/api/s/default/rest/networkconf"
        );
        assert_eq!(
            client.api_url(&["self", "sites"]).unwrap().as_str(),
            "https://unifi.local/proxy/network/api/self/sites"
        );
    }

    #[test]
    fn url_segments_are_percent_encoded() {
        let client = client("https://unifi.local/");
        assert_eq!(
            client
                .site_url("lab/a b", &["rest", "usergroup", "g1?x#y"])
                .unwrap()
                .as_str(),
            "https://unifi.local/proxy/network/api/s/lab%2Fa%20b/rest/usergroup/g1%3Fx%23y"
        );
    }

    #[test]
    fn keeps_base_path_prefix() {
        let client = client("https://gateway.local/unifi/");
        assert_eq!(
            client.api_url(&["self", "sites"]).unwrap().as_str(),
            "https://gateway.local/unifi/proxy/network/api/self/sites"
        );
    }

    #[test]
    fn single_requires_exactly_one_record() {
        let endpoint = Endpoint::Scoped("usergroup");
        let record: WireRecord = json!({ "_id": "g1" }).as_object().cloned().unwrap();

        assert!(single(vec![record.clone()], endpoint, "g1").is_ok());
        assert!(single(vec![], endpoint, "g1").unwrap_err().is_not_found());
        assert!(matches!(
            single(vec![record.clone(), record], endpoint, "g1"),
            Err(ClientError::InvalidResponse(_))
        ));
    }

    #[test]
    fn empty_id_is_not_an_id() {
        let record: WireRecord = json!({ "_id": "" }).as_object().cloned().unwrap();
        assert_eq!(record_id(&record), None);
        assert!(matches!(
            require_id(&record),
            Err(ClientError::InvalidRequest(_))
        ));
    }
}
