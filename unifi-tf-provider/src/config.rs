//! Provider configuration
//!
//! Resolves the controller host, API key and TLS setting from the provider
//! configuration record, falling back to `UNIFI_HOST` / `UNIFI_API_KEY`.

use std::collections::HashMap;
use std::fmt;

use secrecy::SecretString;

use unifi_tf_core::diagnostics::{Diagnostic, Diagnostics};
use unifi_tf_core::resource::{State, Value};
use unifi_tf_core::schema::{AttributeSchema, AttributeType, ResourceSchema, TypeError};

pub const HOST_ATTRIBUTE: &str = "host";
pub const API_KEY_ATTRIBUTE: &str = "api_key";
pub const ALLOW_INSECURE_ATTRIBUTE: &str = "allow_insecure";

pub const HOST_ENV: &str = "UNIFI_HOST";
pub const API_KEY_ENV: &str = "UNIFI_API_KEY";

/// Source of environment variables
pub trait EnvSource {
    fn var(&self, name: &str) -> Option<String>;
}

/// The process environment
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Schema of the provider configuration block
pub fn provider_schema() -> ResourceSchema {
    ResourceSchema::new("unifi")
        .with_description("Manage UniFi Network controller objects")
        .attribute(
            AttributeSchema::new(HOST_ATTRIBUTE, AttributeType::String)
                .with_description("URL of the UniFi controller. May also be set with UNIFI_HOST."),
        )
        .attribute(
            AttributeSchema::new(API_KEY_ATTRIBUTE, AttributeType::String)
                .sensitive()
                .with_description("API key for the UniFi controller. May also be set with UNIFI_API_KEY."),
        )
        .attribute(
            AttributeSchema::new(ALLOW_INSECURE_ATTRIBUTE, AttributeType::Bool)
                .with_description("Skip TLS certificate verification. Defaults to false."),
        )
}

/// Settings needed to build a UniFi client
pub struct ProviderConfig {
    pub host: String,
    pub api_key: SecretString,
    pub allow_insecure: bool,
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("host", &self.host)
            .field("api_key", &"[REDACTED]")
            .field("allow_insecure", &self.allow_insecure)
            .finish()
    }
}

impl ProviderConfig {
    /// Resolve settings: explicit config values win over the environment.
    ///
    /// Unknown values are rejected before anything else is looked at, and
    /// every missing setting is reported, not only the first.
    pub fn resolve(config: &State, env: &dyn EnvSource) -> Result<Self, Diagnostics> {
        let mut diagnostics = check_types(config);
        if diagnostics.has_error() {
            return Err(diagnostics);
        }

        if is_unknown(config, HOST_ATTRIBUTE) {
            diagnostics.add_attribute_error(
                HOST_ATTRIBUTE,
                "Unknown Unifi Host",
                "The provider cannot create the Unifi API client as there is an unknown configuration value for the Unifi host. \
                 Either target apply the source of the value first, set the value statically in the configuration, or use the UNIFI_HOST environment variable.",
            );
        }
        if is_unknown(config, API_KEY_ATTRIBUTE) {
            diagnostics.add_attribute_error(
                API_KEY_ATTRIBUTE,
                "Unknown Unifi API Key",
                "The provider cannot create the Unifi API client as there is an unknown configuration value for the Unifi API Key. \
                 Either target apply the source of the value first, set the value statically in the configuration, or use the UNIFI_API_KEY environment variable.",
            );
        }
        if diagnostics.has_error() {
            return Err(diagnostics);
        }

        let host = config
            .known_str(HOST_ATTRIBUTE)
            .map(str::to_string)
            .or_else(|| env.var(HOST_ENV))
            .unwrap_or_default();
        let api_key = config
            .known_str(API_KEY_ATTRIBUTE)
            .map(str::to_string)
            .or_else(|| env.var(API_KEY_ENV))
            .unwrap_or_default();
        let allow_insecure = config
            .get(ALLOW_INSECURE_ATTRIBUTE)
            .and_then(Value::as_bool)
            .unwrap_or(false);

        if host.is_empty() {
            diagnostics.add_attribute_error(
                HOST_ATTRIBUTE,
                "Missing Unifi Host",
                "The provider cannot create the Unifi API client as there is a missing or empty value for the Unifi host. \
                 Set the host value in the configuration or use the UNIFI_HOST environment variable. \
                 If either is already set, ensure the value is not empty.",
            );
        }
        if api_key.is_empty() {
            diagnostics.add_attribute_error(
                API_KEY_ATTRIBUTE,
                "Missing Unifi API Key",
                "The provider cannot create the Unifi API client as there is a missing or empty value for the Unifi API key. \
                 Set the API key value in the configuration or use the UNIFI_API_KEY environment variable. \
                 If either is already set, ensure the value is not empty.",
            );
        }
        if diagnostics.has_error() {
            return Err(diagnostics);
        }

        Ok(Self {
            host,
            api_key: SecretString::from(api_key),
            allow_insecure,
        })
    }
}

/// Type-check the attributes present in `config`; absent ones count as null
fn check_types(config: &State) -> Diagnostics {
    let schema = provider_schema();
    config
        .attributes
        .iter()
        .filter_map(|(name, value)| {
            let error = match schema.get(name) {
                Some(attr) => attr.attr_type.validate(value).err().map(|inner| {
                    TypeError::AttributeError {
                        name: name.clone(),
                        inner: Box::new(inner),
                    }
                })?,
                None => TypeError::ExtraAttribute { name: name.clone() },
            };
            Some(Diagnostic::from(error))
        })
        .collect()
}

fn is_unknown(config: &State, attribute: &str) -> bool {
    config.get(attribute).is_some_and(Value::is_unknown)
}
