//! UniFi provider registry
//!
//! Owns one controller per resource kind and one reader per data source,
//! and hands them the UniFi client once the provider is configured.

use std::collections::BTreeMap;
use std::sync::Arc;

use log::{debug, info};

use unifi_tf_core::controller::Controller;
use unifi_tf_core::data_source::DataSource;
use unifi_tf_core::diagnostics::{Diagnostic, Diagnostics};
use unifi_tf_core::provider::RemoteClient;
use unifi_tf_core::resource::State;
use unifi_tf_core::schema::ResourceSchema;

use crate::client::UnifiClient;
use crate::config::{EnvSource, ProcessEnv, ProviderConfig, provider_schema};
use crate::resources::{data_source_configs, resource_configs};

/// Prefix of every resource and data source type name
pub const PROVIDER_NAME: &str = "unifi";

pub struct UnifiProvider {
    version: String,
    resources: BTreeMap<String, Controller>,
    data_sources: BTreeMap<String, DataSource>,
    client: Option<Arc<dyn RemoteClient>>,
}

impl UnifiProvider {
    /// Create a provider with every resource and data source registered
    pub fn new(version: impl Into<String>) -> Self {
        let resources = resource_configs()
            .into_iter()
            .map(|config| (type_name(&config.schema.resource_type), Controller::new(config)))
            .collect();
        let data_sources = data_source_configs()
            .into_iter()
            .map(|(name, config)| (type_name(name), DataSource::new(config)))
            .collect();

        Self {
            version: version.into(),
            resources,
            data_sources,
            client: None,
        }
    }

    pub fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Schema of the provider configuration block
    pub fn schema(&self) -> ResourceSchema {
        provider_schema()
    }

    /// Configure from `config` and the process environment
    pub fn configure(&mut self, config: &State) -> Diagnostics {
        self.configure_with_env(config, &ProcessEnv)
    }

    /// Resolve settings, build the UniFi client and bind it everywhere
    ///
    /// On error diagnostics the provider keeps whatever client it had.
    pub fn configure_with_env(&mut self, config: &State, env: &dyn EnvSource) -> Diagnostics {
        info!("Configuring Unifi client");

        let settings = match ProviderConfig::resolve(config, env) {
            Ok(settings) => settings,
            Err(diagnostics) => return diagnostics,
        };

        debug!(
            "Creating Unifi client (host={}, allow_insecure={})",
            settings.host, settings.allow_insecure
        );
        let client = match UnifiClient::new(&settings.host, &settings.api_key, settings.allow_insecure)
        {
            Ok(client) => client,
            Err(err) => {
                return Diagnostic::error(
                    "Unable to create Unifi API Client",
                    format!(
                        "An unexpected error occurred when creating the Unifi API client. \
                         If the error is not clear, please contact the provider developers.\n\n\
                         Unifi Client Error: {}",
                        err
                    ),
                )
                .into();
            }
        };

        self.inject(Arc::new(client));
        info!("Configured Unifi client");
        Diagnostics::new()
    }

    /// Bind `client` to every resource and data source
    pub fn inject(&mut self, client: Arc<dyn RemoteClient>) {
        for controller in self.resources.values_mut() {
            controller.configure(Some(Arc::clone(&client)));
        }
        for data_source in self.data_sources.values_mut() {
            data_source.configure(Some(Arc::clone(&client)));
        }
        self.client = Some(client);
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    /// Look up a resource by type name, e.g. `unifi_network`
    pub fn resource(&self, type_name: &str) -> Option<&Controller> {
        self.resources.get(type_name)
    }

    /// Look up a data source by type name, e.g. `unifi_networks`
    pub fn data_source(&self, type_name: &str) -> Option<&DataSource> {
        self.data_sources.get(type_name)
    }

    pub fn resource_type_names(&self) -> impl Iterator<Item = &str> {
        self.resources.keys().map(String::as_str)
    }

    pub fn data_source_type_names(&self) -> impl Iterator<Item = &str> {
        self.data_sources.keys().map(String::as_str)
    }
}

fn type_name(kind: &str) -> String {
    format!("{}_{}", PROVIDER_NAME, kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_prefixed_type_names() {
        let provider = UnifiProvider::new("test");
        let resources: Vec<_> = provider.resource_type_names().collect();
        assert_eq!(
            resources,
            vec![
                "unifi_account",
                "unifi_dynamic_dns",
                "unifi_firewall_group",
                "unifi_firewall_rule",
                "unifi_network",
                "unifi_port_forward",
                "unifi_setting_mgmt",
                "unifi_setting_radius",
                "unifi_site",
                "unifi_static_route",
                "unifi_user_group",
            ]
        );
        assert!(provider.data_source("unifi_sites").is_some());
        assert!(provider.data_source("unifi_setting_radius").is_some());
        assert_eq!(provider.data_source_type_names().count(), 20);
    }

    #[test]
    fn starts_unconfigured() {
        let provider = UnifiProvider::new("test");
        assert!(!provider.is_configured());
        assert_eq!(provider.version(), "test");
        assert!(!provider.resource("unifi_network").unwrap().is_configured());
    }

    #[test]
    fn provider_schema_marks_api_key_sensitive() {
        let schema = UnifiProvider::new("test").schema();
        assert!(schema.get("api_key").unwrap().sensitive);
        assert!(!schema.get("host").unwrap().sensitive);
    }
}
