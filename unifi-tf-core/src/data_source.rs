//! Data source - Read-only lookups of remote objects

use std::sync::Arc;

use heck::ToTitleCase;
use log::info;

use crate::codec;
use crate::controller::{Response, resolve_scope, unconfigured_client};
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::provider::{ClientError, Endpoint, RemoteClient};
use crate::resource::{State, Value};
use crate::schema::{AttributeType, ID_ATTRIBUTE, ResourceSchema, SCOPE_ATTRIBUTE};

/// How a data source locates its remote object(s)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// By `id`
    Id,
    /// By `id` when known, otherwise by the attribute named `name_field`
    IdOrName { name_field: &'static str },
    /// The site's settings document
    Singleton,
    /// Every object of the endpoint, collected into a list attribute
    List { attribute: &'static str },
}

#[derive(Debug, Clone)]
pub struct DataSourceConfig {
    pub endpoint: Endpoint,
    pub schema: ResourceSchema,
    pub lookup: Lookup,
}

impl DataSourceConfig {
    pub fn new(endpoint: Endpoint, schema: ResourceSchema, lookup: Lookup) -> Self {
        Self {
            endpoint,
            schema,
            lookup,
        }
    }
}

pub struct DataSource {
    config: DataSourceConfig,
    client: Option<Arc<dyn RemoteClient>>,
}

impl DataSource {
    pub fn new(config: DataSourceConfig) -> Self {
        Self {
            config,
            client: None,
        }
    }

    pub fn config(&self) -> &DataSourceConfig {
        &self.config
    }

    pub fn schema(&self) -> &ResourceSchema {
        &self.config.schema
    }

    pub fn display_name(&self) -> String {
        self.config.schema.resource_type.to_title_case()
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    /// Bind the remote client; `None` leaves the data source as it is
    pub fn configure(&mut self, client: Option<Arc<dyn RemoteClient>>) {
        if let Some(client) = client {
            self.client = Some(client);
        }
    }

    pub async fn read(&self, config: &State) -> Response {
        let kind = self.display_name();
        let Some(client) = self.client.as_ref() else {
            return Response::failed(unconfigured_client(&kind));
        };

        if let Err(errors) = self.config.schema.validate(config) {
            let diagnostics: Diagnostics = errors.into_iter().map(Diagnostic::from).collect();
            return Response::failed(diagnostics);
        }

        let scope = resolve_scope(config);
        let endpoint = self.config.endpoint;
        info!("reading {} data source in site {}", kind, scope);

        let unable = |err: ClientError| {
            Response::failed(Diagnostic::error(format!("Unable to read {}", kind), err.to_string()))
        };

        let mut state = match &self.config.lookup {
            Lookup::List { attribute } => {
                let records = match client.list(endpoint, &scope).await {
                    Ok(records) => records,
                    Err(err) => return unable(err),
                };
                match self.decode_list(attribute, &records) {
                    Ok(items) => self.config.schema.null_state().with_attribute(*attribute, items),
                    Err(diagnostic) => return Response::failed(diagnostic),
                }
            }
            lookup => {
                let id = config.known_str(ID_ATTRIBUTE).filter(|id| !id.is_empty());
                let result = match (lookup, id) {
                    (Lookup::Singleton, _) => client.get(endpoint, &scope, "").await,
                    (_, Some(id)) => client.get(endpoint, &scope, id).await,
                    (Lookup::IdOrName { name_field }, None) => {
                        let Some(name) = config.known_str(name_field) else {
                            return Response::failed(
                                Diagnostic::error(
                                    "Id and Name are null or unknown",
                                    format!("Id or Name is required to retrieve a {}.", kind),
                                )
                                .with_attribute(ID_ATTRIBUTE),
                            );
                        };
                        let wire_field = self
                            .config
                            .schema
                            .get(name_field)
                            .map(|attr| attr.wire_name())
                            .unwrap_or(*name_field);
                        client.find(endpoint, &scope, wire_field, name).await
                    }
                    _ => {
                        return Response::failed(
                            Diagnostic::error(
                                "Missing Id",
                                format!("Id is required to retrieve a {}.", kind),
                            )
                            .with_attribute(ID_ATTRIBUTE),
                        );
                    }
                };
                let wire = match result {
                    Ok(wire) => wire,
                    Err(err) => return unable(err),
                };
                match codec::decode(&self.config.schema, &wire) {
                    Ok(decoded) => decoded,
                    Err(err) => return Response::failed(Diagnostic::from(err)),
                }
            }
        };

        for attr in self.config.schema.local_attributes() {
            let value = if attr.name == SCOPE_ATTRIBUTE {
                Value::string(&scope)
            } else {
                config.get(&attr.name).cloned().unwrap_or(Value::Null)
            };
            state.set(attr.name.clone(), value);
        }
        Response::ok(state)
    }

    fn decode_list(
        &self,
        attribute: &str,
        records: &[codec::WireRecord],
    ) -> Result<Value, Diagnostic> {
        let attrs = match self.config.schema.get(attribute).map(|a| &a.attr_type) {
            Some(AttributeType::List(inner)) => match inner.as_ref() {
                AttributeType::Object(attrs) => attrs,
                _ => return Err(invalid_list_schema(attribute)),
            },
            _ => return Err(invalid_list_schema(attribute)),
        };

        records
            .iter()
            .enumerate()
            .map(|(i, record)| {
                codec::decode_object(attrs, record).map(Value::Object).map_err(|err| {
                    let mut diagnostic = Diagnostic::from(err);
                    diagnostic.detail = format!("{}[{}]: {}", attribute, i, diagnostic.detail);
                    diagnostic.attribute = Some(attribute.to_string());
                    diagnostic
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Value::List)
    }
}

fn invalid_list_schema(attribute: &str) -> Diagnostic {
    Diagnostic::error(
        "Invalid Data Source Schema",
        format!("Attribute '{}' must be a list of objects", attribute),
    )
    .with_attribute(attribute)
}
