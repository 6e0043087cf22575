//! Controller - Generic CRUD lifecycle for schema-described resources
//!
//! Every resource kind is driven by the same `Controller`; what differs per
//! kind is its `ResourceConfig`.

use std::sync::Arc;

use heck::ToTitleCase;
use log::{debug, info, warn};

use crate::codec;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::provider::{Endpoint, RemoteClient};
use crate::resource::{ResourceIdentity, State, Value};
use crate::schema::{
    AttributeSchema, AttributeType, DEFAULT_SCOPE, ID_ATTRIBUTE, IdentityShape,
    LAST_UPDATED_ATTRIBUTE, ResourceSchema, SCOPE_ATTRIBUTE,
};

/// `last_updated` layout (RFC 850)
const LAST_UPDATED_FORMAT: &str = "%A, %d-%b-%y %H:%M:%S UTC";

/// Per-kind configuration of a controller
#[derive(Debug, Clone)]
pub struct ResourceConfig {
    pub endpoint: Endpoint,
    pub schema: ResourceSchema,
    /// Create by updating an object that always exists (settings)
    pub create_via_update: bool,
    /// Whether `delete` removes the remote object
    pub deletable: bool,
}

impl ResourceConfig {
    pub fn new(endpoint: Endpoint, schema: ResourceSchema) -> Self {
        Self {
            endpoint,
            schema,
            create_via_update: false,
            deletable: true,
        }
    }

    /// Settings documents: created via update, never deleted
    pub fn singleton(endpoint: Endpoint, schema: ResourceSchema) -> Self {
        Self {
            endpoint,
            schema,
            create_via_update: true,
            deletable: false,
        }
    }
}

/// Result of a host-facing operation
///
/// `state` is `None` whenever `diagnostics` holds an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Response {
    pub state: Option<State>,
    pub diagnostics: Diagnostics,
}

impl Response {
    pub fn ok(state: State) -> Self {
        Self {
            state: Some(state),
            diagnostics: Diagnostics::new(),
        }
    }

    pub fn failed(diagnostics: impl Into<Diagnostics>) -> Self {
        let diagnostics = diagnostics.into();
        for diagnostic in diagnostics.errors() {
            warn!("{}", diagnostic);
        }
        Self {
            state: None,
            diagnostics,
        }
    }
}

pub(crate) fn unconfigured_client(kind: &str) -> Diagnostic {
    Diagnostic::error(
        "Unconfigured Client",
        format!(
            "Expected a configured UniFi API client before operating on {}. \
             Please report this issue to the provider developers.",
            kind
        ),
    )
}

/// Site a record belongs to, falling back to the default site
pub(crate) fn resolve_scope(state: &State) -> String {
    state
        .known_str(SCOPE_ATTRIBUTE)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_SCOPE)
        .to_string()
}

pub(crate) fn last_updated_stamp() -> String {
    chrono::Utc::now().format(LAST_UPDATED_FORMAT).to_string()
}

#[derive(Debug, Clone, Copy)]
enum WriteOp {
    Create,
    Update,
}

impl WriteOp {
    fn verb(self) -> &'static str {
        match self {
            WriteOp::Create => "create",
            WriteOp::Update => "update",
        }
    }

    fn progressive(self) -> &'static str {
        match self {
            WriteOp::Create => "creating",
            WriteOp::Update => "updating",
        }
    }
}

/// CRUD controller for one resource kind
pub struct Controller {
    config: ResourceConfig,
    client: Option<Arc<dyn RemoteClient>>,
}

impl Controller {
    pub fn new(config: ResourceConfig) -> Self {
        Self {
            config,
            client: None,
        }
    }

    pub fn config(&self) -> &ResourceConfig {
        &self.config
    }

    pub fn schema(&self) -> &ResourceSchema {
        &self.config.schema
    }

    /// Human-readable kind name used in diagnostics (e.g., "Firewall Group")
    pub fn display_name(&self) -> String {
        self.config.schema.resource_type.to_title_case()
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    /// Bind the remote client; `None` leaves the controller as it is
    pub fn configure(&mut self, client: Option<Arc<dyn RemoteClient>>) {
        if let Some(client) = client {
            self.client = Some(client);
        }
    }

    fn client(&self) -> Result<&Arc<dyn RemoteClient>, Diagnostic> {
        self.client
            .as_ref()
            .ok_or_else(|| unconfigured_client(&self.display_name()))
    }

    pub async fn create(&self, plan: &State) -> Response {
        self.write(plan, WriteOp::Create).await
    }

    pub async fn update(&self, plan: &State) -> Response {
        self.write(plan, WriteOp::Update).await
    }

    async fn write(&self, plan: &State, op: WriteOp) -> Response {
        let kind = self.display_name();
        let client = match self.client() {
            Ok(client) => client,
            Err(diagnostic) => return Response::failed(diagnostic),
        };

        if let Err(errors) = self.config.schema.validate(plan) {
            let diagnostics: Diagnostics = errors.into_iter().map(Diagnostic::from).collect();
            return Response::failed(diagnostics);
        }

        let scope = resolve_scope(plan);
        info!("{} {} in site {}", op.progressive(), kind, scope);

        let record = match codec::encode(&self.config.schema, &self.resolve_computed(plan)) {
            Ok(record) => record,
            Err(err) => return Response::failed(Diagnostic::from(err)),
        };

        let endpoint = self.config.endpoint;
        debug!("{} {} ({} fields)", op.verb(), endpoint, record.len());
        let result = match op {
            WriteOp::Create if !self.config.create_via_update => {
                client.create(endpoint, &scope, record).await
            }
            _ => client.update(endpoint, &scope, record).await,
        };
        let wire = match result {
            Ok(wire) => wire,
            Err(err) => {
                return Response::failed(Diagnostic::error(
                    format!("Error {} {}", op.progressive(), kind),
                    format!("Could not {} {}, unexpected error: {}", op.verb(), kind, err),
                ));
            }
        };

        match codec::decode(&self.config.schema, &wire) {
            Ok(decoded) => Response::ok(self.merge_local(decoded, plan, &scope, true)),
            Err(err) => Response::failed(Diagnostic::from(err)),
        }
    }

    pub async fn read(&self, prior: &State) -> Response {
        let kind = self.display_name();
        let client = match self.client() {
            Ok(client) => client,
            Err(diagnostic) => return Response::failed(diagnostic),
        };

        let (scope, id) = match self.identity(prior) {
            Ok(identity) => identity,
            Err(diagnostic) => return Response::failed(diagnostic),
        };
        info!("reading {} {} in site {}", kind, id, scope);

        let wire = match client.get(self.config.endpoint, &scope, &id).await {
            Ok(wire) => wire,
            Err(err) => {
                return Response::failed(Diagnostic::error(
                    format!("Error reading {}", kind),
                    format!("Could not read {} ID {}; {}", kind, id, err),
                ));
            }
        };

        match codec::decode(&self.config.schema, &wire) {
            Ok(decoded) => Response::ok(self.merge_local(decoded, prior, &scope, false)),
            Err(err) => Response::failed(Diagnostic::from(err)),
        }
    }

    pub async fn delete(&self, prior: &State) -> Diagnostics {
        let kind = self.display_name();
        if !self.config.deletable {
            debug!("{} is not deletable, dropping it from state only", kind);
            return Diagnostics::new();
        }

        let client = match self.client() {
            Ok(client) => client,
            Err(diagnostic) => return Response::failed(diagnostic).diagnostics,
        };
        let (scope, id) = match self.identity(prior) {
            Ok(identity) => identity,
            Err(diagnostic) => return Response::failed(diagnostic).diagnostics,
        };
        info!("deleting {} {} in site {}", kind, id, scope);

        match client.delete(self.config.endpoint, &scope, &id).await {
            Ok(()) => Diagnostics::new(),
            Err(err) => {
                Response::failed(Diagnostic::error(
                    format!("Error deleting {}", kind),
                    format!("Could not delete {}, unexpected error: {}", kind, err),
                ))
                .diagnostics
            }
        }
    }

    /// Build a skeleton state from an import identifier
    ///
    /// Only identity attributes are set; a following `read` fills the rest.
    pub fn import_state(&self, raw: &str) -> Response {
        let mut state = self.config.schema.null_state();
        match self.config.schema.identity {
            IdentityShape::Composite => match ResourceIdentity::parse_composite(raw) {
                Ok(ResourceIdentity::Composite { scope, id }) => {
                    state.set(SCOPE_ATTRIBUTE, scope);
                    state.set(ID_ATTRIBUTE, id);
                }
                Ok(ResourceIdentity::Simple(id)) => state.set(ID_ATTRIBUTE, id),
                Err(err) => {
                    return Response::failed(Diagnostic::error(
                        "Unexpected Import Identifier",
                        err.to_string(),
                    ));
                }
            },
            IdentityShape::Simple => state.set(ID_ATTRIBUTE, raw),
        }
        Response::ok(state)
    }

    /// Site and ID addressing the remote object of a record
    ///
    /// Singleton settings are addressed by site alone.
    fn identity(&self, state: &State) -> Result<(String, String), Diagnostic> {
        let scope = resolve_scope(state);
        match state.known_str(ID_ATTRIBUTE).filter(|id| !id.is_empty()) {
            Some(id) => Ok((scope, id.to_string())),
            None if self.config.endpoint.is_singleton() => Ok((scope, String::new())),
            None => Err(Diagnostic::error(
                "Missing Resource Identity",
                format!("{} record has no known id", self.display_name()),
            )
            .with_attribute(ID_ATTRIBUTE)),
        }
    }

    /// Computed attributes still unknown in a plan are sent as unset,
    /// including computed members of nested objects
    fn resolve_computed(&self, plan: &State) -> State {
        let mut state = plan.clone();
        for (name, value) in state.attributes.iter_mut() {
            if let Some(attr) = self.config.schema.get(name) {
                clear_unknown_computed(attr, value);
            }
        }
        state
    }

    fn merge_local(&self, decoded: State, source: &State, scope: &str, stamp: bool) -> State {
        let mut state = decoded;
        for attr in self.config.schema.local_attributes() {
            let value = match attr.name.as_str() {
                SCOPE_ATTRIBUTE => Value::string(scope),
                LAST_UPDATED_ATTRIBUTE if stamp && self.config.schema.tracks_last_updated => {
                    Value::String(last_updated_stamp())
                }
                name => match source.get(name) {
                    Some(value) if !value.is_unknown() => value.clone(),
                    _ => Value::Null,
                },
            };
            state.set(attr.name.clone(), value);
        }
        state
    }
}

fn clear_unknown_computed(attr: &AttributeSchema, value: &mut Value) {
    if value.is_unknown() && attr.is_computed() {
        *value = Value::Null;
    } else {
        clear_unknown_members(&attr.attr_type, value);
    }
}

fn clear_unknown_members(attr_type: &AttributeType, value: &mut Value) {
    match (attr_type.base_type(), value) {
        (AttributeType::List(inner), Value::List(items)) => {
            for item in items {
                clear_unknown_members(inner, item);
            }
        }
        (AttributeType::Object(members), Value::Object(fields)) => {
            for member in members {
                if let Some(field) = fields.get_mut(&member.name) {
                    clear_unknown_computed(member, field);
                }
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use serde_json::json;

    use super::*;
    use crate::codec::WireRecord;
    use crate::provider::{BoxFuture, ClientError, ClientResult, WIRE_ID_FIELD};

    /// In-memory remote API recording every call
    #[derive(Default)]
    struct MemoryClient {
        objects: Mutex<HashMap<(String, String), WireRecord>>,
        calls: Mutex<Vec<String>>,
        fail_with: Option<String>,
    }

    impl MemoryClient {
        fn failing(message: &str) -> Self {
            Self {
                fail_with: Some(message.to_string()),
                ..Self::default()
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn insert(&self, scope: &str, record: serde_json::Value) {
            let record = record.as_object().cloned().unwrap();
            let id = record[WIRE_ID_FIELD].as_str().unwrap().to_string();
            self.objects
                .lock()
                .unwrap()
                .insert((scope.to_string(), id), record);
        }

        fn record_call(&self, call: String) -> ClientResult<()> {
            self.calls.lock().unwrap().push(call);
            match &self.fail_with {
                Some(message) => Err(ClientError::Api {
                    rc: "error".to_string(),
                    message: message.clone(),
                }),
                None => Ok(()),
            }
        }
    }

    impl RemoteClient for MemoryClient {
        fn get(
            &self,
            endpoint: Endpoint,
            scope: &str,
            id: &str,
        ) -> BoxFuture<'_, ClientResult<WireRecord>> {
            let id = id.to_string();
            let key = (
                scope.to_string(),
                if id.is_empty() { "singleton".to_string() } else { id.clone() },
            );
            Box::pin(async move {
                self.record_call(format!("get {} {}", endpoint, id))?;
                self.objects
                    .lock()
                    .unwrap()
                    .get(&key)
                    .cloned()
                    .ok_or_else(|| ClientError::not_found(endpoint, id.clone()))
            })
        }

        fn list(
            &self,
            endpoint: Endpoint,
            scope: &str,
        ) -> BoxFuture<'_, ClientResult<Vec<WireRecord>>> {
            let scope = scope.to_string();
            Box::pin(async move {
                self.record_call(format!("list {}", endpoint))?;
                Ok(self
                    .objects
                    .lock()
                    .unwrap()
                    .iter()
                    .filter(|((s, _), _)| *s == scope)
                    .map(|(_, record)| record.clone())
                    .collect())
            })
        }

        fn create(
            &self,
            endpoint: Endpoint,
            scope: &str,
            mut record: WireRecord,
        ) -> BoxFuture<'_, ClientResult<WireRecord>> {
            let scope = scope.to_string();
            Box::pin(async move {
                self.record_call(format!("create {}", endpoint))?;
                record.insert(WIRE_ID_FIELD.to_string(), json!("generated-1"));
                record.insert("site_id".to_string(), json!("site-1"));
                self.objects
                    .lock()
                    .unwrap()
                    .insert((scope, "generated-1".to_string()), record.clone());
                Ok(record)
            })
        }

        fn update(
            &self,
            endpoint: Endpoint,
            scope: &str,
            mut record: WireRecord,
        ) -> BoxFuture<'_, ClientResult<WireRecord>> {
            let scope = scope.to_string();
            Box::pin(async move {
                self.record_call(format!("update {}", endpoint))?;
                let id = record
                    .get(WIRE_ID_FIELD)
                    .and_then(|v| v.as_str())
                    .filter(|id| !id.is_empty())
                    .unwrap_or("singleton")
                    .to_string();
                record.insert(WIRE_ID_FIELD.to_string(), json!(id));
                record.insert("site_id".to_string(), json!("site-1"));
                self.objects
                    .lock()
                    .unwrap()
                    .insert((scope, id), record.clone());
                Ok(record)
            })
        }

        fn delete(
            &self,
            endpoint: Endpoint,
            scope: &str,
            id: &str,
        ) -> BoxFuture<'_, ClientResult<()>> {
            let key = (scope.to_string(), id.to_string());
            Box::pin(async move {
                self.record_call(format!("delete {} {}", endpoint, key.1))?;
                self.objects.lock().unwrap().remove(&key);
                Ok(())
            })
        }
    }

    fn group_schema() -> ResourceSchema {
        ResourceSchema::new("firewall_group")
            .attribute(
                AttributeSchema::new("id", AttributeType::String)
                    .computed()
                    .with_wire_name("_id"),
            )
            .attribute(AttributeSchema::new("site_id", AttributeType::String).computed())
            .attribute(AttributeSchema::new("name", AttributeType::String).required())
            .attribute(
                AttributeSchema::new(
                    "members",
                    AttributeType::List(Box::new(AttributeType::String)),
                )
                .with_wire_name("group_members"),
            )
            .with_scope()
            .with_last_updated()
    }

    fn mgmt_schema() -> ResourceSchema {
        ResourceSchema::new("setting_mgmt")
            .with_identity(IdentityShape::Simple)
            .attribute(
                AttributeSchema::new("id", AttributeType::String)
                    .computed()
                    .with_wire_name("_id"),
            )
            .attribute(AttributeSchema::new("auto_upgrade", AttributeType::Bool))
            .with_scope()
            .with_last_updated()
    }

    fn controller(config: ResourceConfig, client: &Arc<MemoryClient>) -> Controller {
        let mut controller = Controller::new(config);
        controller.configure(Some(client.clone() as Arc<dyn RemoteClient>));
        controller
    }

    fn group_controller(client: &Arc<MemoryClient>) -> Controller {
        controller(
            ResourceConfig::new(Endpoint::Scoped("firewallgroup"), group_schema()),
            client,
        )
    }

    fn group_plan() -> State {
        State::new()
            .with_attribute("id", Value::Unknown)
            .with_attribute("site_id", Value::Unknown)
            .with_attribute("name", "servers")
            .with_attribute("members", Value::strings(["10.0.0.1", "10.0.0.2"]))
            .with_attribute("site", Value::Unknown)
            .with_attribute("last_updated", Value::Unknown)
    }

    #[tokio::test]
    async fn create_decodes_remote_record_and_stamps() {
        let client = Arc::new(MemoryClient::default());
        let response = group_controller(&client).create(&group_plan()).await;

        assert!(response.diagnostics.is_empty());
        let state = response.state.unwrap();
        assert_eq!(state.known_str("id"), Some("generated-1"));
        assert_eq!(state.known_str("site_id"), Some("site-1"));
        assert_eq!(state.known_str("site"), Some("default"));
        assert!(state.known_str("last_updated").is_some());
        assert!(!state.contains_unknown());
        assert_eq!(client.calls(), vec!["create rest/firewallgroup"]);
    }

    #[tokio::test]
    async fn create_reports_remote_error_without_state() {
        let client = Arc::new(MemoryClient::failing("api.err.Invalid"));
        let response = group_controller(&client).create(&group_plan()).await;

        assert!(response.state.is_none());
        assert_eq!(response.diagnostics.len(), 1);
        let diagnostic = response.diagnostics.iter().next().unwrap();
        assert_eq!(diagnostic.summary, "Error creating Firewall Group");
        assert!(diagnostic.detail.starts_with("Could not create Firewall Group, unexpected error: "));
        assert!(diagnostic.detail.contains("api.err.Invalid"));
    }

    #[tokio::test]
    async fn create_with_missing_attribute_makes_no_remote_call() {
        let client = Arc::new(MemoryClient::default());
        let mut plan = group_plan();
        plan.attributes.remove("name");
        let response = group_controller(&client).create(&plan).await;

        assert!(response.state.is_none());
        assert_eq!(response.diagnostics.len(), 1);
        let diagnostic = response.diagnostics.iter().next().unwrap();
        assert_eq!(diagnostic.attribute.as_deref(), Some("name"));
        assert!(client.calls().is_empty());
    }

    #[tokio::test]
    async fn create_with_unknown_user_value_fails() {
        let client = Arc::new(MemoryClient::default());
        let plan = group_plan().with_attribute("members", Value::List(vec![Value::Unknown]));
        let response = group_controller(&client).create(&plan).await;

        assert!(response.state.is_none());
        let diagnostic = response.diagnostics.iter().next().unwrap();
        assert_eq!(diagnostic.summary, "Unknown Value");
        assert!(client.calls().is_empty());
    }

    #[tokio::test]
    async fn read_preserves_local_attributes() {
        let client = Arc::new(MemoryClient::default());
        client.insert(
            "lab",
            json!({"_id": "g1", "site_id": "s", "name": "renamed", "group_members": []}),
        );
        let prior = group_schema()
            .null_state()
            .with_attribute("id", "g1")
            .with_attribute("site", "lab")
            .with_attribute("last_updated", "Monday, 02-Jan-06 15:04:05 UTC");

        let response = group_controller(&client).read(&prior).await;
        let state = response.state.unwrap();
        assert_eq!(state.known_str("name"), Some("renamed"));
        assert_eq!(state.get("members"), Some(&Value::List(vec![])));
        assert_eq!(state.known_str("site"), Some("lab"));
        assert_eq!(
            state.known_str("last_updated"),
            Some("Monday, 02-Jan-06 15:04:05 UTC")
        );
        assert_eq!(client.calls(), vec!["get rest/firewallgroup g1"]);
    }

    #[tokio::test]
    async fn read_not_found_is_an_error() {
        let client = Arc::new(MemoryClient::default());
        let prior = group_schema().null_state().with_attribute("id", "gone");
        let response = group_controller(&client).read(&prior).await;

        assert!(response.state.is_none());
        let diagnostic = response.diagnostics.iter().next().unwrap();
        assert_eq!(diagnostic.summary, "Error reading Firewall Group");
        assert!(diagnostic.detail.starts_with("Could not read Firewall Group ID gone; "));
    }

    #[tokio::test]
    async fn update_restamps_last_updated() {
        let client = Arc::new(MemoryClient::default());
        let plan = group_plan()
            .with_attribute("id", "g1")
            .with_attribute("site", "default")
            .with_attribute("last_updated", "Monday, 02-Jan-06 15:04:05 UTC");
        let response = group_controller(&client).update(&plan).await;

        let state = response.state.unwrap();
        assert_eq!(state.known_str("id"), Some("g1"));
        assert_ne!(
            state.known_str("last_updated"),
            Some("Monday, 02-Jan-06 15:04:05 UTC")
        );
        assert_eq!(client.calls(), vec!["update rest/firewallgroup"]);
    }

    #[tokio::test]
    async fn delete_calls_remote_with_identity() {
        let client = Arc::new(MemoryClient::default());
        let prior = group_schema()
            .null_state()
            .with_attribute("id", "g1")
            .with_attribute("site", "lab");
        let diagnostics = group_controller(&client).delete(&prior).await;

        assert!(diagnostics.is_empty());
        assert_eq!(client.calls(), vec!["delete rest/firewallgroup g1"]);
    }

    #[tokio::test]
    async fn delete_of_non_deletable_kind_is_a_no_op() {
        let client = Arc::new(MemoryClient::failing("must not be called"));
        let controller = controller(
            ResourceConfig::singleton(Endpoint::Singleton("mgmt"), mgmt_schema()),
            &client,
        );
        let prior = mgmt_schema().null_state().with_attribute("id", "m1");

        let diagnostics = controller.delete(&prior).await;
        assert!(diagnostics.is_empty());
        assert!(client.calls().is_empty());
    }

    #[tokio::test]
    async fn singleton_create_goes_through_update() {
        let client = Arc::new(MemoryClient::default());
        let controller = controller(
            ResourceConfig::singleton(Endpoint::Singleton("mgmt"), mgmt_schema()),
            &client,
        );
        let plan = State::new()
            .with_attribute("id", Value::Unknown)
            .with_attribute("auto_upgrade", true)
            .with_attribute("site", Value::Null)
            .with_attribute("last_updated", Value::Unknown);

        let response = controller.create(&plan).await;
        let state = response.state.unwrap();
        assert_eq!(state.get("auto_upgrade"), Some(&Value::Bool(true)));
        assert_eq!(client.calls(), vec!["update setting/mgmt"]);

        let read = controller.read(&state.clone().with_attribute("id", Value::Null)).await;
        assert!(read.diagnostics.is_empty());
        assert_eq!(client.calls()[1], "get setting/mgmt ");
    }

    #[tokio::test]
    async fn nested_computed_members_are_sent_unset() {
        let key = AttributeType::Object(vec![
            AttributeSchema::new("name", AttributeType::String).required(),
            AttributeSchema::new("fingerprint", AttributeType::String).computed(),
        ]);
        let schema = mgmt_schema().attribute(
            AttributeSchema::new("ssh_keys", AttributeType::List(Box::new(key)))
                .optional_computed()
                .with_wire_name("x_ssh_keys"),
        );
        let client = Arc::new(MemoryClient::default());
        let controller = controller(
            ResourceConfig::singleton(Endpoint::Singleton("mgmt"), schema),
            &client,
        );
        let ssh_key = Value::Object(
            [
                ("name".to_string(), Value::string("laptop")),
                ("fingerprint".to_string(), Value::Unknown),
            ]
            .into_iter()
            .collect(),
        );
        let plan = State::new()
            .with_attribute("id", Value::Unknown)
            .with_attribute("auto_upgrade", false)
            .with_attribute("ssh_keys", Value::List(vec![ssh_key]))
            .with_attribute("site", Value::Null)
            .with_attribute("last_updated", Value::Unknown);

        let response = controller.create(&plan).await;
        assert!(response.diagnostics.is_empty(), "{:?}", response.diagnostics);
        let state = response.state.unwrap();
        let keys = state.get("ssh_keys").and_then(Value::as_list).unwrap();
        let Value::Object(fields) = &keys[0] else {
            panic!("expected an object");
        };
        assert_eq!(fields.get("name"), Some(&Value::string("laptop")));
        assert_eq!(fields.get("fingerprint"), Some(&Value::string("")));
    }

    #[tokio::test]
    async fn nested_unknown_in_settable_member_still_fails() {
        let key = AttributeType::Object(vec![
            AttributeSchema::new("name", AttributeType::String).required(),
        ]);
        let schema = group_schema().attribute(
            AttributeSchema::new("keys", AttributeType::List(Box::new(key))).optional_computed(),
        );
        let client = Arc::new(MemoryClient::default());
        let controller = controller(
            ResourceConfig::new(Endpoint::Scoped("firewallgroup"), schema),
            &client,
        );
        let key = Value::Object([("name".to_string(), Value::Unknown)].into_iter().collect());
        let plan = group_plan().with_attribute("keys", Value::List(vec![key]));

        let response = controller.create(&plan).await;
        let diagnostic = response.diagnostics.iter().next().unwrap();
        assert_eq!(diagnostic.summary, "Unknown Value");
        assert!(client.calls().is_empty());
    }

    #[test]
    fn import_composite_identifier() {
        let controller = Controller::new(ResourceConfig::new(
            Endpoint::Scoped("firewallgroup"),
            group_schema(),
        ));
        let response = controller.import_state("default/abc123");

        assert!(response.diagnostics.is_empty());
        let state = response.state.unwrap();
        assert_eq!(state.known_str("site"), Some("default"));
        assert_eq!(state.known_str("id"), Some("abc123"));
        assert_eq!(state.get("name"), Some(&Value::Null));
        assert_eq!(state.attributes.len(), group_schema().attributes.len());
    }

    #[test]
    fn import_rejects_malformed_identifiers() {
        let controller = Controller::new(ResourceConfig::new(
            Endpoint::Scoped("firewallgroup"),
            group_schema(),
        ));
        for raw in ["abc123", "default/", "/abc123"] {
            let response = controller.import_state(raw);
            assert!(response.state.is_none());
            assert_eq!(response.diagnostics.len(), 1);
            let diagnostic = response.diagnostics.iter().next().unwrap();
            assert_eq!(diagnostic.summary, "Unexpected Import Identifier");
            assert_eq!(
                diagnostic.detail,
                format!(
                    "Expected import identifier with format: site/id. Got: {:?}",
                    raw
                )
            );
        }
    }

    #[test]
    fn import_simple_identifier_passes_through() {
        let controller = Controller::new(ResourceConfig::singleton(
            Endpoint::Singleton("mgmt"),
            mgmt_schema(),
        ));
        let state = controller.import_state("5f1e/x").state.unwrap();
        assert_eq!(state.known_str("id"), Some("5f1e/x"));
    }

    #[tokio::test]
    async fn unconfigured_controller_reports_error() {
        let mut controller = Controller::new(ResourceConfig::new(
            Endpoint::Scoped("firewallgroup"),
            group_schema(),
        ));
        controller.configure(None);
        assert!(!controller.is_configured());

        let response = controller.create(&group_plan()).await;
        let diagnostic = response.diagnostics.iter().next().unwrap();
        assert_eq!(diagnostic.summary, "Unconfigured Client");
    }

    #[test]
    fn configure_none_keeps_existing_client() {
        let client = Arc::new(MemoryClient::default());
        let mut controller = group_controller(&client);
        controller.configure(None);
        assert!(controller.is_configured());
    }

    #[test]
    fn last_updated_uses_rfc850_layout() {
        let stamp = last_updated_stamp();
        let parsed = chrono::NaiveDateTime::parse_from_str(&stamp, LAST_UPDATED_FORMAT);
        assert!(parsed.is_ok(), "unexpected stamp {}", stamp);
        assert!(stamp.ends_with(" UTC"));
    }
}
