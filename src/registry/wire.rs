//! Wire types exchanged with the registry service
//!
//! The registry speaks a `baseUri`/`endUris` JSON dialect; this module
//! owns the translation between that shape and the in-memory
//! `ApiDefinition` model, including tolerance for the older flat
//! one-row-per-endpoint list responses.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::constants::DEFAULT_CONTENT_TYPE;
use crate::models::{ApiDefinition, BodyType, Endpoint, HttpMethod, PairEntry};

/// One endpoint as the registry stores it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WirePoint {
    pub end_uri: String,
    pub method: String,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    #[serde(default)]
    pub body_type: Option<String>,
    #[serde(default = "default_content_type")]
    pub content_type: String,
    #[serde(default)]
    pub body_content: Option<String>,
}

fn default_content_type() -> String {
    String::from(DEFAULT_CONTENT_TYPE)
}

/// One stored API: the grouped shape every retrieval path is
/// normalized to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredApi {
    #[serde(default, deserialize_with = "opaque_id")]
    pub id: Option<String>,
    pub name: String,
    pub base_uri: String,
    pub end_uris: Vec<WirePoint>,
}

/// The payload sent on create and update.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WirePayload {
    pub name: String,
    pub base_uri: String,
    pub end_uris: Vec<WirePoint>,
}

/// Older list responses return one flat row per endpoint with the API
/// name and base URI repeated on each row.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FlatRecord {
    #[serde(default, deserialize_with = "opaque_id")]
    id: Option<String>,
    name: String,
    base_uri: String,
    #[serde(flatten)]
    point: WirePoint,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListRecord {
    Grouped(StoredApi),
    Flat(FlatRecord),
}

impl From<ListRecord> for StoredApi {
    fn from(record: ListRecord) -> StoredApi {
        match record {
            ListRecord::Grouped(api) => api,
            ListRecord::Flat(row) => StoredApi {
                id: row.id,
                name: row.name,
                base_uri: row.base_uri,
                end_uris: vec![row.point],
            },
        }
    }
}

/// Registry ids are opaque; accept strings and numbers alike.
fn opaque_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Serialize one endpoint into its wire shape.
///
/// Headers collapse into a mapping: entries with an empty key or value
/// are skipped and later duplicates overwrite earlier ones. Query
/// params and form/file fields stay editor-local, the registry does
/// not store them.
pub fn to_wire_point(endpoint: &Endpoint) -> WirePoint {
    let mut headers = BTreeMap::new();
    for header in &endpoint.headers {
        if !header.key.is_empty() && !header.value.is_empty() {
            headers.insert(header.key.clone(), header.value.clone());
        }
    }

    WirePoint {
        end_uri: endpoint.path.clone(),
        method: endpoint.method.as_str().to_string(),
        headers,
        body_type: endpoint.body_type.as_wire().map(str::to_string),
        content_type: if endpoint.content_type.is_empty() {
            String::from(DEFAULT_CONTENT_TYPE)
        } else {
            endpoint.content_type.clone()
        },
        body_content: if endpoint.body_content.is_empty() {
            None
        } else {
            Some(endpoint.body_content.clone())
        },
    }
}

/// Rebuild an editable endpoint from a stored record.
pub fn from_wire_point(point: &WirePoint) -> Endpoint {
    Endpoint {
        path: point.end_uri.clone(),
        method: HttpMethod::parse(&point.method),
        headers: point
            .headers
            .iter()
            .map(|(k, v)| PairEntry::new(k.clone(), v.clone()))
            .collect(),
        body_type: BodyType::from_wire(point.body_type.as_deref()),
        content_type: point.content_type.clone(),
        body_content: point.body_content.clone().unwrap_or_default(),
        ..Endpoint::default()
    }
}

/// The full create/update payload for a definition.
pub fn to_payload(definition: &ApiDefinition) -> WirePayload {
    WirePayload {
        name: definition.name.clone(),
        base_uri: definition.base_url.clone(),
        end_uris: definition.endpoints.iter().map(to_wire_point).collect(),
    }
}

/// Rebuild an editable definition from a stored record, used to seed
/// the edit-then-resubmit flow.
pub fn to_definition(stored: &StoredApi) -> ApiDefinition {
    ApiDefinition {
        name: stored.name.clone(),
        base_url: stored.base_uri.clone(),
        endpoints: stored.end_uris.iter().map(from_wire_point).collect(),
    }
}

/// Normalize a raw list/search response to the grouped shape. Accepts
/// grouped records, flat rows, or a mix; rows that fail to decode are
/// skipped with a warning so one malformed record never loses the rest
/// of the catalog.
pub fn normalize_records(value: Value) -> Vec<StoredApi> {
    let rows = match value {
        Value::Array(rows) => rows,
        other => vec![other],
    };

    let mut records = Vec::with_capacity(rows.len());
    for row in rows {
        match serde_json::from_value::<ListRecord>(row) {
            Ok(record) => records.push(record.into()),
            Err(err) => {
                tracing::warn!(error = %err, "Skipping undecodable registry record");
            }
        }
    }
    records
}
