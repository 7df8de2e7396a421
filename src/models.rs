use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CONTENT_TYPE;

/// HTTP Method enum
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    #[default]
    GET,
    POST,
    PUT,
    DELETE,
}

impl HttpMethod {
    pub fn as_str(&self) -> &str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::PUT => "PUT",
            HttpMethod::DELETE => "DELETE",
        }
    }

    /// Only POST and PUT carry a body; for the other methods any stored
    /// body configuration is retained but ignored on execution.
    pub fn has_body(&self) -> bool {
        matches!(self, HttpMethod::POST | HttpMethod::PUT)
    }

    /// Parse a stored method string, falling back to GET on anything
    /// unknown so a malformed record stays displayable.
    pub fn parse(s: &str) -> HttpMethod {
        match s.trim().to_ascii_uppercase().as_str() {
            "POST" => HttpMethod::POST,
            "PUT" => HttpMethod::PUT,
            "DELETE" => HttpMethod::DELETE,
            _ => HttpMethod::GET,
        }
    }
}

/// Body encoding selected for an endpoint.
///
/// `Raw` sends `body_content` literally, `Form` sends `form_fields` and
/// `file_fields`. Both representations are kept in the model at the
/// same time; only the one matching the active variant is honored when
/// the endpoint is executed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyType {
    #[default]
    Unset,
    Raw,
    Form,
}

impl BodyType {
    /// Wire representation: `null` when unset.
    pub fn as_wire(&self) -> Option<&'static str> {
        match self {
            BodyType::Unset => None,
            BodyType::Raw => Some("raw"),
            BodyType::Form => Some("form"),
        }
    }

    /// Unknown strings degrade to `Unset` rather than failing the record.
    pub fn from_wire(s: Option<&str>) -> BodyType {
        match s {
            Some("raw") => BodyType::Raw,
            Some("form") => BodyType::Form,
            _ => BodyType::Unset,
        }
    }
}

/// A key/value pair used for headers, query params and textual form fields.
/// Duplicate keys are allowed while editing; they collapse last-wins when
/// serialized into a wire mapping.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairEntry {
    pub key: String,
    pub value: String,
}

impl PairEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        PairEntry {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Binary content attached to a file form field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilePart {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// A binary multipart field; `content` stays `None` until the user
/// attaches something.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub key: String,
    pub content: Option<FilePart>,
}

/// One method+path combination plus its headers, params and body
/// configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Endpoint {
    pub path: String,
    pub method: HttpMethod,
    pub headers: Vec<PairEntry>,
    pub params: Vec<PairEntry>,
    pub body_type: BodyType,
    pub content_type: String,
    pub body_content: String,
    pub form_fields: Vec<PairEntry>,
    pub file_fields: Vec<FileEntry>,
    /// UI-only expand/collapse flag, never persisted.
    #[serde(skip)]
    pub expanded: bool,
}

impl Default for Endpoint {
    fn default() -> Self {
        Endpoint {
            path: String::new(),
            method: HttpMethod::GET,
            headers: Vec::new(),
            params: Vec::new(),
            body_type: BodyType::Unset,
            content_type: String::from(DEFAULT_CONTENT_TYPE),
            body_content: String::new(),
            form_fields: Vec::new(),
            file_fields: Vec::new(),
            expanded: false,
        }
    }
}

/// One named API, its base URL, and its list of endpoints.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiDefinition {
    pub name: String,
    pub base_url: String,
    pub endpoints: Vec<Endpoint>,
}

impl ApiDefinition {
    /// A fresh definition as the editor starts it: empty name/base URL
    /// and one blank endpoint pre-seeded.
    pub fn draft() -> Self {
        ApiDefinition {
            name: String::new(),
            base_url: String::new(),
            endpoints: vec![Endpoint::default()],
        }
    }
}

/// Returns a new collection where only the element at `index` has the
/// patch applied. Every other element is cloned untouched, so an edit
/// never aliases into its siblings. Out-of-range indices yield an
/// unchanged copy.
pub fn update_at<T: Clone>(items: &[T], index: usize, patch: impl FnOnce(&mut T)) -> Vec<T> {
    let mut next: Vec<T> = items.to_vec();
    if let Some(item) = next.get_mut(index) {
        patch(item);
    }
    next
}

/// Returns a copy of the collection with one new element built by
/// `factory` appended.
pub fn push_with<T: Clone>(items: &[T], factory: impl FnOnce() -> T) -> Vec<T> {
    let mut next = items.to_vec();
    next.push(factory());
    next
}

/// Returns a copy of the collection with the element at `index` removed;
/// out-of-range indices yield an unchanged copy.
pub fn remove_at<T: Clone>(items: &[T], index: usize) -> Vec<T> {
    let mut next = items.to_vec();
    if index < next.len() {
        next.remove(index);
    }
    next
}
