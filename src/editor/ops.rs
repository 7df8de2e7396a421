//! Edit operations - the only way the in-progress definition changes
//!
//! Every operation computes the new state purely from the current
//! snapshot plus its arguments, replacing whole collections through the
//! copy-on-write helpers in `models`. Two rapid edits can therefore
//! never interleave into a corrupted partial state, and editing one
//! endpoint never touches the stored fields of another.

use crate::editor::state::EditorState;
use crate::messages::editor_events::{ApiField, EndpointField, PairField};
use crate::models::{
    push_with, remove_at, update_at, BodyType, Endpoint, FileEntry, FilePart, HttpMethod,
    PairEntry,
};

impl EditorState {
    // ========================
    // API fields
    // ========================

    pub fn set_api_field(&mut self, field: ApiField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ApiField::Name => self.definition.name = value,
            ApiField::BaseUrl => self.definition.base_url = value,
        }
    }

    // ========================
    // Endpoint list
    // ========================

    pub fn add_endpoint(&mut self) {
        self.definition.endpoints = push_with(&self.definition.endpoints, Endpoint::default);
    }

    /// Refused while exactly one endpoint remains, keeping the
    /// at-least-one invariant. Removing any other index preserves the
    /// order of the rest.
    pub fn remove_endpoint(&mut self, index: usize) {
        if self.definition.endpoints.len() <= 1 {
            return;
        }
        self.definition.endpoints = remove_at(&self.definition.endpoints, index);
    }

    /// Set one scalar field on the endpoint at `index`. Changing the
    /// method away from POST/PUT retains the body configuration, and
    /// switching the body type keeps both representations, so the user
    /// can switch back without losing anything; the executor ignores
    /// whatever is inactive.
    pub fn set_endpoint_field(&mut self, index: usize, field: EndpointField, value: &str) {
        self.definition.endpoints = update_at(&self.definition.endpoints, index, |ep| match field {
            EndpointField::Path => ep.path = value.to_string(),
            EndpointField::Method => ep.method = HttpMethod::parse(value),
            EndpointField::BodyType => ep.body_type = BodyType::from_wire(Some(value)),
            EndpointField::ContentType => ep.content_type = value.to_string(),
            EndpointField::BodyContent => ep.body_content = value.to_string(),
        });
    }

    /// UI-only expand/collapse; never reaches the submission payload.
    pub fn toggle_expanded(&mut self, index: usize) {
        self.definition.endpoints = update_at(&self.definition.endpoints, index, |ep| {
            ep.expanded = !ep.expanded;
        });
    }

    // ========================
    // Headers and query params
    // ========================

    pub fn add_header(&mut self, endpoint: usize) {
        self.definition.endpoints = update_at(&self.definition.endpoints, endpoint, |ep| {
            ep.headers = push_with(&ep.headers, PairEntry::default);
        });
    }

    pub fn set_header(&mut self, endpoint: usize, entry: usize, field: PairField, value: &str) {
        self.definition.endpoints = update_at(&self.definition.endpoints, endpoint, |ep| {
            ep.headers = update_at(&ep.headers, entry, |pair| set_pair(pair, field, value));
        });
    }

    pub fn add_param(&mut self, endpoint: usize) {
        self.definition.endpoints = update_at(&self.definition.endpoints, endpoint, |ep| {
            ep.params = push_with(&ep.params, PairEntry::default);
        });
    }

    pub fn set_param(&mut self, endpoint: usize, entry: usize, field: PairField, value: &str) {
        self.definition.endpoints = update_at(&self.definition.endpoints, endpoint, |ep| {
            ep.params = update_at(&ep.params, entry, |pair| set_pair(pair, field, value));
        });
    }

    // ========================
    // Textual form fields
    // ========================

    pub fn add_form_field(&mut self, endpoint: usize) {
        self.definition.endpoints = update_at(&self.definition.endpoints, endpoint, |ep| {
            ep.form_fields = push_with(&ep.form_fields, PairEntry::default);
        });
    }

    pub fn set_form_field(&mut self, endpoint: usize, entry: usize, field: PairField, value: &str) {
        self.definition.endpoints = update_at(&self.definition.endpoints, endpoint, |ep| {
            ep.form_fields = update_at(&ep.form_fields, entry, |pair| set_pair(pair, field, value));
        });
    }

    pub fn remove_form_field(&mut self, endpoint: usize, entry: usize) {
        self.definition.endpoints = update_at(&self.definition.endpoints, endpoint, |ep| {
            ep.form_fields = remove_at(&ep.form_fields, entry);
        });
    }

    // ========================
    // Binary form fields
    // ========================

    pub fn add_file_field(&mut self, endpoint: usize) {
        self.definition.endpoints = update_at(&self.definition.endpoints, endpoint, |ep| {
            ep.file_fields = push_with(&ep.file_fields, FileEntry::default);
        });
    }

    pub fn set_file_field(&mut self, endpoint: usize, entry: usize, key: &str) {
        self.definition.endpoints = update_at(&self.definition.endpoints, endpoint, |ep| {
            ep.file_fields = update_at(&ep.file_fields, entry, |f| f.key = key.to_string());
        });
    }

    /// Attach binary content to a file field; the field stays empty
    /// until this is called.
    pub fn attach_file(&mut self, endpoint: usize, entry: usize, part: FilePart) {
        self.definition.endpoints = update_at(&self.definition.endpoints, endpoint, |ep| {
            ep.file_fields = update_at(&ep.file_fields, entry, |f| f.content = Some(part));
        });
    }

    pub fn remove_file_field(&mut self, endpoint: usize, entry: usize) {
        self.definition.endpoints = update_at(&self.definition.endpoints, endpoint, |ep| {
            ep.file_fields = remove_at(&ep.file_fields, entry);
        });
    }
}

fn set_pair(pair: &mut PairEntry, field: PairField, value: &str) {
    match field {
        PairField::Key => pair.key = value.to_string(),
        PairField::Value => pair.value = value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_endpoint_state() -> EditorState {
        let mut state = EditorState::new();
        state.set_endpoint_field(0, EndpointField::Path, "/v1/now");
        state.add_endpoint();
        state.set_endpoint_field(1, EndpointField::Path, "/v1/soon");
        state
    }

    #[test]
    fn test_remove_endpoint_refused_at_one() {
        let mut state = EditorState::new();
        state.remove_endpoint(0);
        assert_eq!(state.definition.endpoints.len(), 1);
    }

    #[test]
    fn test_remove_endpoint_keeps_order() {
        let mut state = two_endpoint_state();
        state.add_endpoint();
        state.set_endpoint_field(2, EndpointField::Path, "/v1/later");
        state.remove_endpoint(1);
        let paths: Vec<&str> = state
            .definition
            .endpoints
            .iter()
            .map(|ep| ep.path.as_str())
            .collect();
        assert_eq!(paths, ["/v1/now", "/v1/later"]);
    }

    #[test]
    fn test_editing_one_endpoint_never_touches_siblings() {
        let mut state = two_endpoint_state();
        state.add_header(0);
        state.set_header(0, 0, PairField::Key, "X-Key");
        state.set_header(0, 0, PairField::Value, "abc");
        state.set_endpoint_field(0, EndpointField::Method, "POST");
        state.set_endpoint_field(0, EndpointField::BodyContent, "{}");

        let sibling = &state.definition.endpoints[1];
        assert_eq!(sibling.path, "/v1/soon");
        assert_eq!(sibling.method, HttpMethod::GET);
        assert!(sibling.headers.is_empty());
        assert!(sibling.body_content.is_empty());
    }

    #[test]
    fn test_method_change_retains_body_configuration() {
        let mut state = EditorState::new();
        state.set_endpoint_field(0, EndpointField::Method, "POST");
        state.set_endpoint_field(0, EndpointField::BodyType, "raw");
        state.set_endpoint_field(0, EndpointField::BodyContent, r#"{"x":1}"#);

        state.set_endpoint_field(0, EndpointField::Method, "GET");
        let ep = &state.definition.endpoints[0];
        assert_eq!(ep.body_type, BodyType::Raw);
        assert_eq!(ep.body_content, r#"{"x":1}"#);
    }

    #[test]
    fn test_body_type_switch_keeps_both_representations() {
        let mut state = EditorState::new();
        state.set_endpoint_field(0, EndpointField::Method, "POST");
        state.set_endpoint_field(0, EndpointField::BodyType, "raw");
        state.set_endpoint_field(0, EndpointField::BodyContent, "payload");
        state.add_form_field(0);
        state.set_form_field(0, 0, PairField::Key, "user");

        state.set_endpoint_field(0, EndpointField::BodyType, "form");
        let ep = &state.definition.endpoints[0];
        assert_eq!(ep.body_type, BodyType::Form);
        assert_eq!(ep.body_content, "payload");
        assert_eq!(ep.form_fields[0].key, "user");
    }

    #[test]
    fn test_file_field_lifecycle() {
        let mut state = EditorState::new();
        state.add_file_field(0);
        state.set_file_field(0, 0, "avatar");
        assert!(state.definition.endpoints[0].file_fields[0].content.is_none());

        state.attach_file(
            0,
            0,
            FilePart {
                file_name: "me.png".into(),
                bytes: vec![1, 2, 3],
            },
        );
        assert!(state.definition.endpoints[0].file_fields[0].content.is_some());

        state.remove_file_field(0, 0);
        assert!(state.definition.endpoints[0].file_fields.is_empty());
    }

    #[test]
    fn test_toggle_expanded_is_ui_only() {
        let mut state = EditorState::new();
        state.toggle_expanded(0);
        assert!(state.definition.endpoints[0].expanded);
        let json = serde_json::to_value(&state.definition.endpoints[0]).unwrap();
        assert!(json.get("expanded").is_none());
    }

    #[test]
    fn test_out_of_range_indices_are_noops() {
        let mut state = EditorState::new();
        state.set_endpoint_field(9, EndpointField::Path, "/nope");
        state.set_header(0, 9, PairField::Key, "X");
        state.remove_form_field(0, 9);
        assert_eq!(state.definition.endpoints.len(), 1);
        assert!(state.definition.endpoints[0].path.is_empty());
    }
}
