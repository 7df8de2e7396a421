//! Editor events - the only vocabulary through which a presentation
//! layer may change the in-progress API definition.

use crate::models::FilePart;

/// Top-level fields of the definition.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ApiField {
    Name,
    BaseUrl,
}

/// Scalar fields of one endpoint. Method and body type arrive as the
/// strings a form control produces and are parsed leniently.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EndpointField {
    Path,
    Method,
    BodyType,
    ContentType,
    BodyContent,
}

/// Which half of a key/value entry is being edited.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PairField {
    Key,
    Value,
}

/// Events processed by the editor actor. Every structural edit carries
/// explicit indices; the actor applies them in arrival order against
/// the current state snapshot.
#[derive(Debug, Clone)]
pub enum EditorEvent {
    // API fields
    SetApiField {
        field: ApiField,
        value: String,
    },

    // Endpoint list
    AddEndpoint,
    RemoveEndpoint {
        index: usize,
    },
    SetEndpointField {
        index: usize,
        field: EndpointField,
        value: String,
    },
    ToggleExpanded {
        index: usize,
    },

    // Headers and query params
    AddHeader {
        endpoint: usize,
    },
    SetHeader {
        endpoint: usize,
        entry: usize,
        field: PairField,
        value: String,
    },
    AddParam {
        endpoint: usize,
    },
    SetParam {
        endpoint: usize,
        entry: usize,
        field: PairField,
        value: String,
    },

    // Textual form fields
    AddFormField {
        endpoint: usize,
    },
    SetFormField {
        endpoint: usize,
        entry: usize,
        field: PairField,
        value: String,
    },
    RemoveFormField {
        endpoint: usize,
        entry: usize,
    },

    // Binary form fields
    AddFileField {
        endpoint: usize,
    },
    SetFileField {
        endpoint: usize,
        entry: usize,
        key: String,
    },
    AttachFile {
        endpoint: usize,
        entry: usize,
        part: FilePart,
    },
    RemoveFileField {
        endpoint: usize,
        entry: usize,
    },

    // Session lifecycle
    SetCredential(String),
    ClearCredential,

    // Execution
    RunEndpoint {
        index: usize,
    },

    // System
    Shutdown,
}
