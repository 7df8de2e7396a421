//! Request synthesis and execution for stored endpoint descriptions
//!
//! Takes one endpoint plus its API's base URL and turns the declarative
//! data into a live outbound call with a normalized outcome. Works the
//! same whether the endpoint came fresh from the editor or was rebuilt
//! from a registry record.

use std::time::Instant;

use reqwest::header::CONTENT_TYPE;

use crate::error::ClientResult;
use crate::messages::{RunOutcome, RunPayload};
use crate::models::{BodyType, Endpoint, HttpMethod};
use crate::session::Session;

/// What one execution attempt produced.
#[derive(Debug)]
pub struct RunReport {
    pub url: String,
    pub outcome: RunOutcome,
    pub time_ms: u64,
}

/// Naive concatenation, as the registry stores both halves. Missing or
/// doubled slashes pass through untouched; this is a documented
/// limitation, not something to silently repair.
pub fn full_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url, path)
}

/// Build the outbound request from the stored description. Returns the
/// request plus any warnings raised while encoding the body.
pub fn build_request(
    client: &reqwest::Client,
    base_url: &str,
    endpoint: &Endpoint,
) -> ClientResult<(reqwest::Request, Vec<String>)> {
    let url = full_url(base_url, &endpoint.path);

    let mut builder = match endpoint.method {
        HttpMethod::GET => client.get(&url),
        HttpMethod::POST => client.post(&url),
        HttpMethod::PUT => client.put(&url),
        HttpMethod::DELETE => client.delete(&url),
    };

    // Stored headers go out verbatim; blank keys would not survive
    // header parsing and are skipped.
    let mut explicit_content_type = false;
    for header in &endpoint.headers {
        if header.key.is_empty() {
            continue;
        }
        if header.key.eq_ignore_ascii_case("content-type") {
            explicit_content_type = true;
        }
        builder = builder.header(&header.key, &header.value);
    }

    let mut warnings = Vec::new();

    // Body configuration only applies to POST/PUT; for other methods it
    // is retained in the model but ignored here.
    if endpoint.method.has_body() {
        match endpoint.body_type {
            BodyType::Raw => {
                if !explicit_content_type && !endpoint.content_type.is_empty() {
                    builder = builder.header(CONTENT_TYPE, &endpoint.content_type);
                }
                // the literal string, no re-encoding
                builder = builder.body(endpoint.body_content.clone());
            }
            BodyType::Form => {
                if endpoint.content_type.contains("x-www-form-urlencoded") {
                    // file fields are not representable here; drop them
                    // with a warning instead of failing the run
                    for file in &endpoint.file_fields {
                        warnings.push(format!(
                            "file field `{}` dropped: not representable as urlencoded",
                            file.key
                        ));
                    }
                    let pairs: Vec<(&str, &str)> = endpoint
                        .form_fields
                        .iter()
                        .map(|f| (f.key.as_str(), f.value.as_str()))
                        .collect();
                    builder = builder.form(&pairs);
                } else {
                    let mut form = reqwest::multipart::Form::new();
                    for field in &endpoint.form_fields {
                        form = form.text(field.key.clone(), field.value.clone());
                    }
                    for file in &endpoint.file_fields {
                        match &file.content {
                            Some(part) => {
                                form = form.part(
                                    file.key.clone(),
                                    reqwest::multipart::Part::bytes(part.bytes.clone())
                                        .file_name(part.file_name.clone()),
                                );
                            }
                            None => warnings.push(format!(
                                "file field `{}` skipped: no content attached",
                                file.key
                            )),
                        }
                    }
                    builder = builder.multipart(form);
                }
            }
            BodyType::Unset => {}
        }
    }

    let request = builder.build()?;
    Ok((request, warnings))
}

/// Execute one endpoint and normalize what came back.
///
/// Missing credential is a precondition failure: the function returns
/// before any request is built or dispatched. A response of any status
/// is a completion; only failing to obtain a response at all is an
/// error, and nothing is retried.
pub async fn execute_endpoint(
    client: &reqwest::Client,
    session: &Session,
    base_url: &str,
    endpoint: &Endpoint,
) -> RunReport {
    let url = full_url(base_url, &endpoint.path);

    if session.bearer().is_err() {
        return RunReport {
            url,
            outcome: RunOutcome::Failed {
                message: String::from("no credential present, please login first"),
            },
            time_ms: 0,
        };
    }

    let start = Instant::now();
    let (request, warnings) = match build_request(client, base_url, endpoint) {
        Ok(built) => built,
        Err(err) => {
            return RunReport {
                url,
                outcome: RunOutcome::Failed {
                    message: format!("could not build request: {}", err),
                },
                time_ms: start.elapsed().as_millis() as u64,
            };
        }
    };

    let result = client.execute(request).await;
    let time_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(response) => {
            let status = response.status().as_u16();
            let payload = match response.text().await {
                // structured when it parses, verbatim text otherwise
                Ok(body) => match serde_json::from_str::<serde_json::Value>(&body) {
                    Ok(json) => RunPayload::Json(json),
                    Err(_) => RunPayload::Text(body),
                },
                Err(e) => RunPayload::Text(format!("error reading body: {}", e)),
            };
            RunReport {
                url,
                outcome: RunOutcome::Completed {
                    status,
                    payload,
                    warnings,
                },
                time_ms,
            }
        }
        Err(e) => {
            let message = if e.is_timeout() {
                String::from("request timed out")
            } else if e.is_connect() {
                format!("connection failed: {}", e)
            } else {
                format!("request failed: {}", e)
            };
            RunReport {
                url,
                outcome: RunOutcome::Failed { message },
                time_ms,
            }
        }
    }
}

/// Create an HTTP client with default configuration
pub fn create_client() -> reqwest::Client {
    use std::time::Duration;

    reqwest::Client::builder()
        .timeout(Duration::from_secs(crate::constants::REQUEST_TIMEOUT_SECS))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FileEntry, FilePart, PairEntry};

    fn post_endpoint() -> Endpoint {
        Endpoint {
            path: "/v1/users".into(),
            method: HttpMethod::POST,
            ..Endpoint::default()
        }
    }

    #[test]
    fn test_full_url_is_naive_concatenation() {
        assert_eq!(
            full_url("https://api.example.com", "/v1/now"),
            "https://api.example.com/v1/now"
        );
        // no slash repair, by contract
        assert_eq!(full_url("https://api.example.com/", "/v1"), "https://api.example.com//v1");
        assert_eq!(full_url("https://api.example.com", "v1"), "https://api.example.comv1");
    }

    #[test]
    fn test_raw_body_sent_literally() {
        let endpoint = Endpoint {
            body_type: BodyType::Raw,
            body_content: r#"{"x":1}"#.into(),
            ..post_endpoint()
        };
        let client = create_client();
        let (request, warnings) =
            build_request(&client, "https://api.example.com", &endpoint).unwrap();

        assert_eq!(request.method().as_str(), "POST");
        assert_eq!(request.url().as_str(), "https://api.example.com/v1/users");
        assert_eq!(request.body().unwrap().as_bytes().unwrap(), br#"{"x":1}"#);
        assert_eq!(request.headers()[CONTENT_TYPE.as_str()], "application/json");
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_stored_content_type_header_is_not_overridden() {
        let endpoint = Endpoint {
            headers: vec![PairEntry::new("Content-Type", "text/plain")],
            body_type: BodyType::Raw,
            body_content: "hi".into(),
            ..post_endpoint()
        };
        let client = create_client();
        let (request, _) = build_request(&client, "https://api.example.com", &endpoint).unwrap();
        let values: Vec<_> = request.headers().get_all(CONTENT_TYPE.as_str()).iter().collect();
        assert_eq!(values.len(), 1);
        assert_eq!(values[0].to_str().unwrap(), "text/plain");
    }

    #[test]
    fn test_urlencoded_form_drops_file_fields_with_warning() {
        let endpoint = Endpoint {
            content_type: "application/x-www-form-urlencoded".into(),
            body_type: BodyType::Form,
            form_fields: vec![PairEntry::new("user", "amy"), PairEntry::new("role", "admin")],
            file_fields: vec![FileEntry {
                key: "avatar".into(),
                content: Some(FilePart {
                    file_name: "me.png".into(),
                    bytes: vec![1, 2, 3],
                }),
            }],
            ..post_endpoint()
        };
        let client = create_client();
        let (request, warnings) =
            build_request(&client, "https://api.example.com", &endpoint).unwrap();

        assert_eq!(
            request.body().unwrap().as_bytes().unwrap(),
            b"user=amy&role=admin"
        );
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("avatar"));
    }

    #[test]
    fn test_multipart_form_includes_file_fields() {
        let endpoint = Endpoint {
            content_type: "multipart/form-data".into(),
            body_type: BodyType::Form,
            form_fields: vec![PairEntry::new("user", "amy")],
            file_fields: vec![FileEntry {
                key: "avatar".into(),
                content: Some(FilePart {
                    file_name: "me.png".into(),
                    bytes: vec![1, 2, 3],
                }),
            }],
            ..post_endpoint()
        };
        let client = create_client();
        let (request, warnings) =
            build_request(&client, "https://api.example.com", &endpoint).unwrap();

        let content_type = request.headers()[CONTENT_TYPE.as_str()].to_str().unwrap();
        assert!(content_type.starts_with("multipart/form-data"));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_get_ignores_stored_body_configuration() {
        let endpoint = Endpoint {
            path: "/v1/now".into(),
            method: HttpMethod::GET,
            body_type: BodyType::Raw,
            body_content: "ignored".into(),
            ..Endpoint::default()
        };
        let client = create_client();
        let (request, _) = build_request(&client, "https://api.example.com", &endpoint).unwrap();
        assert!(request.body().is_none());
    }

    #[test]
    fn test_unset_body_type_sends_no_body() {
        let endpoint = Endpoint {
            body_content: "ignored".into(),
            ..post_endpoint()
        };
        let client = create_client();
        let (request, _) = build_request(&client, "https://api.example.com", &endpoint).unwrap();
        assert!(request.body().is_none());
    }

    #[tokio::test]
    async fn test_missing_credential_never_dispatches() {
        let client = create_client();
        let report = execute_endpoint(
            &client,
            &Session::new(),
            "https://api.example.com",
            &post_endpoint(),
        )
        .await;

        assert_eq!(report.time_ms, 0);
        match report.outcome {
            RunOutcome::Failed { message } => assert!(message.contains("credential")),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }
}
