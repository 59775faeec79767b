//! HTTP transport for operation requests.
//!
//! Posts a multipart body to the operation's endpoint on the serving origin
//! and buffers the whole response.

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::core::error::{DomError, SubmitError};
use crate::core::{RawResponse, Transport};
use crate::models::OperationRequest;

/// Transport backed by the Fetch API via `gloo-net`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpTransport;

impl Transport<File> for HttpTransport {
    async fn send(&self, request: OperationRequest<File>) -> Result<RawResponse, SubmitError> {
        let body = form_data(&request)?;

        let response = Request::post(request.endpoint)
            .body(body)
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let content_type = response.headers().get("content-type");
        let body = response.binary().await.map_err(transport_error)?;

        Ok(RawResponse {
            status,
            content_type,
            body,
        })
    }
}

/// Builds the multipart body: one part per file under the operation's file
/// field, then each scalar field.
fn form_data(request: &OperationRequest<File>) -> Result<FormData, SubmitError> {
    let data = FormData::new().map_err(|_| DomError::FormData)?;

    for file in &request.files {
        data.append_with_blob_and_filename(request.file_field, &file.handle, &file.name)
            .map_err(|_| DomError::FormData)?;
    }
    for (name, value) in &request.fields {
        data.append_with_str(name, value)
            .map_err(|_| DomError::FormData)?;
    }

    Ok(data)
}

/// Keeps a JS exception's message only, without its `TypeError:` prefix.
fn transport_error(err: gloo_net::Error) -> SubmitError {
    let message = match err {
        gloo_net::Error::JsError(js) => js.message,
        other => other.to_string(),
    };
    SubmitError::Transport(message)
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use crate::models::{FormSnapshot, Operation};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_unreachable_server_reports_bare_message() {
        let mut request = OperationRequest::build(
            Operation::Compress.spec(),
            FormSnapshot::new(Vec::new()),
        );
        request.endpoint = "http://127.0.0.1:9/compress";

        let err = HttpTransport.send(request).await.unwrap_err();
        let SubmitError::Transport(message) = err else {
            panic!("expected a transport error, got {:?}", err);
        };
        assert!(!message.is_empty());
        assert!(!message.starts_with("TypeError"), "{}", message);
    }
}
