//! Submission pipeline shared by every operation form.
//!
//! One submission runs strictly in order:
//!
//! ```text
//! Idle -> Validating -> Busy -> AwaitingResponse -> Success | Failure -> Idle
//! ```
//!
//! Validation failures are announced without entering `Busy`. Once `Busy`
//! is entered, a [`BusyGuard`] restores the idle state on every exit path,
//! including a dropped future (page navigation) and a panic.
//!
//! The pipeline talks to the page only through [`FormSurface`] and to the
//! server only through [`Transport`], so it runs natively in tests.

use serde::Deserialize;

use super::error::SubmitError;
use crate::models::{
    BannerKind, BinaryArtifact, FormSnapshot, OperationOutcome, OperationRequest, OperationSpec,
    ResponseKind,
};
use crate::utils::log;

// =============================================================================
// Seams
// =============================================================================

/// Response as read off the wire. The body is always fully buffered.
#[derive(Clone, Debug, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one operation request.
///
/// `H` is the file handle type carried by the request. Implementations
/// return [`SubmitError::Transport`] when no response was received.
#[allow(async_fn_in_trait)]
pub trait Transport<H> {
    async fn send(&self, request: OperationRequest<H>) -> Result<RawResponse, SubmitError>;
}

/// The parts of one form the pipeline drives.
///
/// Methods take `&self`; implementations hold reactive or interior-mutable
/// state, which lets a [`BusyGuard`] borrow the surface across an await.
pub trait FormSurface {
    fn is_busy(&self) -> bool;
    /// Shows or hides the loading indicator and locks the submit control.
    fn set_busy(&self, busy: bool);
    fn announce(&self, kind: BannerKind, message: &str);
    fn show_text(&self, text: &str);
    /// Saves a binary artifact, releasing any temporary handle it creates.
    fn download(&self, artifact: &BinaryArtifact) -> Result<(), SubmitError>;
}

// =============================================================================
// Busy Guard
// =============================================================================

/// Holds a form in the busy state for as long as it lives.
#[must_use = "busy state is released when the guard is dropped"]
pub struct BusyGuard<'a, S: FormSurface + ?Sized> {
    surface: &'a S,
}

impl<'a, S: FormSurface + ?Sized> BusyGuard<'a, S> {
    pub fn enter(surface: &'a S) -> Self {
        surface.set_busy(true);
        Self { surface }
    }
}

impl<S: FormSurface + ?Sized> Drop for BusyGuard<'_, S> {
    fn drop(&mut self) {
        self.surface.set_busy(false);
    }
}

// =============================================================================
// Outcome Resolution
// =============================================================================

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

#[derive(Deserialize)]
struct TextBody {
    text: String,
}

/// Turns a buffered response into the operation's outcome.
///
/// The outcome tag comes from the status and the operation's declared
/// response kind, never from the body or its content type.
pub fn resolve_response(spec: &OperationSpec, response: RawResponse) -> OperationOutcome {
    if !response.is_success() {
        let message = serde_json::from_slice::<ErrorBody>(&response.body)
            .ok()
            .and_then(|body| body.error)
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| spec.fallback_error.to_string());
        return failure(SubmitError::Request {
            status: response.status,
            message,
        });
    }

    match spec.response {
        ResponseKind::Binary { filename } => OperationOutcome::Binary(BinaryArtifact {
            bytes: response.body,
            content_type: response.content_type,
            filename: filename.to_string(),
        }),
        ResponseKind::Text => match serde_json::from_slice::<TextBody>(&response.body) {
            Ok(body) => OperationOutcome::Text { text: body.text },
            Err(_) => failure(SubmitError::Request {
                status: response.status,
                message: spec.fallback_error.to_string(),
            }),
        },
    }
}

fn failure(err: SubmitError) -> OperationOutcome {
    OperationOutcome::Failure {
        message: err.to_string(),
    }
}

// =============================================================================
// Pipeline
// =============================================================================

/// What happened to one call of [`SubmissionPipeline::submit`].
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitReport {
    /// A submission was already in flight; nothing was done.
    AlreadyBusy,
    /// Validation failed; no request was sent.
    Rejected(SubmitError),
    /// A request was sent and its outcome presented.
    Finished(OperationOutcome),
}

/// Drives submissions for one operation form.
pub struct SubmissionPipeline<'a, T, S: ?Sized> {
    spec: &'static OperationSpec,
    transport: &'a T,
    surface: &'a S,
}

impl<'a, T, S: FormSurface + ?Sized> SubmissionPipeline<'a, T, S> {
    pub fn new(spec: &'static OperationSpec, transport: &'a T, surface: &'a S) -> Self {
        Self {
            spec,
            transport,
            surface,
        }
    }

    /// Runs one submission to completion.
    ///
    /// Returns [`SubmitReport::AlreadyBusy`] if the form is still waiting on
    /// a previous request, whether or not the submit control was bypassed.
    pub async fn submit<H>(&self, form: FormSnapshot<H>) -> SubmitReport
    where
        T: Transport<H>,
    {
        let spec = self.spec;

        if self.surface.is_busy() {
            log::warn(&format!("{}: submission ignored, request in flight", spec.endpoint));
            return SubmitReport::AlreadyBusy;
        }

        if let Err(message) = spec.validate(&form) {
            self.surface.announce(BannerKind::Error, message);
            return SubmitReport::Rejected(SubmitError::Validation(message.to_string()));
        }

        let _busy = BusyGuard::enter(self.surface);
        log::debug(&format!(
            "{}: sending {} file(s)",
            spec.endpoint,
            form.files.len()
        ));

        let request = OperationRequest::build(spec, form);
        let outcome = match self.transport.send(request).await {
            Ok(response) => resolve_response(spec, response),
            Err(err) => failure(err),
        };

        let outcome = self.present(outcome);
        match &outcome {
            OperationOutcome::Failure { message } => {
                log::error(&format!("{}: {}", spec.endpoint, message));
            }
            other => log::debug(&format!("{}: {}", spec.endpoint, outcome_label(other))),
        }
        SubmitReport::Finished(outcome)
    }

    /// Shows the outcome and announces it. A download that cannot be
    /// started becomes a failure, so no result is shown with an error.
    fn present(&self, outcome: OperationOutcome) -> OperationOutcome {
        match outcome {
            OperationOutcome::Binary(artifact) => match self.surface.download(&artifact) {
                Ok(()) => {
                    self.surface
                        .announce(BannerKind::Success, self.spec.success_message);
                    OperationOutcome::Binary(artifact)
                }
                Err(err) => {
                    let outcome = failure(err);
                    self.present(outcome)
                }
            },
            OperationOutcome::Text { text } => {
                self.surface.show_text(&text);
                self.surface
                    .announce(BannerKind::Success, self.spec.success_message);
                OperationOutcome::Text { text }
            }
            OperationOutcome::Failure { message } => {
                self.surface.announce(BannerKind::Error, &message);
                OperationOutcome::Failure { message }
            }
        }
    }
}

fn outcome_label(outcome: &OperationOutcome) -> &'static str {
    match outcome {
        OperationOutcome::Binary(_) => "binary result",
        OperationOutcome::Text { .. } => "text result",
        OperationOutcome::Failure { .. } => "failure",
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;
    use crate::models::{Operation, SelectedFile};

    #[derive(Clone, Debug, PartialEq)]
    enum Event {
        Busy(bool),
        Request(&'static str, usize),
        Announce(BannerKind, String),
        Text(String),
        Download(String),
    }

    type Log = Rc<RefCell<Vec<Event>>>;

    struct RecordingSurface {
        log: Log,
        busy: Cell<bool>,
        fail_download: bool,
    }

    impl RecordingSurface {
        fn new(log: Log) -> Self {
            Self {
                log,
                busy: Cell::new(false),
                fail_download: false,
            }
        }
    }

    impl FormSurface for RecordingSurface {
        fn is_busy(&self) -> bool {
            self.busy.get()
        }

        fn set_busy(&self, busy: bool) {
            self.busy.set(busy);
            self.log.borrow_mut().push(Event::Busy(busy));
        }

        fn announce(&self, kind: BannerKind, message: &str) {
            self.log
                .borrow_mut()
                .push(Event::Announce(kind, message.to_string()));
        }

        fn show_text(&self, text: &str) {
            self.log.borrow_mut().push(Event::Text(text.to_string()));
        }

        fn download(&self, artifact: &BinaryArtifact) -> Result<(), SubmitError> {
            if self.fail_download {
                return Err(SubmitError::Delivery("Failed to create object URL".into()));
            }
            self.log
                .borrow_mut()
                .push(Event::Download(artifact.filename.clone()));
            Ok(())
        }
    }

    /// Replies with a fixed response and records each request.
    struct ScriptedTransport {
        log: Log,
        reply: Result<RawResponse, SubmitError>,
    }

    impl Transport<()> for ScriptedTransport {
        async fn send(&self, request: OperationRequest<()>) -> Result<RawResponse, SubmitError> {
            self.log
                .borrow_mut()
                .push(Event::Request(request.endpoint, request.files.len()));
            self.reply.clone()
        }
    }

    /// Never answers, like a request abandoned by navigation.
    struct HangingTransport;

    impl Transport<()> for HangingTransport {
        async fn send(&self, _request: OperationRequest<()>) -> Result<RawResponse, SubmitError> {
            std::future::pending().await
        }
    }

    fn ok(body: &[u8]) -> Result<RawResponse, SubmitError> {
        Ok(RawResponse {
            status: 200,
            content_type: Some("application/pdf".into()),
            body: body.to_vec(),
        })
    }

    fn status(code: u16, body: &[u8]) -> Result<RawResponse, SubmitError> {
        Ok(RawResponse {
            status: code,
            content_type: Some("application/json".into()),
            body: body.to_vec(),
        })
    }

    fn pdfs(n: usize) -> FormSnapshot {
        FormSnapshot::new(
            (0..n)
                .map(|i| SelectedFile::detached(format!("{}.pdf", i), 1024, "application/pdf"))
                .collect(),
        )
    }

    fn setup(reply: Result<RawResponse, SubmitError>) -> (Log, RecordingSurface, ScriptedTransport) {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let surface = RecordingSurface::new(log.clone());
        let transport = ScriptedTransport {
            log: log.clone(),
            reply,
        };
        (log, surface, transport)
    }

    fn events(log: &Log) -> Vec<Event> {
        log.borrow().clone()
    }

    #[tokio::test]
    async fn test_merge_with_one_file_is_rejected() {
        let (log, surface, transport) = setup(ok(b"%PDF"));
        let pipeline = SubmissionPipeline::new(Operation::Merge.spec(), &transport, &surface);

        let report = pipeline.submit(pdfs(1)).await;

        let message = "Please select at least 2 PDF files to merge";
        assert_eq!(
            report,
            SubmitReport::Rejected(SubmitError::Validation(message.into()))
        );
        assert_eq!(
            events(&log),
            vec![Event::Announce(BannerKind::Error, message.into())]
        );
    }

    #[tokio::test]
    async fn test_merge_success_downloads_once() {
        let (log, surface, transport) = setup(ok(b"%PDF-1.7"));
        let pipeline = SubmissionPipeline::new(Operation::Merge.spec(), &transport, &surface);

        let report = pipeline.submit(pdfs(2)).await;

        assert_eq!(
            report,
            SubmitReport::Finished(OperationOutcome::Binary(BinaryArtifact {
                bytes: b"%PDF-1.7".to_vec(),
                content_type: Some("application/pdf".into()),
                filename: "merged.pdf".into(),
            }))
        );
        assert_eq!(
            events(&log),
            vec![
                Event::Busy(true),
                Event::Request("/merge", 2),
                Event::Download("merged.pdf".into()),
                Event::Announce(BannerKind::Success, "PDFs merged successfully!".into()),
                Event::Busy(false),
            ]
        );
        assert!(!surface.is_busy());
    }

    #[tokio::test]
    async fn test_extract_pages_whitespace_is_rejected() {
        let (log, surface, transport) = setup(ok(b""));
        let pipeline =
            SubmissionPipeline::new(Operation::ExtractPages.spec(), &transport, &surface);

        let report = pipeline.submit(pdfs(1).with_field("pages", "   ")).await;

        assert!(matches!(report, SubmitReport::Rejected(_)));
        assert_eq!(
            events(&log),
            vec![Event::Announce(
                BannerKind::Error,
                "Please specify pages to extract (e.g., 1,3,5-7)".into()
            )]
        );
    }

    #[tokio::test]
    async fn test_text_result_is_rendered() {
        let (log, surface, transport) = setup(ok(br#"{"text": "Hello <b>world</b>"}"#));
        let pipeline = SubmissionPipeline::new(Operation::ExtractText.spec(), &transport, &surface);

        let report = pipeline.submit(pdfs(1)).await;

        assert_eq!(
            report,
            SubmitReport::Finished(OperationOutcome::Text {
                text: "Hello <b>world</b>".into()
            })
        );
        assert_eq!(
            events(&log),
            vec![
                Event::Busy(true),
                Event::Request("/extract-text", 1),
                Event::Text("Hello <b>world</b>".into()),
                Event::Announce(BannerKind::Success, "Text extracted successfully!".into()),
                Event::Busy(false),
            ]
        );
    }

    #[tokio::test]
    async fn test_error_body_message_is_announced() {
        let (log, surface, transport) = setup(status(400, br#"{"error": "bad file"}"#));
        let pipeline = SubmissionPipeline::new(Operation::Rotate.spec(), &transport, &surface);

        let report = pipeline.submit(pdfs(1)).await;

        assert_eq!(
            report,
            SubmitReport::Finished(OperationOutcome::Failure {
                message: "bad file".into()
            })
        );
        assert_eq!(
            events(&log),
            vec![
                Event::Busy(true),
                Event::Request("/rotate", 1),
                Event::Announce(BannerKind::Error, "bad file".into()),
                Event::Busy(false),
            ]
        );
    }

    #[tokio::test]
    async fn test_unparsable_error_body_uses_fallback() {
        let (log, surface, transport) = setup(status(500, b"<html>Internal Server Error</html>"));
        let pipeline = SubmissionPipeline::new(Operation::Compress.spec(), &transport, &surface);

        pipeline.submit(pdfs(1)).await;

        assert!(events(&log).contains(&Event::Announce(
            BannerKind::Error,
            "Failed to compress PDF".into()
        )));
        assert!(!surface.is_busy());
    }

    #[tokio::test]
    async fn test_transport_failure_is_announced() {
        let (log, surface, transport) =
            setup(Err(SubmitError::Transport("connection refused".into())));
        let pipeline = SubmissionPipeline::new(Operation::Split.spec(), &transport, &surface);

        pipeline.submit(pdfs(1)).await;

        assert_eq!(
            events(&log),
            vec![
                Event::Busy(true),
                Event::Request("/split", 1),
                Event::Announce(
                    BannerKind::Error,
                    "An error occurred: connection refused".into()
                ),
                Event::Busy(false),
            ]
        );
    }

    #[tokio::test]
    async fn test_failed_download_reports_error_only() {
        let (log, mut surface, transport) = setup(ok(b"PK"));
        surface.fail_download = true;
        let pipeline = SubmissionPipeline::new(Operation::Split.spec(), &transport, &surface);

        let report = pipeline.submit(pdfs(1)).await;

        assert!(matches!(
            report,
            SubmitReport::Finished(OperationOutcome::Failure { .. })
        ));
        let announced: Vec<Event> = events(&log)
            .into_iter()
            .filter(|e| matches!(e, Event::Announce(..)))
            .collect();
        assert_eq!(
            announced,
            vec![Event::Announce(
                BannerKind::Error,
                "An error occurred: Failed to create object URL".into()
            )]
        );
    }

    #[tokio::test]
    async fn test_busy_form_refuses_second_submission() {
        let (log, surface, transport) = setup(ok(b"%PDF"));
        surface.busy.set(true);
        let pipeline = SubmissionPipeline::new(Operation::Merge.spec(), &transport, &surface);

        let report = pipeline.submit(pdfs(2)).await;

        assert_eq!(report, SubmitReport::AlreadyBusy);
        assert!(events(&log).is_empty());
        assert!(surface.is_busy());
    }

    #[tokio::test]
    async fn test_abandoned_request_releases_busy() {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let surface = RecordingSurface::new(log.clone());
        let pipeline = SubmissionPipeline::new(Operation::Rotate.spec(), &HangingTransport, &surface);

        tokio::select! {
            biased;
            _ = pipeline.submit(pdfs(1)) => panic!("hanging transport resolved"),
            _ = std::future::ready(()) => {}
        }

        assert_eq!(events(&log), vec![Event::Busy(true), Event::Busy(false)]);
        assert!(!surface.is_busy());
    }

    #[test]
    fn test_busy_guard_releases_on_panic() {
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let surface = RecordingSurface::new(log.clone());

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _busy = BusyGuard::enter(&surface);
            panic!("body parsing blew up");
        }));

        assert!(result.is_err());
        assert!(!surface.is_busy());
        assert_eq!(events(&log), vec![Event::Busy(true), Event::Busy(false)]);
    }

    #[test]
    fn test_resolve_ignores_content_type_for_kind() {
        let spec = Operation::ExtractText.spec();
        let response = RawResponse {
            status: 201,
            content_type: Some("application/pdf".into()),
            body: br#"{"text": "page one"}"#.to_vec(),
        };
        assert_eq!(
            resolve_response(spec, response),
            OperationOutcome::Text {
                text: "page one".into()
            }
        );
    }

    #[test]
    fn test_resolve_unparsable_text_uses_fallback() {
        let spec = Operation::ExtractText.spec();
        let response = RawResponse {
            status: 200,
            content_type: None,
            body: b"not json".to_vec(),
        };
        assert_eq!(
            resolve_response(spec, response),
            OperationOutcome::Failure {
                message: "Failed to extract text".into()
            }
        );
    }

    #[test]
    fn test_resolve_error_without_field_uses_fallback() {
        let spec = Operation::ImagesToPdf.spec();
        let response = RawResponse {
            status: 413,
            content_type: Some("application/json".into()),
            body: br#"{"detail": "too large"}"#.to_vec(),
        };
        assert_eq!(
            resolve_response(spec, response),
            OperationOutcome::Failure {
                message: "Failed to create PDF from images".into()
            }
        );
    }

    #[test]
    fn test_resolve_empty_error_uses_fallback() {
        let spec = Operation::Merge.spec();
        let response = RawResponse {
            status: 400,
            content_type: Some("application/json".into()),
            body: br#"{"error": ""}"#.to_vec(),
        };
        assert_eq!(
            resolve_response(spec, response),
            OperationOutcome::Failure {
                message: "Failed to merge PDFs".into()
            }
        );
    }
}
