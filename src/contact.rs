pub mod relay;
pub mod transport;

use std::future::Future;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use serde::Serialize;

pub use relay::{Relay, RelayBody, RelayConfig, RelayError, RelayReply, RelayRequest};
pub use transport::{BrowserTransport, Transport};

/// How long the success/error banner stays up before the form goes idle again.
pub const RESET_DELAY: Duration = Duration::from_secs(5);

pub const SUCCESS_MESSAGE: &str =
    "Thank you for your message! I'll get back to you as soon as possible.";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// Anti-bot field. Hidden from humans, so anything in it came from a bot.
    #[serde(skip)]
    pub honeypot: String,
}

impl ContactFields {
    pub fn new(name: &str, email: &str, subject: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
            honeypot: String::new(),
        }
    }

    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .all(|f| !f.trim().is_empty())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionState {
    pub status: SubmissionStatus,
    pub message: String,
}

impl SubmissionState {
    pub fn is_sending(&self) -> bool {
        self.status == SubmissionStatus::Sending
    }

    /// Whether the status banner should be shown.
    pub fn has_banner(&self) -> bool {
        matches!(
            self.status,
            SubmissionStatus::Success | SubmissionStatus::Error
        )
    }
}

pub fn error_message(fallback_email: &str) -> String {
    format!(
        "Sorry, something went wrong while sending your message. Please try again or email me directly at {fallback_email}."
    )
}

/// Handle on one started submission.
#[derive(Debug, PartialEq, Eq)]
struct Attempt(u64);

/// Identifies the settled attempt a delayed reset belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetTicket(u64);

#[derive(Debug)]
pub enum SubmitOutcome {
    /// The relay accepted the message; the form should be cleared.
    Sent(ResetTicket),
    /// The message did not go through; the form keeps its values.
    Failed(ResetTicket),
    /// Another submission is still in flight, nothing was sent.
    Busy,
    /// Required fields were blank, nothing was sent.
    Incomplete,
}

impl SubmitOutcome {
    pub fn clears_form(&self) -> bool {
        matches!(self, Self::Sent(_))
    }

    pub fn ticket(&self) -> Option<ResetTicket> {
        match self {
            Self::Sent(t) | Self::Failed(t) => Some(*t),
            Self::Busy | Self::Incomplete => None,
        }
    }
}

#[derive(Debug, Default)]
struct Inner {
    state: SubmissionState,
    generation: u64,
}

type Listener = Box<dyn Fn(&SubmissionState) + Send + Sync>;

/// Turns a filled-in contact form into exactly one relay request and tracks
/// the resulting [`SubmissionState`].
pub struct ContactHandler<R, T> {
    relay: R,
    transport: T,
    fallback_email: String,
    inner: Mutex<Inner>,
    listener: Option<Listener>,
}

impl<R: Relay, T: Transport> ContactHandler<R, T> {
    pub fn new(relay: R, transport: T, fallback_email: &str) -> Self {
        Self {
            relay,
            transport,
            fallback_email: fallback_email.to_string(),
            inner: Mutex::new(Inner::default()),
            listener: None,
        }
    }

    /// Calls `f` with the new state after every transition.
    pub fn on_change(mut self, f: impl Fn(&SubmissionState) + Send + Sync + 'static) -> Self {
        self.listener = Some(Box::new(f));
        self
    }

    pub fn state(&self) -> SubmissionState {
        self.lock().state.clone()
    }

    /// Moves to `sending`. Returns `None` while another attempt is in flight.
    fn begin(&self) -> Option<Attempt> {
        let mut inner = self.lock();
        if inner.state.is_sending() {
            log::debug!("contact submission ignored, one is already in flight");
            return None;
        }
        inner.generation += 1;
        let attempt = Attempt(inner.generation);
        self.publish(
            inner,
            SubmissionState {
                status: SubmissionStatus::Sending,
                message: String::new(),
            },
        );
        Some(attempt)
    }

    /// Sends `fields` for a started attempt and settles the state.
    async fn complete(&self, attempt: Attempt, fields: &ContactFields) -> SubmitOutcome {
        let res = self.send(fields).await;

        let ticket = ResetTicket(attempt.0);
        let (state, outcome) = match res {
            Ok(()) => {
                log::info!("contact message delivered via {}", self.relay.name());
                let state = SubmissionState {
                    status: SubmissionStatus::Success,
                    message: SUCCESS_MESSAGE.to_string(),
                };
                (state, SubmitOutcome::Sent(ticket))
            }
            Err(e) => {
                log::warn!("contact message via {} failed: {e}", self.relay.name());
                let state = SubmissionState {
                    status: SubmissionStatus::Error,
                    message: error_message(&self.fallback_email),
                };
                (state, SubmitOutcome::Failed(ticket))
            }
        };
        self.publish(self.lock(), state);
        outcome
    }

    /// One user-initiated submit: begin, send once, settle.
    pub async fn submit(&self, fields: &ContactFields) -> SubmitOutcome {
        if !fields.is_complete() {
            return SubmitOutcome::Incomplete;
        }
        match self.begin() {
            Some(attempt) => self.complete(attempt, fields).await,
            None => SubmitOutcome::Busy,
        }
    }

    /// [`submit`](Self::submit), then the banner phase: `settled` sees the
    /// outcome, `sleep` waits out [`RESET_DELAY`] and the form returns to
    /// `idle` unless a newer attempt has started since.
    pub async fn submit_and_reset<S, F>(
        &self,
        fields: &ContactFields,
        settled: impl FnOnce(&SubmitOutcome),
        sleep: S,
    ) -> SubmitOutcome
    where
        S: FnOnce(Duration) -> F,
        F: Future<Output = ()>,
    {
        let outcome = self.submit(fields).await;
        settled(&outcome);
        if let Some(ticket) = outcome.ticket() {
            sleep(RESET_DELAY).await;
            self.expire(ticket);
        }
        outcome
    }

    /// Returns to `idle` if `ticket` is still the latest settled attempt.
    /// Returns whether the state changed.
    fn expire(&self, ticket: ResetTicket) -> bool {
        let inner = self.lock();
        if inner.generation != ticket.0 || !inner.state.has_banner() {
            return false;
        }
        self.publish(inner, SubmissionState::default());
        true
    }

    async fn send(&self, fields: &ContactFields) -> Result<(), RelayError> {
        let request = self.relay.request(fields)?;
        let reply = self.transport.send(&request).await?;
        self.relay.accept(&reply)
    }

    /// Stores `state` and tells the listener once the lock is released.
    fn publish(&self, mut inner: MutexGuard<'_, Inner>, state: SubmissionState) {
        inner.state = state.clone();
        drop(inner);
        if let Some(listener) = &self.listener {
            listener(&state);
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // state is plain data, a poisoned lock still holds a usable value
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use tokio::sync::Notify;

    use super::*;

    const FALLBACK: &str = "contact@example.com";

    struct ScriptedTransport {
        reply: Result<RelayReply, RelayError>,
        calls: AtomicUsize,
        gate: Option<Arc<Notify>>,
    }

    impl ScriptedTransport {
        fn replying(status: u16, body: &str) -> Self {
            Self {
                reply: Ok(RelayReply::new(status, body)),
                calls: AtomicUsize::new(0),
                gate: None,
            }
        }

        fn failing(err: RelayError) -> Self {
            Self {
                reply: Err(err),
                calls: AtomicUsize::new(0),
                gate: None,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl Transport for ScriptedTransport {
        async fn send(&self, _request: &RelayRequest) -> Result<RelayReply, RelayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            self.reply.clone()
        }
    }

    fn json_relay() -> RelayConfig {
        RelayConfig::Json {
            endpoint: "https://relay.example.com/send".to_string(),
        }
    }

    fn ada() -> ContactFields {
        ContactFields::new("Ada", "ada@example.com", "Hi", "Hello")
    }

    #[tokio::test]
    async fn test_successful_submit() {
        let transport = ScriptedTransport::replying(200, r#"{"success": true}"#);
        let handler = ContactHandler::new(json_relay(), transport, FALLBACK);
        assert_eq!(handler.state().status, SubmissionStatus::Idle);

        let outcome = handler.submit(&ada()).await;
        assert!(outcome.clears_form());
        let state = handler.state();
        assert_eq!(state.status, SubmissionStatus::Success);
        assert!(state.message.contains("Thank you"));
        assert_eq!(handler.transport.calls(), 1);
    }

    #[tokio::test]
    async fn test_network_error_keeps_form() {
        let transport = ScriptedTransport::failing(RelayError::Network("offline".to_string()));
        let handler = ContactHandler::new(json_relay(), transport, FALLBACK);

        let outcome = handler.submit(&ada()).await;
        assert!(matches!(outcome, SubmitOutcome::Failed(_)));
        assert!(!outcome.clears_form());
        let state = handler.state();
        assert_eq!(state.status, SubmissionStatus::Error);
        assert!(state.message.contains(FALLBACK));
    }

    #[tokio::test]
    async fn test_relay_rejection_and_bad_status() {
        let rejected = ContactHandler::new(
            json_relay(),
            ScriptedTransport::replying(200, r#"{"success": false, "message": "spam"}"#),
            FALLBACK,
        );
        assert!(matches!(
            rejected.submit(&ada()).await,
            SubmitOutcome::Failed(_)
        ));
        assert_eq!(rejected.state().status, SubmissionStatus::Error);

        let server_error = ContactHandler::new(
            json_relay(),
            ScriptedTransport::replying(500, r#"{"success": true}"#),
            FALLBACK,
        );
        assert!(matches!(
            server_error.submit(&ada()).await,
            SubmitOutcome::Failed(_)
        ));
        assert_eq!(server_error.state().status, SubmissionStatus::Error);
    }

    #[tokio::test]
    async fn test_second_submit_while_sending_is_ignored() {
        let gate = Arc::new(Notify::new());
        let mut transport = ScriptedTransport::replying(200, r#"{"success": true}"#);
        transport.gate = Some(gate.clone());
        let handler = ContactHandler::new(json_relay(), transport, FALLBACK);
        let fields = ada();

        let first = handler.submit(&fields);
        let second = async {
            // first submit is parked on the gate by now
            tokio::task::yield_now().await;
            assert!(handler.state().is_sending());
            let outcome = handler.submit(&fields).await;
            gate.notify_one();
            outcome
        };
        let (first, second) = tokio::join!(first, second);

        assert!(matches!(first, SubmitOutcome::Sent(_)));
        assert!(matches!(second, SubmitOutcome::Busy));
        assert_eq!(handler.transport.calls(), 1);
    }

    #[tokio::test]
    async fn test_incomplete_fields_not_sent() {
        let handler = ContactHandler::new(
            json_relay(),
            ScriptedTransport::replying(200, r#"{"success": true}"#),
            FALLBACK,
        );
        let fields = ContactFields::new("Ada", "ada@example.com", "   ", "Hello");

        assert!(matches!(
            handler.submit(&fields).await,
            SubmitOutcome::Incomplete
        ));
        assert_eq!(handler.state().status, SubmissionStatus::Idle);
        assert_eq!(handler.transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_expire_returns_to_idle() {
        assert_eq!(RESET_DELAY, Duration::from_secs(5));
        let handler = ContactHandler::new(
            json_relay(),
            ScriptedTransport::failing(RelayError::Network("offline".to_string())),
            FALLBACK,
        );

        let ticket = handler.submit(&ada()).await.ticket().unwrap();
        assert!(handler.state().has_banner());
        assert!(handler.expire(ticket));
        assert_eq!(handler.state(), SubmissionState::default());
        // already idle
        assert!(!handler.expire(ticket));

        // usable again after the reset
        assert!(handler.submit(&ada()).await.ticket().is_some());
    }

    #[tokio::test]
    async fn test_stale_ticket_does_not_reset_newer_attempt() {
        let handler = ContactHandler::new(
            json_relay(),
            ScriptedTransport::replying(200, r#"{"success": true}"#),
            FALLBACK,
        );

        let stale = handler.submit(&ada()).await.ticket().unwrap();
        let fresh = handler.submit(&ada()).await.ticket().unwrap();
        assert_ne!(stale, fresh);

        assert!(!handler.expire(stale));
        assert_eq!(handler.state().status, SubmissionStatus::Success);
        assert!(handler.expire(fresh));
        assert_eq!(handler.state().status, SubmissionStatus::Idle);
    }

    fn recorded(
        handler: ContactHandler<RelayConfig, ScriptedTransport>,
    ) -> (
        ContactHandler<RelayConfig, ScriptedTransport>,
        Arc<Mutex<Vec<SubmissionStatus>>>,
    ) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let log = seen.clone();
        let handler = handler.on_change(move |s| log.lock().unwrap().push(s.status));
        (handler, seen)
    }

    #[tokio::test]
    async fn test_submit_and_reset_success() {
        let (handler, seen) = recorded(ContactHandler::new(
            json_relay(),
            ScriptedTransport::replying(200, r#"{"success": true}"#),
            FALLBACK,
        ));
        let mut cleared = false;
        let mut waited = Vec::new();

        let outcome = handler
            .submit_and_reset(
                &ada(),
                |outcome| {
                    assert_eq!(handler.state().status, SubmissionStatus::Success);
                    cleared = outcome.clears_form();
                },
                |delay| {
                    waited.push(delay);
                    async {}
                },
            )
            .await;

        assert!(matches!(outcome, SubmitOutcome::Sent(_)));
        assert!(cleared);
        assert_eq!(waited, vec![RESET_DELAY]);
        assert_eq!(handler.state(), SubmissionState::default());
        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                SubmissionStatus::Sending,
                SubmissionStatus::Success,
                SubmissionStatus::Idle
            ]
        );
    }

    #[tokio::test]
    async fn test_submit_and_reset_failure_keeps_form() {
        let (handler, seen) = recorded(ContactHandler::new(
            json_relay(),
            ScriptedTransport::replying(503, ""),
            FALLBACK,
        ));
        let mut cleared = true;

        handler
            .submit_and_reset(&ada(), |o| cleared = o.clears_form(), |_| async {})
            .await;

        assert!(!cleared);
        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                SubmissionStatus::Sending,
                SubmissionStatus::Error,
                SubmissionStatus::Idle
            ]
        );
    }

    #[tokio::test]
    async fn test_submit_and_reset_skips_timer_when_nothing_sent() {
        let (handler, seen) = recorded(ContactHandler::new(
            json_relay(),
            ScriptedTransport::replying(200, r#"{"success": true}"#),
            FALLBACK,
        ));
        let blank = ContactFields::new("", "ada@example.com", "Hi", "Hello");
        let mut slept = false;

        let outcome = handler
            .submit_and_reset(&blank, |_| {}, |_| {
                slept = true;
                async {}
            })
            .await;

        assert!(matches!(outcome, SubmitOutcome::Incomplete));
        assert!(!slept);
        assert!(seen.lock().unwrap().is_empty());
        assert_eq!(handler.transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_reset_timer_spares_newer_attempt() {
        let handler = ContactHandler::new(
            json_relay(),
            ScriptedTransport::replying(200, r#"{"success": true}"#),
            FALLBACK,
        );

        // a second message goes out while the first banner is still up
        let again = &handler;
        handler
            .submit_and_reset(&ada(), |_| {}, |_| async move {
                assert!(again.submit(&ada()).await.clears_form());
            })
            .await;

        assert_eq!(handler.state().status, SubmissionStatus::Success);
        assert_eq!(handler.transport.calls(), 2);
    }

    #[test]
    fn test_expire_ignored_while_sending() {
        let handler = ContactHandler::new(
            json_relay(),
            ScriptedTransport::replying(200, "{}"),
            FALLBACK,
        );
        let attempt = handler.begin().unwrap();
        assert!(!handler.expire(ResetTicket(attempt.0)));
        assert!(handler.state().is_sending());
        assert!(handler.begin().is_none());
    }
}
