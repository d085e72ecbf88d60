//! Booking form session
//!
//! Owns the in-progress request for one form and runs the submit workflow:
//! compose the summary, hand the messaging link and the mail link to the
//! dispatcher, then report the acknowledgment. The dispatcher gives no
//! feedback, so the acknowledgment is shown whatever happened to the links.

use cabbook_domain::{BookingComposer, BookingField, BookingRequest, Dispatcher, SubmissionResult};
use cabbook_types::{Error, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::ResubmitPolicy;

/// Notice shown after every submit
pub const ACKNOWLEDGMENT: [&str; 2] = [
    "Thank you for your booking request! We will contact you shortly.",
    "If nothing opens automatically, please check your popup blocker settings.",
];

/// Lifecycle of a booking form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormState {
    /// Defaults, nothing edited yet
    Idle,
    Editing,
    Submitted,
}

/// What a submit produced
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionReceipt {
    /// Local reference for logs; never sent to either channel
    pub reference: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub result: SubmissionResult,
    pub acknowledgment: Vec<String>,
}

/// One booking form and its request
pub struct BookingSession<D: Dispatcher> {
    composer: BookingComposer,
    dispatcher: D,
    policy: ResubmitPolicy,
    request: BookingRequest,
    state: FormState,
}

impl<D: Dispatcher> BookingSession<D> {
    pub fn new(composer: BookingComposer, dispatcher: D, policy: ResubmitPolicy) -> Self {
        Self {
            composer,
            dispatcher,
            policy,
            request: BookingRequest::default(),
            state: FormState::Idle,
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn request(&self) -> &BookingRequest {
        &self.request
    }

    pub fn policy(&self) -> ResubmitPolicy {
        self.policy
    }

    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    /// Apply one field edit.
    ///
    /// A rejected edit leaves both the request and the state untouched.
    pub fn update_field(&mut self, field: BookingField, raw: &str) -> Result<&BookingRequest> {
        self.ensure_open()?;

        self.request = self.request.update_field(field, raw)?;
        self.state = FormState::Editing;
        debug!(field = %field, "booking field updated");

        Ok(&self.request)
    }

    /// Compose the request and dispatch it on both channels.
    ///
    /// Callers gate on required fields first; this does not re-check them.
    pub fn submit(&mut self) -> Result<SubmissionReceipt> {
        self.ensure_open()?;

        let result = self.composer.compose(&self.request);

        self.dispatcher.open_external(&result.messaging_uri);
        self.dispatcher.navigate(&result.mailto_uri);

        self.state = FormState::Submitted;
        if self.policy == ResubmitPolicy::Reset {
            self.request = BookingRequest::default();
        }

        let receipt = SubmissionReceipt {
            reference: Uuid::new_v4(),
            submitted_at: Utc::now(),
            result,
            acknowledgment: ACKNOWLEDGMENT.iter().map(|s| s.to_string()).collect(),
        };
        info!(
            reference = %receipt.reference,
            policy = %self.policy,
            "booking request dispatched"
        );

        Ok(receipt)
    }

    fn ensure_open(&self) -> Result<()> {
        if self.state == FormState::Submitted && self.policy == ResubmitPolicy::Lock {
            return Err(Error::AlreadySubmitted);
        }
        Ok(())
    }
}
