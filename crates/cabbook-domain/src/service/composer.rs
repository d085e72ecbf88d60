//! Booking message composition
//!
//! Turns a booking request into a plain-text summary and the two links
//! that carry it: a messaging deep link and a `mailto:` link.

use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::model::{BookingRequest, BusinessContact};

/// Subject prefix for booking mails
pub const SUBJECT_PREFIX: &str = "Cab Booking Request from ";

/// Composed output of one submit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    /// Plain-text booking summary
    pub summary: String,
    /// Messaging deep link carrying the summary
    pub messaging_uri: String,
    /// Mail link carrying subject and summary
    pub mailto_uri: String,
}

/// Composes booking summaries for a fixed business contact
#[derive(Debug, Clone, Default)]
pub struct BookingComposer {
    contact: BusinessContact,
}

impl BookingComposer {
    pub fn new(contact: BusinessContact) -> Self {
        Self { contact }
    }

    pub fn contact(&self) -> &BusinessContact {
        &self.contact
    }

    /// Build the summary and both dispatch links for `request`
    pub fn compose(&self, request: &BookingRequest) -> SubmissionResult {
        let summary = render_summary(request);
        let messaging_uri = self.messaging_uri(&summary);
        let mailto_uri = self.mailto_uri(&mail_subject(request), &summary);

        SubmissionResult {
            summary,
            messaging_uri,
            mailto_uri,
        }
    }

    fn messaging_uri(&self, summary: &str) -> String {
        format!(
            "{}/{}?text={}",
            self.contact.messaging_base_url.trim_end_matches('/'),
            self.contact.phone,
            urlencoding::encode(summary)
        )
    }

    fn mailto_uri(&self, subject: &str, summary: &str) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.contact.email,
            urlencoding::encode(subject),
            urlencoding::encode(summary)
        )
    }
}

/// Render the fixed-template summary. Only the block as a whole is trimmed.
pub fn render_summary(request: &BookingRequest) -> String {
    let vehicle = catalog::lookup(request.vehicle_type);

    let text = format!(
        "\nBooking Request:\n\
         Name: {}\n\
         Phone: {}\n\
         From: {}\n\
         To: {}\n\
         Date: {}\n\
         Time: {}\n\
         Passengers: {}\n\
         Vehicle: {}\n\
         Additional Notes: {}\n",
        request.full_name,
        request.phone,
        request.pickup_location,
        request.drop_location,
        request.pickup_date,
        request.pickup_time,
        request.passengers,
        vehicle.summary_label(),
        request.message,
    );

    text.trim().to_string()
}

/// Mail subject naming the customer
pub fn mail_subject(request: &BookingRequest) -> String {
    format!("{}{}", SUBJECT_PREFIX, request.full_name)
}
