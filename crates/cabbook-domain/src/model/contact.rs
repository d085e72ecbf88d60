//! Business contact details that receive booking requests

use serde::{Deserialize, Serialize};

/// Messaging number bookings are sent to
pub const BUSINESS_PHONE: &str = "+917407616130";

/// Mailbox bookings are sent to
pub const BUSINESS_EMAIL: &str = "darjeelingcabs.com@gmail.com";

/// Base of the messaging deep link
pub const MESSAGING_BASE_URL: &str = "https://wa.me";

/// Dispatch targets for composed booking requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessContact {
    pub phone: String,
    pub email: String,
    pub messaging_base_url: String,
}

impl Default for BusinessContact {
    fn default() -> Self {
        Self {
            phone: BUSINESS_PHONE.to_string(),
            email: BUSINESS_EMAIL.to_string(),
            messaging_base_url: MESSAGING_BASE_URL.to_string(),
        }
    }
}

impl BusinessContact {
    pub fn new(phone: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            email: email.into(),
            messaging_base_url: MESSAGING_BASE_URL.to_string(),
        }
    }

    pub fn with_messaging_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.messaging_base_url = base_url.into();
        self
    }
}
