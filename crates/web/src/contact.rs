//! Contact submissions.
//!
//! The site's only contract is "accept this payload and signal completion";
//! actual delivery is an external collaborator behind [`ContactSink`]. The
//! default sink logs the submission and issues a receipt.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use agrisite_core::{SiteError, SiteResult};

/// A contact form payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    /// Required-field check, mirroring the form's `required` attributes.
    pub fn validate(&self) -> SiteResult<()> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(SiteError::validation(format!("{field} is required")));
            }
        }
        Ok(())
    }
}

/// Acknowledgment returned to the submitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactReceipt {
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
}

/// Delivery seam for contact submissions.
pub trait ContactSink: Send + Sync {
    fn submit(&self, submission: ContactSubmission) -> ContactReceipt;
}

/// Default sink: logs the submission and acknowledges it.
#[derive(Debug, Default)]
pub struct LoggingContactSink;

impl ContactSink for LoggingContactSink {
    fn submit(&self, submission: ContactSubmission) -> ContactReceipt {
        let receipt = ContactReceipt {
            id: Uuid::now_v7(),
            received_at: Utc::now(),
        };
        tracing::info!(
            id = %receipt.id,
            name = %submission.name,
            email = %submission.email,
            "contact submission received"
        );
        receipt
    }
}
