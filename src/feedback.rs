//! User feedback intake.
//!
//! Submissions are validated, written to the `feedback` log target and
//! dropped. Nothing is stored.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

use crate::gazetteer::QueryError;

/// Accepted feedback categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Bug,
    Feature,
    General,
    Support,
}

impl FeedbackKind {
    pub const ALL: [FeedbackKind; 4] = [Self::Bug, Self::Feature, Self::General, Self::Support];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bug => "bug",
            Self::Feature => "feature",
            Self::General => "general",
            Self::Support => "support",
        }
    }

    fn allowed_list() -> String {
        Self::ALL.iter().map(|k| k.as_str()).collect::<Vec<_>>().join(", ")
    }
}

impl fmt::Display for FeedbackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeedbackKind {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| {
                QueryError::invalid(format!(
                    "Invalid feedback type '{}'. Must be one of: {}",
                    s,
                    Self::allowed_list()
                ))
            })
    }
}

/// Raw request body, as sent by the web client.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub message: Option<String>,
    pub email: Option<String>,
    pub device_info: Option<String>,
}

/// A validated submission.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackSubmission {
    pub kind: FeedbackKind,
    pub message: String,
    pub email: Option<String>,
    pub device_info: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackReceipt {
    pub message: String,
    pub feedback_id: String,
}

impl FeedbackSubmission {
    pub fn from_request(req: FeedbackRequest) -> Result<Self, QueryError> {
        let kind = req.kind.as_deref().map(str::trim).unwrap_or("");
        let message = req.message.as_deref().map(str::trim).unwrap_or("");
        if kind.is_empty() || message.is_empty() {
            return Err(QueryError::invalid("Both 'type' and 'message' are required"));
        }

        Ok(Self {
            kind: kind.parse()?,
            message: message.to_string(),
            email: req.email.filter(|e| !e.trim().is_empty()),
            device_info: req.device_info.unwrap_or_default(),
        })
    }

    /// Stable correlation id: leading 16 hex chars of SHA-256(message).
    pub fn feedback_id(&self) -> String {
        let digest = Sha256::digest(self.message.as_bytes());
        hex::encode(&digest[..8])
    }
}

/// Validate, log, and acknowledge a submission.
pub fn submit(req: FeedbackRequest) -> Result<FeedbackReceipt, QueryError> {
    let submission = FeedbackSubmission::from_request(req)?;
    let feedback_id = submission.feedback_id();

    tracing::info!(
        target: "feedback",
        feedback_id = %feedback_id,
        kind = %submission.kind,
        email = submission.email.as_deref().unwrap_or(""),
        device_info = %submission.device_info,
        received_at = %chrono::Utc::now().to_rfc3339(),
        text = %submission.message,
        "feedback received"
    );

    Ok(FeedbackReceipt {
        message: "Feedback received".into(),
        feedback_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::EventCapture;

    fn request(kind: &str, message: &str) -> FeedbackRequest {
        FeedbackRequest {
            kind: Some(kind.into()),
            message: Some(message.into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_kind_roundtrip() {
        for kind in FeedbackKind::ALL {
            assert_eq!(kind.as_str().parse::<FeedbackKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_invalid_kind_lists_allowed() {
        let err = FeedbackSubmission::from_request(request("explosion", "boom")).unwrap_err();
        let msg = err.to_string();
        assert!(matches!(err, QueryError::InvalidArgument(_)));
        for allowed in ["bug", "feature", "general", "support"] {
            assert!(msg.contains(allowed), "missing {} in {}", allowed, msg);
        }
    }

    #[test]
    fn test_missing_fields_rejected() {
        let missing_type = FeedbackRequest { message: Some("hi".into()), ..Default::default() };
        assert!(FeedbackSubmission::from_request(missing_type).is_err());

        let missing_message = FeedbackRequest { kind: Some("bug".into()), ..Default::default() };
        assert!(FeedbackSubmission::from_request(missing_message).is_err());

        assert!(FeedbackSubmission::from_request(request("bug", "   ")).is_err());
    }

    #[test]
    fn test_optional_fields_default() {
        let s = FeedbackSubmission::from_request(request("general", "Nice map")).unwrap();
        assert_eq!(s.kind, FeedbackKind::General);
        assert_eq!(s.email, None);
        assert_eq!(s.device_info, "");
    }

    #[test]
    fn test_blank_email_treated_as_absent() {
        let req = FeedbackRequest { email: Some("".into()), ..request("bug", "x") };
        assert_eq!(FeedbackSubmission::from_request(req).unwrap().email, None);
    }

    #[test]
    fn test_feedback_id_stable() {
        let a = FeedbackSubmission::from_request(request("bug", "Map is blank")).unwrap();
        let b = FeedbackSubmission::from_request(request("support", "Map is blank")).unwrap();
        let c = FeedbackSubmission::from_request(request("bug", "Map is slow")).unwrap();
        assert_eq!(a.feedback_id(), b.feedback_id());
        assert_ne!(a.feedback_id(), c.feedback_id());
        assert_eq!(a.feedback_id().len(), 16);
        assert!(a.feedback_id().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_feedback_id_known_digest() {
        // SHA-256("abc") = ba7816bf8f01cfea...
        let s = FeedbackSubmission::from_request(request("bug", "abc")).unwrap();
        assert_eq!(s.feedback_id(), "ba7816bf8f01cfea");
    }

    #[test]
    fn test_submit_receipt() {
        let receipt = submit(request("feature", "Add dark mode")).unwrap();
        assert_eq!(receipt.message, "Feedback received");
        assert_eq!(receipt.feedback_id.len(), 16);
    }

    #[test]
    fn test_submit_logs_one_feedback_event() {
        let capture = EventCapture::default();
        let req = FeedbackRequest {
            email: Some("ada@example.com".into()),
            device_info: Some("Firefox 130".into()),
            ..request("feature", "Add dark mode")
        };
        let receipt =
            tracing::subscriber::with_default(capture.subscriber(), || submit(req).unwrap());

        let events = capture.events();
        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!(event.target, "feedback");
        assert_eq!(event.level, tracing::Level::INFO);
        assert_eq!(event.field("feedback_id"), Some(receipt.feedback_id.as_str()));
        assert_eq!(event.field("kind"), Some("feature"));
        assert_eq!(event.field("email"), Some("ada@example.com"));
        assert_eq!(event.field("device_info"), Some("Firefox 130"));
        assert_eq!(event.field("text"), Some("Add dark mode"));
    }

    #[test]
    fn test_rejected_submission_not_logged() {
        let capture = EventCapture::default();
        let result = tracing::subscriber::with_default(capture.subscriber(), || {
            submit(request("explosion", "boom"))
        });

        assert!(result.is_err());
        assert!(capture.events().iter().all(|e| e.target != "feedback"));
    }
}
