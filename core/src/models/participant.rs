//! Participant model
//!
//! Represents a roster member eligible to share a charge. Participants are
//! supplied by the group/booking collaborator and are read-only to the
//! split engine: the session references them by id but never mutates them.

use serde::{Deserialize, Serialize};

/// A member of the group sharing a charge
///
/// # Example
/// ```
/// use split_payment_core_rs::Participant;
///
/// let p = Participant::new(
///     "user_42".to_string(),
///     "saralee".to_string(),
///     "Sara Lee".to_string(),
/// ).host();
///
/// assert_eq!(p.id(), "user_42");
/// assert!(p.is_host());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Unique participant identifier
    id: String,

    /// Handle shown as @username
    username: String,

    /// Human-readable display name
    display_name: String,

    /// Reference to an avatar image, if the profile has one
    #[serde(skip_serializing_if = "Option::is_none", default)]
    avatar_ref: Option<String>,

    /// Whether this participant hosts the event being paid for
    #[serde(default)]
    is_host: bool,
}

impl Participant {
    /// Create a new participant
    pub fn new(id: String, username: String, display_name: String) -> Self {
        Self {
            id,
            username,
            display_name,
            avatar_ref: None,
            is_host: false,
        }
    }

    /// Set an avatar reference (builder pattern)
    pub fn with_avatar(mut self, avatar_ref: String) -> Self {
        self.avatar_ref = Some(avatar_ref);
        self
    }

    /// Mark this participant as the event host (builder pattern)
    pub fn host(mut self) -> Self {
        self.is_host = true;
        self
    }

    /// Get participant ID
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get username handle
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Get display name
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Get avatar reference, if any
    pub fn avatar_ref(&self) -> Option<&str> {
        self.avatar_ref.as_deref()
    }

    /// Check whether this participant is the event host
    pub fn is_host(&self) -> bool {
        self.is_host
    }
}
