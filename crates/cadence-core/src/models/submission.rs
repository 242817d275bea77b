//! Submission model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::ContentType;

/// Work handed in for a step. A step holds at most one submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Submission {
    pub id: u64,
    pub step_id: u64,
    pub content: String,
    pub content_type: ContentType,
    pub created_at: Timestamp,
}
