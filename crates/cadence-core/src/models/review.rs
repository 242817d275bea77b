//! Review model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Keep/Problem/Try/Next feedback on a step's submission. A step holds at
/// most one review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub id: u64,
    pub step_id: u64,
    /// What went well
    pub keep: String,
    /// What to improve
    pub problem: String,
    /// Something concrete to try
    #[serde(rename = "try")]
    pub to_try: String,
    /// Suggested next step
    pub next: String,
    pub created_at: Timestamp,
}
