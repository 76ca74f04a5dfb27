//! Submission seam to the external schedule-creation endpoint.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use crate::error::{Error, Result};
use crate::payload::CreateScheduleRequest;

/// Acknowledgement from the creation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    /// Identifier the endpoint assigned, if it returned one
    pub schedule_id: Option<u64>,
}

/// Something that can deliver a schedule-creation request.
///
/// Transport, authentication and response handling belong to the
/// implementor.
#[async_trait]
pub trait ScheduleSubmitter: Send + Sync {
    /// Sends one request.
    async fn create_schedule(&self, request: &CreateScheduleRequest) -> Result<SubmissionReceipt>;
}

/// In-memory submitter that records every request.
///
/// Accepts everything by default and hands out increasing ids; can be
/// primed to fail.
#[derive(Debug, Default)]
pub struct MockSubmitter {
    requests: Mutex<Vec<CreateScheduleRequest>>,
    failure: Option<(String, bool)>,
    next_id: AtomicU64,
}

impl MockSubmitter {
    /// Creates a submitter that accepts every request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a submitter that fails every request.
    pub fn failing(message: impl Into<String>, retryable: bool) -> Self {
        Self {
            failure: Some((message.into(), retryable)),
            ..Self::default()
        }
    }

    /// Requests received so far, including failed ones.
    pub fn requests(&self) -> Vec<CreateScheduleRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Number of requests received.
    pub fn call_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }
}

#[async_trait]
impl ScheduleSubmitter for MockSubmitter {
    async fn create_schedule(&self, request: &CreateScheduleRequest) -> Result<SubmissionReceipt> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(request.clone());

        match &self.failure {
            Some((message, retryable)) => Err(Error::Submission {
                message: message.clone(),
                retryable: *retryable,
            }),
            None => Ok(SubmissionReceipt {
                schedule_id: Some(self.next_id.fetch_add(1, Ordering::Relaxed) + 1),
            }),
        }
    }
}
