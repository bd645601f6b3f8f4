use log::{info, warn};

use super::draft::QuoteDraft;

/// Receives drafts that passed validation. Calls are fire-and-forget: the
/// controller acknowledges the visitor without waiting on the sink.
pub trait SubmissionSink {
    fn submit(&self, draft: &QuoteDraft);
}

/// No backend endpoint exists yet, so accepted drafts only reach the
/// browser console.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn submit(&self, draft: &QuoteDraft) {
        match serde_json::to_string(draft) {
            Ok(json) => info!("Form submitted: {}", json),
            Err(e) => warn!("Form submitted but could not be serialized: {}", e),
        }
    }
}
