//! Debounced re-validation for fields the user is typing in.

use std::collections::BTreeMap;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::config::FormConfig;
use crate::engine::{FieldSet, validate_field};
use crate::types::{FieldName, ValidationVerdict};

/// A verdict produced after the quiet period, tagged with its field.
pub type FieldVerdict = (FieldName, ValidationVerdict);

/// Waits `wait`, validates `field` and sends the verdict.
///
/// Returns without validating if `token` is cancelled first.
pub async fn validate_field_tx(
    fields: FieldSet,
    field: FieldName,
    wait: Duration,
    token: CancellationToken,
    tx: mpsc::Sender<FieldVerdict>,
) {
    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!(field = field.as_str(), "debounced validation cancelled");
            return;
        }
        _ = tokio::time::sleep(wait) => {}
    }

    let verdict = validate_field(&fields, field);

    if let Err(_e) = tx.send((field, verdict)).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send field verdict: {}", _e);
    }
}

/// Runs at most one pending validation per field: scheduling a field again
/// cancels that field's previous run if it is still waiting. Runs for other
/// fields are left alone.
#[derive(Debug)]
pub struct Debouncer {
    wait: Duration,
    pending: BTreeMap<FieldName, CancellationToken>,
    tx: mpsc::Sender<FieldVerdict>,
}

impl Debouncer {
    pub fn new(wait: Duration, tx: mpsc::Sender<FieldVerdict>) -> Self {
        Self {
            wait,
            pending: BTreeMap::new(),
            tx,
        }
    }

    pub fn from_config(config: &FormConfig, tx: mpsc::Sender<FieldVerdict>) -> Self {
        Self::new(config.debounce, tx)
    }

    /// Schedules validation of `field` against a snapshot of `fields`.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn schedule(&mut self, fields: FieldSet, field: FieldName) -> JoinHandle<()> {
        let token = CancellationToken::new();
        if let Some(previous) = self.pending.insert(field, token.clone()) {
            previous.cancel();
        }

        tokio::spawn(validate_field_tx(
            fields,
            field,
            self.wait,
            token,
            self.tx.clone(),
        ))
    }

    /// Cancels the pending validation of one field, if any.
    pub fn cancel_field(&mut self, field: FieldName) {
        if let Some(token) = self.pending.remove(&field) {
            token.cancel();
        }
    }

    /// Cancels every pending validation.
    pub fn cancel(&mut self) {
        for (_, token) in std::mem::take(&mut self.pending) {
            token.cancel();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
