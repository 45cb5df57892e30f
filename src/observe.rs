// src/observe.rs
//! Observability port
//!
//! The pipeline reports what it does through an injected [`Observer`]
//! instead of a global logger. Events carry labels and lengths, never
//! key, IV or plaintext bytes.

use std::cell::RefCell;

use crate::enums::{Field, Operation};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineEvent {
    RequestReceived { spec: String, operation: Operation },
    KeySupplied,
    KeyGenerated { bits: usize },
    /// Caller supplied a CBC IV; reusing one across messages weakens confidentiality
    IvReused,
    IvGenerated { bytes: usize },
    /// ECB takes no IV; a supplied one was ignored
    IvIgnored { operation: Operation },
    FieldPrompted(Field),
    MaterialBound { spec: String },
    Encrypted { ciphertext_bytes: usize },
    Decrypted { plaintext_chars: usize },
    TransformFailed { spec: String, reason: String },
}

pub trait Observer {
    fn record(&self, event: &PipelineEvent);
}

/// Discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl Observer for NoopObserver {
    fn record(&self, _event: &PipelineEvent) {}
}

/// Forwards events to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn record(&self, event: &PipelineEvent) {
        use tracing::{debug, info, warn};

        match event {
            PipelineEvent::RequestReceived { spec, operation } => {
                info!(%spec, %operation, "new request")
            }
            PipelineEvent::KeySupplied => info!("working with the provided key"),
            PipelineEvent::KeyGenerated { bits } => info!(bits, "generated new key"),
            PipelineEvent::IvReused => warn!(
                "using the same initialization vector for more than one encryption is not recommended"
            ),
            PipelineEvent::IvGenerated { bytes } => info!(bytes, "generated new initialization vector"),
            PipelineEvent::IvIgnored { operation } => {
                info!(%operation, "ECB mode takes no initialization vector; ignoring the supplied one")
            }
            PipelineEvent::FieldPrompted(field) => info!(%field, "field missing, asking user"),
            PipelineEvent::MaterialBound { spec } => debug!(%spec, "key material bound"),
            PipelineEvent::Encrypted { ciphertext_bytes } => {
                info!(ciphertext_bytes, "successfully encrypted")
            }
            PipelineEvent::Decrypted { plaintext_chars } => {
                info!(plaintext_chars, "successfully decrypted")
            }
            PipelineEvent::TransformFailed { spec, reason } => {
                warn!(%spec, %reason, "cryptographic transform failed")
            }
        }
    }
}

/// Keeps every event in order, used to assert on pipeline behaviour
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: RefCell<Vec<PipelineEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<PipelineEvent> {
        self.events.borrow().clone()
    }

    pub fn contains(&self, event: &PipelineEvent) -> bool {
        self.events.borrow().iter().any(|e| e == event)
    }
}

impl Observer for RecordingObserver {
    fn record(&self, event: &PipelineEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}
