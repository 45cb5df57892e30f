// src/core/mod.rs
//! Request pipeline
//!
//! A [`RequestProcessor`] takes one [`CryptoRequest`], resolves its preset,
//! collects or generates key material, runs exactly one transform and
//! returns a [`CryptoOutput`] for the renderer.
//!
//! Per request the cipher side moves through
//! `Uninitialized → MaterialBound → Operated → Released`:
//! an [`Engine`] is picked, [`BoundRequest::bind`] takes ownership of fresh
//! [`CryptoMaterial`], the transform consumes the bound request, and the
//! material is zeroized as it drops. Nothing is carried between requests.

mod decrypt;
mod encrypt;

use std::fmt;

use serde::Serialize;

use crate::crypto::{Engine, SymmetricProvider};
use crate::enums::Operation;
use crate::error::Result;
use crate::material::CryptoMaterial;
use crate::observe::{Observer, PipelineEvent};
use crate::preset::CipherSpec;
use crate::prompt::SecretPrompt;

/// One encryption or decryption request as handed over by the input side
///
/// `key` and `iv` are base64 text. For decryption `content` is base64
/// ciphertext; for encryption it is the plaintext.
#[derive(Clone, Default)]
pub struct CryptoRequest {
    pub preset: String,
    pub operation: Option<Operation>,
    pub content: Option<String>,
    pub key: Option<String>,
    pub iv: Option<String>,
}

impl CryptoRequest {
    pub fn encrypt(preset: impl Into<String>, plaintext: impl Into<String>) -> Self {
        Self {
            preset: preset.into(),
            operation: Some(Operation::Encrypt),
            content: Some(plaintext.into()),
            ..Self::default()
        }
    }

    pub fn decrypt(preset: impl Into<String>) -> Self {
        Self {
            preset: preset.into(),
            operation: Some(Operation::Decrypt),
            ..Self::default()
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_iv(mut self, iv: impl Into<String>) -> Self {
        self.iv = Some(iv.into());
        self
    }
}

impl fmt::Debug for CryptoRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| "[REDACTED]");
        f.debug_struct("CryptoRequest")
            .field("preset", &self.preset)
            .field("operation", &self.operation)
            .field("content", &redact(&self.content))
            .field("key", &redact(&self.key))
            .field("iv", &redact(&self.iv))
            .finish()
    }
}

/// Result of a request, ready for rendering
///
/// Encryption fills `method`, `key`, `iv` (not under ECB), a base64
/// `payload` and `encoded`. Decryption only fills `payload` with the
/// recovered plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CryptoOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iv: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub payload: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoded: Option<String>,
}

impl CryptoOutput {
    pub(crate) fn plaintext(payload: String) -> Self {
        Self {
            method: None,
            iv: None,
            key: None,
            payload,
            encoded: None,
        }
    }
}

/// Engine plus the material it will use for its single transform
pub(crate) struct BoundRequest {
    engine: Engine,
    material: CryptoMaterial,
}

impl BoundRequest {
    pub(crate) fn bind(engine: Engine, spec: &CipherSpec, material: CryptoMaterial, observer: &dyn Observer) -> Self {
        observer.record(&PipelineEvent::MaterialBound { spec: spec.label() });
        Self { engine, material }
    }

    pub(crate) fn encrypt(self, plaintext: &str) -> Result<Vec<u8>> {
        let m = &self.material;
        self.engine.encrypt(plaintext, Some(m.key()), m.iv(), m.mode())
    }

    pub(crate) fn decrypt(self, ciphertext: &[u8]) -> Result<String> {
        let m = &self.material;
        self.engine.decrypt(ciphertext, Some(m.key()), m.iv(), m.mode())
    }
}

/// Orchestrates requests against the preset catalog
pub struct RequestProcessor<'a> {
    observer: &'a dyn Observer,
    prompt: &'a mut dyn SecretPrompt,
}

impl<'a> RequestProcessor<'a> {
    pub fn new(observer: &'a dyn Observer, prompt: &'a mut dyn SecretPrompt) -> Self {
        Self { observer, prompt }
    }

    /// Run one request to completion
    ///
    /// A request without an operation is treated as decryption.
    pub fn process(&mut self, request: CryptoRequest) -> Result<CryptoOutput> {
        let spec = CipherSpec::from_preset(&request.preset)?;
        let operation = request.operation.unwrap_or(Operation::Decrypt);
        self.observer.record(&PipelineEvent::RequestReceived {
            spec: spec.label(),
            operation,
        });

        match operation {
            Operation::Encrypt => self.run_encryption(&spec, request),
            Operation::Decrypt => self.run_decryption(&spec, request),
        }
    }
}
