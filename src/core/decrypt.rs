// src/core/decrypt.rs
//! Decryption branch: prompt for blanks → decode → transform → plaintext

use super::{BoundRequest, CryptoOutput, CryptoRequest, RequestProcessor};
use crate::crypto::Engine;
use crate::enums::{Field, Operation};
use crate::error::{CryptoError, Result};
use crate::key_ops::{decode_field, non_blank};
use crate::material::CryptoMaterial;
use crate::observe::PipelineEvent;
use crate::preset::CipherSpec;

impl RequestProcessor<'_> {
    pub(super) fn run_decryption(
        &mut self,
        spec: &CipherSpec,
        request: CryptoRequest,
    ) -> Result<CryptoOutput> {
        let mode = spec.mode();

        // every blank field is asked for exactly once, content → key → iv
        let content = self.fill(Field::Content, request.content)?;
        let key = self.fill(Field::Key, request.key)?;
        let iv = if mode.uses_iv() {
            Some(self.fill(Field::Iv, request.iv)?)
        } else {
            if non_blank(request.iv.as_deref()).is_some() {
                self.observer.record(&PipelineEvent::IvIgnored {
                    operation: Operation::Decrypt,
                });
            }
            None
        };

        let content = required(Field::Content, content)?;
        let key = required(Field::Key, key)?;
        let iv = iv.map(|iv| required(Field::Iv, iv)).transpose()?;

        let ciphertext = decode_field(Field::Content, &content)?;
        let key = decode_field(Field::Key, &key)?;
        let iv = iv.map(|iv| decode_field(Field::Iv, &iv)).transpose()?;

        let material = CryptoMaterial::new(spec, key, iv)?;
        let engine = Engine::for_algorithm(spec.algorithm());

        let plaintext = BoundRequest::bind(engine, spec, material, self.observer)
            .decrypt(ciphertext.expose_secret())
            .map_err(|source| {
                self.observer.record(&PipelineEvent::TransformFailed {
                    spec: spec.label(),
                    reason: source.to_string(),
                });
                CryptoError::TransformFailure {
                    spec: spec.label(),
                    source: Box::new(source),
                }
            })?;

        self.observer.record(&PipelineEvent::Decrypted {
            plaintext_chars: plaintext.chars().count(),
        });

        Ok(CryptoOutput::plaintext(plaintext))
    }

    /// Keep a supplied value, otherwise ask the prompt once
    fn fill(&mut self, field: Field, supplied: Option<String>) -> Result<String> {
        if let Some(value) = non_blank(supplied.as_deref()) {
            return Ok(value.to_owned());
        }
        self.observer.record(&PipelineEvent::FieldPrompted(field));
        self.prompt.ask(field)
    }
}

fn required(field: Field, value: String) -> Result<String> {
    match non_blank(Some(value.as_str())) {
        Some(v) => Ok(v.to_owned()),
        None => Err(CryptoError::MissingRequiredField(field)),
    }
}
