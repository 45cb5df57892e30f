// src/core/encrypt.rs
//! Encryption branch: key → IV → transform → base64 output

use super::{BoundRequest, CryptoOutput, CryptoRequest, RequestProcessor};
use crate::consts::PAYLOAD_ENCODING;
use crate::crypto::{Engine, SymmetricProvider};
use crate::enums::{Field, Operation};
use crate::error::Result;
use crate::key_ops::{decode_field, encode, non_blank};
use crate::material::CryptoMaterial;
use crate::observe::PipelineEvent;
use crate::preset::CipherSpec;

impl RequestProcessor<'_> {
    pub(super) fn run_encryption(
        &mut self,
        spec: &CipherSpec,
        request: CryptoRequest,
    ) -> Result<CryptoOutput> {
        let engine = Engine::for_algorithm(spec.algorithm());
        let mode = spec.mode();
        let supplied_iv = non_blank(request.iv.as_deref());

        if !mode.uses_iv() && supplied_iv.is_some() {
            self.observer.record(&PipelineEvent::IvIgnored {
                operation: Operation::Encrypt,
            });
        }

        // key strictly before IV
        let key = match non_blank(request.key.as_deref()) {
            Some(text) => {
                self.observer.record(&PipelineEvent::KeySupplied);
                decode_field(Field::Key, text)?
            }
            None => {
                let key = engine.generate_key(spec.key_size_bits())?;
                self.observer.record(&PipelineEvent::KeyGenerated {
                    bits: spec.key_size_bits(),
                });
                key
            }
        };

        let iv = if mode.uses_iv() {
            let iv = match supplied_iv {
                Some(text) => {
                    self.observer.record(&PipelineEvent::IvReused);
                    decode_field(Field::Iv, text)?
                }
                None => {
                    let iv = engine.generate_iv()?;
                    self.observer.record(&PipelineEvent::IvGenerated {
                        bytes: iv.expose_secret().len(),
                    });
                    iv
                }
            };
            Some(iv)
        } else {
            None
        };

        let material = CryptoMaterial::new(spec, key, iv)?;
        let key_b64 = encode(material.key());
        let iv_b64 = material.iv().map(encode);

        let plaintext = request.content.unwrap_or_default();
        let ciphertext = BoundRequest::bind(engine, spec, material, self.observer)
            .encrypt(&plaintext)
            .inspect_err(|e| {
                self.observer.record(&PipelineEvent::TransformFailed {
                    spec: spec.label(),
                    reason: e.to_string(),
                })
            })?;

        self.observer.record(&PipelineEvent::Encrypted {
            ciphertext_bytes: ciphertext.len(),
        });

        Ok(CryptoOutput {
            method: Some(spec.label()),
            iv: iv_b64,
            key: Some(key_b64),
            payload: encode(&ciphertext),
            encoded: Some(PAYLOAD_ENCODING.to_owned()),
        })
    }
}
