// src/output/human.rs
use crate::core::CryptoOutput;

/// One `Label: value` line per present field
pub fn render_human(output: &CryptoOutput) -> String {
    let fields = [
        ("Method", output.method.as_deref()),
        ("IV", output.iv.as_deref()),
        ("Key", output.key.as_deref()),
        ("Payload", Some(output.payload.as_str())),
        ("Encoded", output.encoded.as_deref()),
    ];

    fields
        .iter()
        .filter_map(|(label, value)| value.map(|v| format!("{label}: {v}\n")))
        .collect()
}
