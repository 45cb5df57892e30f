// src/config/defaults.rs
use crate::config::app::{Logging, Output, Prompt};
use crate::consts::DEFAULT_LOG_FILTER;
use crate::enums::OutputFormat;

pub fn default_output() -> Output {
    Output {
        format: OutputFormat::Human,
    }
}

pub fn default_logging() -> Logging {
    Logging {
        filter: default_log_filter(),
    }
}

pub fn default_prompt() -> Prompt {
    Prompt {
        mask_secrets: default_mask_secrets(),
    }
}

pub fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.into()
}

pub fn default_mask_secrets() -> bool {
    true
}
