/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use thiserror::Error;

mod name;
pub use name::MetricsName;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty string")]
    Empty,
    #[error("reserved statsd delimiter: {0}")]
    Delimiter(char),
    #[error("control char: {0:?}")]
    ControlChar(char),
}

/// Check that `s` can be put on a statsd line as (part of) a metric name.
///
/// Only the line delimiters `:`, `|`, `@` and control chars are refused,
/// any other char is passed to the collector as is.
pub fn chars_allowed_in_metrics_name(s: &str) -> Result<(), ParseError> {
    for c in s.chars() {
        match c {
            ':' | '|' | '@' => return Err(ParseError::Delimiter(c)),
            c if c.is_control() => return Err(ParseError::ControlChar(c)),
            _ => {}
        }
    }
    Ok(())
}
