/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::io;

use thiserror::Error;

use hm_types::metrics::ParseError;

/// Errors that prevent a [`MetricsClient`](crate::MetricsClient) from being created.
#[derive(Debug, Error)]
pub enum StartError {
    #[error("failed to get local host name: {0}")]
    HostResolution(String),
    #[error("failed to open statsd transport to {endpoint}: {source}")]
    TransportInit {
        endpoint: String,
        #[source]
        source: io::Error,
    },
}

/// Errors returned by the emit calls.
///
/// All of them mean the metric has been dropped. Nothing is retried.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("metrics client is not started")]
    NotStarted,
    #[error("invalid bucket name {0:?}: {1}")]
    InvalidBucket(String, #[source] ParseError),
    #[error("failed to send metrics: {0}")]
    TransportWrite(#[from] io::Error),
}
