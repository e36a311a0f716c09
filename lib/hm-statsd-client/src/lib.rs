/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

mod error;
pub use error::{EmitError, StartError};

pub use hm_types::metrics::MetricsName;

mod prefix;
pub use prefix::{StatsdPrefix, local_hostname, sanitize_hostname};

mod sink;
use sink::StatsdMetricsSink;

mod client;
pub use client::{MetricKind, MetricsClient};

mod config;
pub use config::{DEFAULT_EMIT_INTERVAL, StatsdBackend, StatsdClientConfig};
