/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::io;
use std::time::Duration;

use hm_types::metrics::{ParseError, chars_allowed_in_metrics_name};

use crate::{EmitError, StatsdMetricsSink, StatsdPrefix};

mod formatter;
pub use formatter::MetricKind;

enum ClientState {
    Active(StatsdMetricsSink),
    Closed,
}

/// A statsd client with fire-and-forget semantics.
///
/// Each emit call sends exactly one datagram with sample rate 1. Nothing is
/// buffered between calls and failed sends are never retried. The emit
/// methods take `&self` and may be called from many threads at once.
/// Shutdown takes `&mut self`, so it can only happen after every emitter
/// has released its borrow of the client.
pub struct MetricsClient {
    prefix: StatsdPrefix,
    endpoint: String,
    emit_interval: Duration,
    state: ClientState,
}

impl MetricsClient {
    pub(crate) fn new(
        prefix: StatsdPrefix,
        endpoint: String,
        emit_interval: Duration,
        sink: StatsdMetricsSink,
    ) -> Self {
        MetricsClient {
            prefix,
            endpoint,
            emit_interval,
            state: ClientState::Active(sink),
        }
    }

    #[inline]
    pub fn prefix(&self) -> &StatsdPrefix {
        &self.prefix
    }

    /// The collector endpoint, for diagnostics only.
    #[inline]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// How often the host application is expected to emit its metrics.
    ///
    /// The client itself never schedules anything.
    #[inline]
    pub fn emit_interval(&self) -> Duration {
        self.emit_interval
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, ClientState::Active(_))
    }

    pub fn emit_gauge(&self, bucket: &str, value: i64) -> Result<(), EmitError> {
        let mut buffer = itoa::Buffer::new();
        self.emit(MetricKind::Gauge, bucket, buffer.format(value))
    }

    pub fn emit_counter(&self, bucket: &str, delta: i64) -> Result<(), EmitError> {
        let mut buffer = itoa::Buffer::new();
        self.emit(MetricKind::Counter, bucket, buffer.format(delta))
    }

    /// Send `elapsed` in whole milliseconds, the fraction is truncated.
    pub fn emit_timer(&self, bucket: &str, elapsed: Duration) -> Result<(), EmitError> {
        let mut buffer = itoa::Buffer::new();
        self.emit(MetricKind::Timer, bucket, buffer.format(elapsed.as_millis()))
    }

    fn emit(&self, kind: MetricKind, bucket: &str, value: &str) -> Result<(), EmitError> {
        let ClientState::Active(sink) = &self.state else {
            return Err(EmitError::NotStarted);
        };
        check_bucket(bucket).map_err(|e| EmitError::InvalidBucket(bucket.to_string(), e))?;

        let line = formatter::format_line(&self.prefix, bucket, value, kind);
        sink.send_msg(&line)?;
        Ok(())
    }

    /// Release the transport. Later emit calls return [`EmitError::NotStarted`].
    ///
    /// The returned error is informational only. Calling this again on a
    /// closed client does nothing.
    pub fn close(&mut self) -> io::Result<()> {
        match std::mem::replace(&mut self.state, ClientState::Closed) {
            ClientState::Active(sink) => sink.close(),
            ClientState::Closed => Ok(()),
        }
    }
}

fn check_bucket(bucket: &str) -> Result<(), ParseError> {
    if bucket.is_empty() {
        return Err(ParseError::Empty);
    }
    chars_allowed_in_metrics_name(bucket)
}
