/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use smallvec::SmallVec;

use crate::StatsdPrefix;

/// Always send, never sample.
const SAMPLE_RATE_SUFFIX: &[u8] = b"|@1";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetricKind {
    Gauge,
    Counter,
    Timer,
}

impl MetricKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::Gauge => "g",
            MetricKind::Counter => "c",
            MetricKind::Timer => "ms",
        }
    }
}

pub(super) type MetricLine = SmallVec<[u8; 128]>;

/// Build `<prefix>.<bucket>:<value>|<type>|@1`.
pub(super) fn format_line(
    prefix: &StatsdPrefix,
    bucket: &str,
    value: &str,
    kind: MetricKind,
) -> MetricLine {
    let mut buf = MetricLine::new();
    buf.extend_from_slice(prefix.as_bytes());
    buf.push(b'.');
    buf.extend_from_slice(bucket.as_bytes());
    buf.push(b':');
    buf.extend_from_slice(value.as_bytes());
    buf.push(b'|');
    buf.extend_from_slice(kind.as_str().as_bytes());
    buf.extend_from_slice(SAMPLE_RATE_SUFFIX);
    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use hm_types::metrics::MetricsName;
    use std::str::FromStr;

    #[test]
    fn line() {
        let prefix = StatsdPrefix::new(&MetricsName::from_str("svc").unwrap(), "h.local");
        assert_eq!(
            format_line(&prefix, "requests", "5", MetricKind::Counter).as_slice(),
            b"svc.h_local.requests:5|c|@1"
        );
        assert_eq!(
            format_line(&prefix, "queue.len", "-3", MetricKind::Gauge).as_slice(),
            b"svc.h_local.queue.len:-3|g|@1"
        );
        assert_eq!(
            format_line(&prefix, "latency", "12", MetricKind::Timer).as_slice(),
            b"svc.h_local.latency:12|ms|@1"
        );
    }
}
