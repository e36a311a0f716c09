/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::fmt;
use std::net::IpAddr;
#[cfg(unix)]
use std::path::PathBuf;
use std::time::Duration;

use slog::{Logger, slog_info};

use hm_types::metrics::MetricsName;

use crate::{MetricsClient, StartError, StatsdMetricsSink, StatsdPrefix};

#[cfg(feature = "yaml")]
mod yaml;

pub const DEFAULT_EMIT_INTERVAL: Duration = Duration::from_secs(30);

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatsdBackend {
    Udp {
        host: String,
        port: u16,
        bind: Option<IpAddr>,
    },
    #[cfg(unix)]
    Unix(PathBuf),
}

impl fmt::Display for StatsdBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatsdBackend::Udp { host, port, .. } => {
                if host.contains(':') {
                    write!(f, "[{host}]:{port}")
                } else {
                    write!(f, "{host}:{port}")
                }
            }
            #[cfg(unix)]
            StatsdBackend::Unix(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct StatsdClientConfig {
    backend: StatsdBackend,
    service_id: MetricsName,
    emit_interval: Option<Duration>,
}

impl StatsdClientConfig {
    pub fn new<H: Into<String>>(host: H, port: u16, service_id: MetricsName) -> Self {
        StatsdClientConfig::with_backend(
            StatsdBackend::Udp {
                host: host.into(),
                port,
                bind: None,
            },
            service_id,
        )
    }

    pub fn with_backend(backend: StatsdBackend, service_id: MetricsName) -> Self {
        StatsdClientConfig {
            backend,
            service_id,
            emit_interval: None,
        }
    }

    pub fn set_backend(&mut self, target: StatsdBackend) {
        self.backend = target;
    }

    pub fn set_service_id(&mut self, service_id: MetricsName) {
        self.service_id = service_id;
    }

    pub fn set_emit_interval(&mut self, interval: Duration) {
        self.emit_interval = Some(interval);
    }

    #[inline]
    pub fn backend(&self) -> &StatsdBackend {
        &self.backend
    }

    #[inline]
    pub fn service_id(&self) -> &MetricsName {
        &self.service_id
    }

    /// The advisory emit interval, [`DEFAULT_EMIT_INTERVAL`] if unset or zero.
    pub fn emit_interval(&self) -> Duration {
        match self.emit_interval {
            Some(interval) if !interval.is_zero() => interval,
            _ => DEFAULT_EMIT_INTERVAL,
        }
    }

    /// Open the transport and return a started client.
    ///
    /// The prefix is `<service_id>.<local host name>`, with the dots in the
    /// host name replaced by `_`. If a logger is given, a line naming the
    /// endpoint is logged once the client is started.
    pub fn build(&self, logger: Option<&Logger>) -> Result<MetricsClient, StartError> {
        let prefix = StatsdPrefix::with_local_hostname(&self.service_id)?;
        self.build_with_prefix(prefix, logger)
    }

    fn build_with_prefix(
        &self,
        prefix: StatsdPrefix,
        logger: Option<&Logger>,
    ) -> Result<MetricsClient, StartError> {
        let endpoint = self.backend.to_string();
        let sink = match StatsdMetricsSink::open(&self.backend) {
            Ok(sink) => sink,
            Err(source) => return Err(StartError::TransportInit { endpoint, source }),
        };

        let emit_interval = self.emit_interval();
        if let Some(logger) = logger {
            slog_info!(logger, "started metrics service, emitting metrics to {}", endpoint;
                "prefix" => prefix.as_str(),
                "emit_interval" => ?emit_interval,
            );
        }

        Ok(MetricsClient::new(prefix, endpoint, emit_interval, sink))
    }
}

impl MetricsClient {
    /// Start a client sending to `host:port` over udp.
    pub fn create(
        host: &str,
        port: u16,
        service_id: MetricsName,
        logger: Option<&Logger>,
    ) -> Result<Self, StartError> {
        StatsdClientConfig::new(host, port, service_id).build(logger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv6Addr;
    use std::str::FromStr;
    use std::sync::{Arc, Mutex};

    use slog::{Drain, Never, OwnedKVList, Record, o};

    #[derive(Clone, Default)]
    struct RecordDrain {
        records: Arc<Mutex<Vec<(slog::Level, String)>>>,
    }

    impl Drain for RecordDrain {
        type Ok = ();
        type Err = Never;

        fn log(&self, record: &Record, _values: &OwnedKVList) -> Result<(), Never> {
            let msg = record.msg().to_string();
            self.records.lock().unwrap().push((record.level(), msg));
            Ok(())
        }
    }

    fn service_id() -> MetricsName {
        MetricsName::from_str("svc").unwrap()
    }

    #[test]
    fn emit_interval_default() {
        let mut config = StatsdClientConfig::new("localhost", 8125, service_id());
        assert_eq!(config.emit_interval(), Duration::from_secs(30));

        config.set_emit_interval(Duration::ZERO);
        assert_eq!(config.emit_interval(), DEFAULT_EMIT_INTERVAL);

        config.set_emit_interval(Duration::from_secs(10));
        assert_eq!(config.emit_interval(), Duration::from_secs(10));
    }

    #[test]
    fn backend_display() {
        let config = StatsdClientConfig::new("localhost", 9125, service_id());
        assert_eq!(config.backend().to_string(), "localhost:9125");

        let backend = StatsdBackend::Udp {
            host: Ipv6Addr::LOCALHOST.to_string(),
            port: 8125,
            bind: None,
        };
        assert_eq!(backend.to_string(), "[::1]:8125");
    }

    #[test]
    fn build_logs_endpoint() {
        let drain = RecordDrain::default();
        let logger = Logger::root(drain.clone(), o!());

        let mut config = StatsdClientConfig::new("127.0.0.1", 8125, service_id());
        config.set_emit_interval(Duration::from_secs(5));
        let prefix = StatsdPrefix::new(&service_id(), "host.a");
        let client = config.build_with_prefix(prefix, Some(&logger)).unwrap();
        assert!(client.is_active());
        assert_eq!(client.endpoint(), "127.0.0.1:8125");
        assert_eq!(client.prefix().as_str(), "svc.host_a");
        assert_eq!(client.emit_interval(), Duration::from_secs(5));

        let records = drain.records.lock().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].0, slog::Level::Info);
        assert_eq!(
            records[0].1,
            "started metrics service, emitting metrics to 127.0.0.1:8125"
        );
    }

    #[test]
    fn build_without_logger() {
        let config = StatsdClientConfig::new("127.0.0.1", 8125, service_id());
        let client = config.build(None).unwrap();
        assert!(client.is_active());
        assert!(client.prefix().as_str().starts_with("svc."));
    }

    #[test]
    fn build_invalid_target() {
        let drain = RecordDrain::default();
        let logger = Logger::root(drain.clone(), o!());

        let config = StatsdClientConfig::new("127.0.0.1", 0, service_id());
        let r = config.build(Some(&logger));
        assert!(matches!(r, Err(StartError::TransportInit { .. })));

        let config = StatsdClientConfig::new("", 8125, service_id());
        let r = config.build(Some(&logger));
        assert!(matches!(r, Err(StartError::TransportInit { .. })));

        let config = StatsdClientConfig::with_backend(
            StatsdBackend::Udp {
                host: "127.0.0.1".to_string(),
                port: 8125,
                bind: Some(IpAddr::V6(Ipv6Addr::LOCALHOST)),
            },
            service_id(),
        );
        match config.build(Some(&logger)) {
            Err(StartError::TransportInit { endpoint, .. }) => {
                assert_eq!(endpoint, "127.0.0.1:8125")
            }
            Err(e) => panic!("unexpected error: {e}"),
            Ok(_) => panic!("should fail"),
        }

        assert!(drain.records.lock().unwrap().is_empty());
    }
}
