/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::io;

use crate::StatsdBackend;

#[cfg(test)]
mod buf;
#[cfg(test)]
pub(crate) use buf::BufMetricsSink;

mod udp;
use udp::UdpMetricsSink;

#[cfg(unix)]
mod unix;
#[cfg(unix)]
use unix::UnixMetricsSink;

enum MetricsSinkIo {
    #[cfg(test)]
    Buf(BufMetricsSink),
    Udp(UdpMetricsSink),
    #[cfg(unix)]
    Unix(UnixMetricsSink),
}

/// The transport session owned by a started client.
pub(crate) struct StatsdMetricsSink {
    io: MetricsSinkIo,
}

impl StatsdMetricsSink {
    #[cfg(test)]
    pub(crate) fn buf(buf: BufMetricsSink) -> Self {
        StatsdMetricsSink {
            io: MetricsSinkIo::Buf(buf),
        }
    }

    pub(crate) fn open(backend: &StatsdBackend) -> io::Result<Self> {
        let io = match backend {
            StatsdBackend::Udp { host, port, bind } => {
                MetricsSinkIo::Udp(UdpMetricsSink::open(host, *port, *bind)?)
            }
            #[cfg(unix)]
            StatsdBackend::Unix(path) => MetricsSinkIo::Unix(UnixMetricsSink::open(path)?),
        };
        Ok(StatsdMetricsSink { io })
    }

    /// Send one datagram. Safe to be called from many threads at once.
    pub(crate) fn send_msg(&self, msg: &[u8]) -> io::Result<usize> {
        match &self.io {
            #[cfg(test)]
            MetricsSinkIo::Buf(b) => b.send_msg(msg),
            MetricsSinkIo::Udp(s) => s.send_msg(msg),
            #[cfg(unix)]
            MetricsSinkIo::Unix(s) => s.send_msg(msg),
        }
    }

    /// Release the socket, returning any error left pending on it.
    pub(crate) fn close(self) -> io::Result<()> {
        match self.io {
            #[cfg(test)]
            MetricsSinkIo::Buf(_) => Ok(()),
            MetricsSinkIo::Udp(s) => s.close(),
            #[cfg(unix)]
            MetricsSinkIo::Unix(s) => s.close(),
        }
    }
}

/// Turn the result of `take_error` into the result of a close call.
fn pending_error(r: io::Result<Option<io::Error>>) -> io::Result<()> {
    match r? {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
