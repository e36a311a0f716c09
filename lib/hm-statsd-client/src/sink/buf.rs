/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Keeps every datagram in memory, one entry per send.
#[derive(Clone, Default)]
pub(crate) struct BufMetricsSink {
    packets: Arc<Mutex<Vec<Vec<u8>>>>,
    broken: Arc<AtomicBool>,
}

impl BufMetricsSink {
    pub(crate) fn set_broken(&self, broken: bool) {
        self.broken.store(broken, Ordering::Relaxed);
    }

    pub(crate) fn packets(&self) -> Vec<Vec<u8>> {
        self.packets.lock().unwrap().clone()
    }

    pub(crate) fn send_count(&self) -> usize {
        self.packets.lock().unwrap().len()
    }

    pub(super) fn send_msg(&self, msg: &[u8]) -> io::Result<usize> {
        if self.broken.load(Ordering::Relaxed) {
            return Err(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                "test sink is broken",
            ));
        }
        self.packets.lock().unwrap().push(msg.to_vec());
        Ok(msg.len())
    }
}
