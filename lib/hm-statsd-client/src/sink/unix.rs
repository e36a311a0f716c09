/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::io;
use std::os::unix::net::UnixDatagram;
use std::path::{Path, PathBuf};

pub(super) struct UnixMetricsSink {
    path: PathBuf,
    socket: UnixDatagram,
}

impl UnixMetricsSink {
    pub(super) fn open(path: &Path) -> io::Result<Self> {
        let socket = UnixDatagram::unbound()?;
        Ok(UnixMetricsSink {
            path: path.to_path_buf(),
            socket,
        })
    }

    pub(super) fn send_msg(&self, msg: &[u8]) -> io::Result<usize> {
        self.socket.send_to(msg, &self.path)
    }

    pub(super) fn close(self) -> io::Result<()> {
        super::pending_error(self.socket.take_error())
    }
}
