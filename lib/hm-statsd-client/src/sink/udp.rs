/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::io;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, ToSocketAddrs, UdpSocket};

pub(super) struct UdpMetricsSink {
    addr: SocketAddr,
    socket: UdpSocket,
}

impl UdpMetricsSink {
    pub(super) fn open(host: &str, port: u16, bind: Option<IpAddr>) -> io::Result<Self> {
        if host.is_empty() {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, "empty host"));
        }
        if port == 0 {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, "invalid port 0"));
        }

        let addr = select_peer_addr((host, port).to_socket_addrs()?, bind).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no usable address found for host {host}"),
            )
        })?;

        let bind_ip = bind.unwrap_or(match addr {
            SocketAddr::V4(_) => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            SocketAddr::V6(_) => IpAddr::V6(Ipv6Addr::UNSPECIFIED),
        });
        let socket = UdpSocket::bind(SocketAddr::new(bind_ip, 0))?;
        Ok(UdpMetricsSink { addr, socket })
    }

    pub(super) fn send_msg(&self, msg: &[u8]) -> io::Result<usize> {
        self.socket.send_to(msg, self.addr)
    }

    pub(super) fn close(self) -> io::Result<()> {
        super::pending_error(self.socket.take_error())
    }
}

/// Pick the peer address out of the resolved ones.
///
/// With a bind ip only addresses of the same family are usable. Without one
/// the first IPv4 address wins, as collectors are mostly listening on IPv4
/// only, and the first address is used if there is no IPv4 one.
fn select_peer_addr<I>(addrs: I, bind: Option<IpAddr>) -> Option<SocketAddr>
where
    I: IntoIterator<Item = SocketAddr>,
{
    match bind {
        Some(ip) => addrs.into_iter().find(|addr| ip.is_ipv4() == addr.is_ipv4()),
        None => {
            let mut first = None;
            for addr in addrs {
                if addr.is_ipv4() {
                    return Some(addr);
                }
                if first.is_none() {
                    first = Some(addr);
                }
            }
            first
        }
    }
}
