/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::net::IpAddr;
use std::str::FromStr;

use anyhow::{Context, anyhow};
use log::warn;
use yaml_rust::Yaml;

use hm_types::metrics::MetricsName;

use super::{StatsdBackend, StatsdClientConfig};

fn parse_host_port(s: &str) -> anyhow::Result<(String, u16)> {
    let (host, port) = s
        .rsplit_once(':')
        .ok_or_else(|| anyhow!("no port found in {s}"))?;
    let host = host
        .strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
        .unwrap_or(host);
    if host.is_empty() {
        return Err(anyhow!("empty host in {s}"));
    }
    let port = u16::from_str(port).map_err(|e| anyhow!("invalid port in {s}: {e}"))?;
    Ok((host.to_string(), port))
}

impl StatsdBackend {
    pub fn parse_udp_yaml(v: &Yaml) -> anyhow::Result<Self> {
        match v {
            Yaml::Hash(map) => {
                let mut host: Option<String> = None;
                let mut port: Option<u16> = None;
                let mut bind: Option<IpAddr> = None;

                hm_yaml::foreach_kv(map, |k, v| match hm_yaml::key::normalize(k).as_str() {
                    "host" => {
                        host = Some(
                            hm_yaml::value::as_string(v)
                                .context(format!("invalid host value for key {k}"))?,
                        );
                        Ok(())
                    }
                    "port" => {
                        port = Some(
                            hm_yaml::value::as_u16(v)
                                .context(format!("invalid port value for key {k}"))?,
                        );
                        Ok(())
                    }
                    "address" | "addr" => {
                        let s = hm_yaml::value::as_string(v)
                            .context(format!("invalid address value for key {k}"))?;
                        let (h, p) = parse_host_port(&s)?;
                        host = Some(h);
                        port = Some(p);
                        Ok(())
                    }
                    "bind_ip" | "bind" => {
                        bind = Some(
                            hm_yaml::value::as_ipaddr(v)
                                .context(format!("invalid value for key {k}"))?,
                        );
                        Ok(())
                    }
                    _ => Err(anyhow!("invalid key {k}")),
                })?;

                let Some(host) = host else {
                    return Err(anyhow!("no target host has been set"));
                };
                let Some(port) = port else {
                    return Err(anyhow!("no target port has been set"));
                };
                Ok(StatsdBackend::Udp { host, port, bind })
            }
            Yaml::String(s) => {
                let (host, port) = parse_host_port(s)?;
                Ok(StatsdBackend::Udp {
                    host,
                    port,
                    bind: None,
                })
            }
            _ => Err(anyhow!("invalid yaml value for udp statsd backend")),
        }
    }

    #[cfg(unix)]
    pub fn parse_unix_yaml(v: &Yaml) -> anyhow::Result<Self> {
        match v {
            Yaml::Hash(map) => {
                let mut path = None;

                hm_yaml::foreach_kv(map, |k, v| match hm_yaml::key::normalize(k).as_str() {
                    "path" => {
                        path = Some(
                            hm_yaml::value::as_absolute_path(v)
                                .context(format!("invalid value for key {k}"))?,
                        );
                        Ok(())
                    }
                    _ => Err(anyhow!("invalid key {k}")),
                })?;
                path.map(StatsdBackend::Unix)
                    .ok_or_else(|| anyhow!("no path has been set"))
            }
            Yaml::String(_) => {
                let path = hm_yaml::value::as_absolute_path(v)?;
                Ok(StatsdBackend::Unix(path))
            }
            _ => Err(anyhow!("invalid yaml value for unix statsd backend")),
        }
    }
}

impl StatsdClientConfig {
    /// Parse the client config from a yaml map.
    ///
    /// `service_id` is used unless the map sets its own. Without any target
    /// key the client sends to udp `127.0.0.1:8125`.
    pub fn parse_yaml(v: &Yaml, service_id: MetricsName) -> anyhow::Result<Self> {
        if let Yaml::Hash(map) = v {
            let mut config = StatsdClientConfig::new("127.0.0.1", 8125, service_id);
            hm_yaml::foreach_kv(map, |k, v| config.set_by_yaml_kv(k, v))?;
            Ok(config)
        } else {
            Err(anyhow!(
                "yaml value type for 'statsd client config' should be 'map'"
            ))
        }
    }

    fn set_by_yaml_kv(&mut self, k: &str, v: &Yaml) -> anyhow::Result<()> {
        match hm_yaml::key::normalize(k).as_str() {
            "target_udp" | "backend_udp" => {
                let target = StatsdBackend::parse_udp_yaml(v)
                    .context(format!("invalid value for key {k}"))?;
                self.set_backend(target);
            }
            #[cfg(unix)]
            "target_unix" | "backend_unix" => {
                let target = StatsdBackend::parse_unix_yaml(v)
                    .context(format!("invalid value for key {k}"))?;
                self.set_backend(target);
            }
            "target" | "backend" => {
                return if let Yaml::Hash(map) = v {
                    hm_yaml::foreach_kv(map, |k, v| match hm_yaml::key::normalize(k).as_str() {
                        "udp" => {
                            let target = StatsdBackend::parse_udp_yaml(v)
                                .context(format!("invalid value for key {k}"))?;
                            self.set_backend(target);
                            Ok(())
                        }
                        #[cfg(unix)]
                        "unix" => {
                            let target = StatsdBackend::parse_unix_yaml(v)
                                .context(format!("invalid value for key {k}"))?;
                            self.set_backend(target);
                            Ok(())
                        }
                        _ => Err(anyhow!("invalid key {k}")),
                    })
                    .context(format!("invalid value for key {k}"))
                } else {
                    Err(anyhow!("yaml value type for key {k} should be 'map'"))
                };
            }
            "service_id" | "prefix" => {
                let service_id = hm_yaml::value::as_metrics_name(v)
                    .context(format!("invalid metrics name value for key {k}"))?;
                self.set_service_id(service_id);
            }
            "emit_period" => {
                warn!("deprecated config key '{k}', please use 'emit_interval' instead");
                return self.set_by_yaml_kv("emit_interval", v);
            }
            "emit_interval" => {
                let interval = hm_yaml::humanize::as_duration(v)
                    .context(format!("invalid humanize duration value for key {k}"))?;
                self.set_emit_interval(interval);
            }
            _ => return Err(anyhow!("invalid key {k}")),
        }
        Ok(())
    }
}
