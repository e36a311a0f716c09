/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::fmt;

use hm_types::metrics::MetricsName;

use crate::StartError;

/// The `<service_id>.<host>` part put in front of every bucket name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatsdPrefix(String);

impl StatsdPrefix {
    pub fn new(service_id: &MetricsName, host_name: &str) -> Self {
        let host_name = sanitize_hostname(host_name);
        let mut s = String::with_capacity(service_id.as_str().len() + 1 + host_name.len());
        s.push_str(service_id.as_str());
        s.push('.');
        s.push_str(&host_name);
        StatsdPrefix(s)
    }

    pub fn with_local_hostname(service_id: &MetricsName) -> Result<Self, StartError> {
        let host_name = local_hostname()?;
        Ok(StatsdPrefix::new(service_id, &host_name))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    #[inline]
    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Display for StatsdPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Replace every `.` with `_`, so the host name is a single level in the
/// collector's dot delimited namespace.
pub fn sanitize_hostname(host_name: &str) -> String {
    host_name.replace('.', "_")
}

#[cfg(unix)]
pub fn local_hostname() -> Result<String, StartError> {
    let name = nix::unistd::gethostname().map_err(|e| StartError::HostResolution(e.to_string()))?;
    hostname_from_os(name)
}

#[cfg(unix)]
fn hostname_from_os(name: std::ffi::OsString) -> Result<String, StartError> {
    let name = name
        .into_string()
        .map_err(|_| StartError::HostResolution("host name is not valid utf-8".to_string()))?;
    if name.is_empty() {
        return Err(StartError::HostResolution("empty host name".to_string()));
    }
    Ok(name)
}

#[cfg(not(unix))]
pub fn local_hostname() -> Result<String, StartError> {
    match std::env::var("COMPUTERNAME").or_else(|_| std::env::var("HOSTNAME")) {
        Ok(name) if !name.is_empty() => Ok(name),
        Ok(_) => Err(StartError::HostResolution("empty host name".to_string())),
        Err(e) => Err(StartError::HostResolution(e.to_string())),
    }
}
