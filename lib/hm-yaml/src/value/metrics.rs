/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::str::FromStr;

use anyhow::anyhow;
use yaml_rust::Yaml;

use hm_types::metrics::MetricsName;

pub fn as_metrics_name(v: &Yaml) -> anyhow::Result<MetricsName> {
    if let Yaml::String(s) = v {
        let name = MetricsName::from_str(s).map_err(|e| anyhow!("invalid metrics name: {e}"))?;
        Ok(name)
    } else {
        Err(anyhow!(
            "yaml value type for 'metrics name' should be 'string'"
        ))
    }
}
