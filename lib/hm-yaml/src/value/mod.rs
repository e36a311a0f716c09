/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

mod fs;
mod metrics;
mod net;
mod primary;

pub use fs::as_absolute_path;
pub use metrics::as_metrics_name;
pub use net::as_ipaddr;
pub use primary::{as_string, as_u16};
