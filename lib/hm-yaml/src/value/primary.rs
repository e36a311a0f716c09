/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::str::FromStr;

use anyhow::anyhow;
use yaml_rust::Yaml;

pub fn as_u16(v: &Yaml) -> anyhow::Result<u16> {
    match v {
        Yaml::String(s) => Ok(u16::from_str(s)?),
        Yaml::Integer(i) => Ok(u16::try_from(*i)?),
        _ => Err(anyhow!(
            "yaml value type for 'u16' should be 'string' or 'integer'"
        )),
    }
}

pub fn as_string(v: &Yaml) -> anyhow::Result<String> {
    match v {
        Yaml::String(s) => Ok(s.to_string()),
        Yaml::Integer(i) => Ok(i.to_string()),
        Yaml::Real(s) => Ok(s.to_string()),
        _ => Err(anyhow!(
            "yaml value type for string should be 'string' / 'integer' / 'real'"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_u16() {
        assert_eq!(as_u16(&Yaml::Integer(8125)).unwrap(), 8125);
        assert_eq!(as_u16(&Yaml::String("9125".to_string())).unwrap(), 9125);
        assert!(as_u16(&Yaml::Integer(-1)).is_err());
        assert!(as_u16(&Yaml::Integer(65536)).is_err());
        assert!(as_u16(&Yaml::Boolean(true)).is_err());
    }

    #[test]
    fn t_string() {
        assert_eq!(as_string(&Yaml::String("a".to_string())).unwrap(), "a");
        assert_eq!(as_string(&Yaml::Integer(1)).unwrap(), "1");
        assert!(as_string(&Yaml::Null).is_err());
    }
}
