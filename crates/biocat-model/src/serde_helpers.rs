// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Deserializer, Serializer};

pub mod privacy_flag {
    use super::*;
    use crate::Privacy;

    pub fn serialize<S>(value: &Privacy, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(value.as_flag())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Privacy, D::Error>
    where
        D: Deserializer<'de>,
    {
        let flag = u8::deserialize(deserializer)?;
        if flag > 1 {
            return Err(serde::de::Error::custom("privacy flag must be 0 or 1"));
        }
        Ok(Privacy::from_flag(flag))
    }
}
