// SPDX-FileCopyrightText: 2025 Contributors to the sdl3-rs project.
// SPDX-License-Identifier: Apache-2.0

//! The SDL gamepad mapping text format.
//!
//! A mapping is one line of comma-separated fields:
//!
//! ```text
//! 030000005e0400008e02000014010000,Xbox 360 Controller,a:b0,b:b1,leftx:a0,platform:Linux,
//! ```
//!
//! The first field is the device GUID in hex, the second the display name,
//! and every following non-empty field a `target:source` binding.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Error;

/// One `target:source` field of a mapping, e.g. `a:b0` or `leftx:a0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingBinding {
    pub target: String,
    pub source: String,
}

/// A parsed gamepad mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamepadMapping {
    pub guid: Uuid,
    pub name: String,
    /// Bindings in the order they appear in the text.
    pub bindings: Vec<MappingBinding>,
}

impl GamepadMapping {
    /// The source bound to `target`, if any.
    pub fn binding(&self, target: &str) -> Option<&str> {
        self.bindings
            .iter()
            .find(|binding| binding.target == target)
            .map(|binding| binding.source.as_str())
    }

    /// The platform this mapping is restricted to, if it names one.
    pub fn platform(&self) -> Option<&str> {
        self.binding("platform")
    }
}

impl FromStr for GamepadMapping {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut fields = text.trim().split(',');

        let guid = fields.next().unwrap_or_default().trim();
        if guid.is_empty() {
            return Err(Error::Mapping("missing GUID".to_string()));
        }
        let guid = Uuid::try_parse(guid)
            .map_err(|err| Error::Mapping(format!("invalid GUID '{guid}': {err}")))?;

        let name = fields
            .next()
            .ok_or_else(|| Error::Mapping("missing name".to_string()))?
            .to_string();

        let bindings = fields
            .filter(|field| !field.is_empty())
            .map(|field| {
                let (target, source) = field
                    .split_once(':')
                    .ok_or_else(|| Error::Mapping(format!("binding '{field}' has no ':'")))?;
                Ok(MappingBinding {
                    target: target.to_string(),
                    source: source.to_string(),
                })
            })
            .collect::<crate::Result<Vec<_>>>()?;

        Ok(Self {
            guid,
            name,
            bindings,
        })
    }
}

impl fmt::Display for GamepadMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},", self.guid.simple(), self.name)?;
        for binding in &self.bindings {
            write!(f, "{}:{},", binding.target, binding.source)?;
        }
        Ok(())
    }
}
