/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Person name records as supplied by the host document.
//!
//! Field names follow the host's `Person.Name.*` layout so records can be
//! deserialized from its JSON or YAML without a mapping step.

use serde::{Deserialize, Serialize};

use crate::convention::{Convention, Side};
use crate::error::Result;
use crate::format::{format_name, FormattedName};

/// The name fragments of one person and their naming convention.
///
/// Every field is optional; an absent field and an empty string are kept
/// apart here but treated the same when formatting.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "PascalCase", default)]
pub struct NameInput {
    /// Own name particle, e.g. "van der".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    /// Partner's name particle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name_partner_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name_partner: Option<String>,
    /// Raw convention code, kept verbatim so unknown codes survive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub convention: Option<String>,
}

/// Prefix and family name of one side, borrowed from a [`NameInput`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FamilyParts<'a> {
    pub prefix: Option<&'a str>,
    pub family: Option<&'a str>,
}

impl NameInput {
    pub fn new(family_name: impl Into<String>) -> Self {
        NameInput {
            family_name: Some(family_name.into()),
            ..Default::default()
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.family_name_prefix = Some(prefix.into());
        self
    }

    /// Set the partner's family name and, optionally, its prefix.
    pub fn with_partner(
        mut self,
        prefix: Option<&str>,
        family_name: impl Into<String>,
    ) -> Self {
        self.family_name_partner_prefix = prefix.map(str::to_string);
        self.family_name_partner = Some(family_name.into());
        self
    }

    pub fn with_convention(mut self, code: impl Into<String>) -> Self {
        self.convention = Some(code.into());
        self
    }

    /// The effective convention; unknown or missing codes mean [`Convention::Own`].
    pub fn convention(&self) -> Convention {
        Convention::resolve(self.convention.as_deref())
    }

    pub fn side(&self, side: Side) -> FamilyParts<'_> {
        match side {
            Side::Own => FamilyParts {
                prefix: self.family_name_prefix.as_deref(),
                family: self.family_name.as_deref(),
            },
            Side::Partner => FamilyParts {
                prefix: self.family_name_partner_prefix.as_deref(),
                family: self.family_name_partner.as_deref(),
            },
        }
    }

    pub fn formatted(&self) -> FormattedName {
        format_name(self)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_yaml_str(s: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(s)?)
    }
}

/// A person record wrapping its name, as found in host documents.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "PascalCase")]
pub struct Person {
    #[serde(default)]
    pub name: NameInput,
}

impl Person {
    pub fn formatted(&self) -> FormattedName {
        format_name(&self.name)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_yaml_str(s: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(s)?)
    }
}
