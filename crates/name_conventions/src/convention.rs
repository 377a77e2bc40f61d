/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Naming conventions.
//!
//! A convention decides whose family name a person goes by, and in which
//! order the own and partner family names are combined.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NamingError;

/// Which half of a couple a name fragment belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The person's own (birth) family name.
    Own,
    /// The partner's family name.
    Partner,
}

/// How own and partner family names combine into a last name.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub enum Convention {
    /// Own family name only ("B").
    #[default]
    #[serde(rename = "B")]
    Own,
    /// Partner's family name only ("P").
    #[serde(rename = "P")]
    Partner,
    /// Own family name, then the partner's ("BP").
    #[serde(rename = "BP")]
    OwnPartner,
    /// Partner's family name, then the own ("PB").
    #[serde(rename = "PB")]
    PartnerOwn,
}

impl Convention {
    pub const ALL: [Convention; 4] = [
        Convention::Own,
        Convention::Partner,
        Convention::OwnPartner,
        Convention::PartnerOwn,
    ];

    /// The short code used in person records.
    pub fn as_code(&self) -> &'static str {
        match self {
            Convention::Own => "B",
            Convention::Partner => "P",
            Convention::OwnPartner => "BP",
            Convention::PartnerOwn => "PB",
        }
    }

    /// Resolve a raw convention code, falling back to [`Convention::Own`].
    ///
    /// Missing, empty and unrecognized codes all resolve to the default
    /// rather than failing; use [`str::parse`] when strictness is wanted.
    pub fn resolve(code: Option<&str>) -> Convention {
        match code {
            None | Some("") => Convention::default(),
            Some(code) => code.parse().unwrap_or_else(|_| {
                tracing::debug!(code, "unrecognized naming convention, using own name");
                Convention::default()
            }),
        }
    }

    /// The side whose prefix becomes the infix.
    pub fn infix_side(&self) -> Side {
        match self {
            Convention::Own | Convention::OwnPartner => Side::Own,
            Convention::Partner | Convention::PartnerOwn => Side::Partner,
        }
    }

    /// Family names in display order.
    ///
    /// The leading name is written bare (its prefix is the infix); any
    /// following name keeps its own prefix.
    pub fn surname_order(&self) -> &'static [Side] {
        match self {
            Convention::Own => &[Side::Own],
            Convention::Partner => &[Side::Partner],
            Convention::OwnPartner => &[Side::Own, Side::Partner],
            Convention::PartnerOwn => &[Side::Partner, Side::Own],
        }
    }
}

impl FromStr for Convention {
    type Err = NamingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "B" => Ok(Convention::Own),
            "P" => Ok(Convention::Partner),
            "BP" => Ok(Convention::OwnPartner),
            "PB" => Ok(Convention::PartnerOwn),
            other => Err(NamingError::UnknownConvention(other.to_string())),
        }
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}
