/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Last name and infix formatting.

use serde::{Deserialize, Serialize};

use crate::input::NameInput;

/// Joins own and partner family names in combined conventions.
pub const SURNAME_SEPARATOR: &str = " - ";

/// Both formatted outputs for one person.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "PascalCase")]
pub struct FormattedName {
    pub last_name: String,
    pub infix: String,
}

/// A fragment counts only when it is set and not blank.
pub fn is_present(field: Option<&str>) -> bool {
    field.is_some_and(|value| !value.trim().is_empty())
}

/// Format the last name according to the record's convention.
///
/// Missing family names contribute nothing, so a combined convention
/// without a partner name yields a dangling separator (`"Jansen -"`).
pub fn format_last_name(input: &NameInput) -> String {
    let convention = input.convention();
    let mut formatted = String::new();

    for (i, side) in convention.surname_order().iter().enumerate() {
        let parts = input.side(*side);
        if i > 0 {
            formatted.push_str(SURNAME_SEPARATOR);
            if let Some(prefix) = parts.prefix.filter(|p| is_present(Some(*p))) {
                formatted.push_str(prefix);
                formatted.push(' ');
            }
        }
        formatted.push_str(parts.family.unwrap_or_default());
    }

    let formatted = formatted.trim();
    tracing::trace!(%convention, last_name = formatted, "formatted last name");
    formatted.to_string()
}

/// Format the infix: the prefix of whichever family name leads.
pub fn format_infix(input: &NameInput) -> String {
    let convention = input.convention();
    let infix = input
        .side(convention.infix_side())
        .prefix
        .filter(|p| is_present(Some(*p)))
        .map(str::trim)
        .unwrap_or_default();

    tracing::trace!(%convention, infix, "formatted infix");
    infix.to_string()
}

pub fn format_name(input: &NameInput) -> FormattedName {
    FormattedName {
        last_name: format_last_name(input),
        infix: format_infix(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn couple(convention: &str) -> NameInput {
        NameInput {
            family_name_prefix: Some("de".to_string()),
            family_name: Some("Vries".to_string()),
            family_name_partner_prefix: Some("van der".to_string()),
            family_name_partner: Some("Bakker".to_string()),
            convention: Some(convention.to_string()),
        }
    }

    #[test]
    fn test_is_present() {
        assert!(!is_present(None));
        assert!(!is_present(Some("")));
        assert!(!is_present(Some("   ")));
        assert!(is_present(Some("van")));
    }

    #[test]
    fn test_last_name_per_convention() {
        assert_eq!(format_last_name(&couple("B")), "Vries");
        assert_eq!(format_last_name(&couple("P")), "Bakker");
        assert_eq!(format_last_name(&couple("BP")), "Vries - van der Bakker");
        assert_eq!(format_last_name(&couple("PB")), "Bakker - de Vries");
        assert_eq!(format_last_name(&couple("unknown")), "Vries");
    }

    #[test]
    fn test_infix_per_convention() {
        assert_eq!(format_infix(&couple("B")), "de");
        assert_eq!(format_infix(&couple("BP")), "de");
        assert_eq!(format_infix(&couple("P")), "van der");
        assert_eq!(format_infix(&couple("PB")), "van der");
        assert_eq!(format_infix(&couple("unknown")), "de");
    }

    #[test]
    fn test_blank_prefix_adds_no_text() {
        let mut input = couple("BP");
        input.family_name_partner_prefix = Some("  ".to_string());
        assert_eq!(format_last_name(&input), "Vries - Bakker");

        input.convention = Some("P".to_string());
        assert_eq!(format_infix(&input), "");
    }

    #[test]
    fn test_output_is_trimmed() {
        let input = NameInput {
            family_name_prefix: Some(" van ".to_string()),
            family_name: Some("  Dijk ".to_string()),
            ..Default::default()
        };
        assert_eq!(format_last_name(&input), "Dijk");
        assert_eq!(format_infix(&input), "van");
    }

    #[test]
    fn test_format_name_combines_both() {
        assert_eq!(
            format_name(&couple("PB")),
            FormattedName {
                last_name: "Bakker - de Vries".to_string(),
                infix: "van der".to_string(),
            }
        );
    }
}
