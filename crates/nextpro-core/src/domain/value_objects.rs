//! Domain value objects: Integration, IntegrationSet, ProjectName.
//!
//! # Design
//!
//! These are pure value types: compared by value, no identity, no I/O.
//! Every template generator consults an [`IntegrationSet`] through
//! [`IntegrationSet::contains`]; nothing else decides which files exist.
//!
//! # Adding a New Integration
//!
//! 1. Add the enum variant and its `as_str` / `label` / `FromStr` arms here
//! 2. Append it to [`Integration::ALL`]
//! 3. Add its rules to the template tables in `crate::templates`

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

// ── Integration ──────────────────────────────────────────────────────────────

/// An optional third-party service wiring a generated project may include.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Integration {
    Stripe,
    Supabase,
    Ai,
}

impl Integration {
    /// Every known integration, in prompt order.
    pub const ALL: [Integration; 3] = [Self::Stripe, Self::Supabase, Self::Ai];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Stripe => "stripe",
            Self::Supabase => "supabase",
            Self::Ai => "ai",
        }
    }

    /// Human label shown in the interactive multi-select.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Stripe => "Stripe (payments)",
            Self::Supabase => "Supabase (database & auth)",
            Self::Ai => "AI (Vercel AI SDK / OpenAI)",
        }
    }
}

impl fmt::Display for Integration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Integration {
    type Err = DomainError;

    /// Canonical lowercase names only: `Stripe` is not `stripe`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|i| i.as_str() == s)
            .ok_or_else(|| DomainError::UnknownIntegration(s.to_string()))
    }
}

// ── IntegrationSet ───────────────────────────────────────────────────────────

/// The integrations selected for one run.
///
/// Known integrations iterate in [`Integration::ALL`] order no matter how
/// they were supplied. Entries from `--with` that name no known integration
/// are kept in [`IntegrationSet::unrecognized`]; they never satisfy a
/// membership test.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegrationSet {
    known: BTreeSet<Integration>,
    unrecognized: Vec<String>,
}

impl IntegrationSet {
    /// The empty set used by `--minimal`.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a comma-separated `--with` value.
    ///
    /// Entries are trimmed and empty entries dropped. Unknown names are not an
    /// error.
    pub fn from_comma_list(list: &str) -> Self {
        let mut set = Self::default();
        for entry in list.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            match entry.parse::<Integration>() {
                Ok(integration) => {
                    set.known.insert(integration);
                }
                Err(_) => set.unrecognized.push(entry.to_string()),
            }
        }
        set
    }

    pub fn contains(&self, integration: Integration) -> bool {
        self.known.contains(&integration)
    }

    /// `true` when no *known* integration is selected.
    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }

    pub fn len(&self) -> usize {
        self.known.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Integration> + '_ {
        self.known.iter().copied()
    }

    /// `--with` entries that did not name a known integration.
    pub fn unrecognized(&self) -> &[String] {
        &self.unrecognized
    }
}

impl FromIterator<Integration> for IntegrationSet {
    fn from_iter<I: IntoIterator<Item = Integration>>(iter: I) -> Self {
        Self {
            known: iter.into_iter().collect(),
            unrecognized: Vec::new(),
        }
    }
}

impl fmt::Display for IntegrationSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.known.is_empty() {
            return f.write_str("none");
        }
        let names: Vec<&str> = self.iter().map(|i| i.as_str()).collect();
        f.write_str(&names.join(","))
    }
}

// ── ProjectName ──────────────────────────────────────────────────────────────

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").expect("static pattern compiles"));

const NAME_REQUIRED: &str = "Project name is required";
const NAME_CHARSET: &str =
    "Project name must be lowercase and contain only letters, numbers, and hyphens";

/// Name of the project directory to generate.
///
/// Only the interactive path validates; a positional argument is taken
/// verbatim through [`ProjectName::unchecked`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    /// Validate and wrap a name.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        match Self::validation_message(raw) {
            None => Ok(Self(raw.to_string())),
            Some(reason) => Err(DomainError::InvalidProjectName {
                name: raw.to_string(),
                reason: reason.to_string(),
            }),
        }
    }

    /// Wrap a name without validation.
    pub fn unchecked(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The message interactive validation shows for `raw`, or `None` if valid.
    pub fn validation_message(raw: &str) -> Option<&'static str> {
        if raw.trim().is_empty() {
            Some(NAME_REQUIRED)
        } else if !NAME_PATTERN.is_match(raw) {
            Some(NAME_CHARSET)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integration_names_match_exactly_after_trim() {
        assert_eq!(" ai ".parse::<Integration>().unwrap(), Integration::Ai);
        assert_eq!("supabase".parse::<Integration>().unwrap(), Integration::Supabase);
        assert!("Stripe".parse::<Integration>().is_err());
        assert!("prisma".parse::<Integration>().is_err());
    }

    #[test]
    fn capitalised_entries_select_nothing() {
        let set = IntegrationSet::from_comma_list("Stripe,AI");
        assert!(set.is_empty());
        assert_eq!(set.unrecognized(), ["Stripe".to_string(), "AI".to_string()]);
    }

    #[test]
    fn comma_list_is_trimmed_and_ordered() {
        let set = IntegrationSet::from_comma_list(" ai , stripe,,");
        let order: Vec<_> = set.iter().collect();
        assert_eq!(order, vec![Integration::Stripe, Integration::Ai]);
        assert!(set.unrecognized().is_empty());
    }

    #[test]
    fn comma_list_keeps_unknown_entries_aside() {
        let set = IntegrationSet::from_comma_list("stripe,prisma");
        assert!(set.contains(Integration::Stripe));
        assert_eq!(set.len(), 1);
        assert_eq!(set.unrecognized(), ["prisma".to_string()]);
    }

    #[test]
    fn only_unknown_entries_leave_set_empty() {
        let set = IntegrationSet::from_comma_list("redis");
        assert!(set.is_empty());
        assert_eq!(set.to_string(), "none");
    }

    #[test]
    fn duplicates_collapse() {
        let set = IntegrationSet::from_comma_list("ai,ai, ai");
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn valid_names_pass() {
        for name in ["my-app", "app2", "a", "next-pro-15"] {
            assert!(ProjectName::parse(name).is_ok(), "failed for: {name}");
        }
    }

    #[test]
    fn uppercase_and_symbols_are_rejected_with_message() {
        let err = ProjectName::parse("My_App!").unwrap_err();
        match err {
            DomainError::InvalidProjectName { name, reason } => {
                assert_eq!(name, "My_App!");
                assert!(reason.contains("lowercase"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn blank_name_is_required() {
        assert_eq!(ProjectName::validation_message("   "), Some(NAME_REQUIRED));
        assert_eq!(ProjectName::validation_message(""), Some(NAME_REQUIRED));
    }

    #[test]
    fn unchecked_keeps_invalid_name_verbatim() {
        let name = ProjectName::unchecked("My_App!");
        assert_eq!(name.as_str(), "My_App!");
    }
}
