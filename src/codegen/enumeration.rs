use std::collections::HashSet;

use crate::codegen::sanitize::sanitize_identifier;
use crate::constants::NONE;
use crate::error::Result;
use crate::models::{Catalog, Selection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnumKind {
    ReleaseType,
    Platform,
    Architecture,
    Distribution,
}

impl EnumKind {
    /// Type name of the generated enumeration.
    pub fn as_str(&self) -> &'static str {
        match self {
            EnumKind::ReleaseType => "ReleaseType",
            EnumKind::Platform => "Platform",
            EnumKind::Architecture => "Architecture",
            EnumKind::Distribution => "Distribution",
        }
    }

    /// Name of the constant holding the current selection.
    pub fn binding_name(&self) -> &'static str {
        match self {
            EnumKind::ReleaseType => "releaseType",
            EnumKind::Platform => "platform",
            EnumKind::Architecture => "architecture",
            EnumKind::Distribution => "distribution",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EnumKind::ReleaseType => "release type",
            EnumKind::Platform => "platform",
            EnumKind::Architecture => "architecture",
            EnumKind::Distribution => "distribution",
        }
    }

    pub fn all() -> [Self; 4] {
        [
            EnumKind::ReleaseType,
            EnumKind::Platform,
            EnumKind::Architecture,
            EnumKind::Distribution,
        ]
    }
}

/// Ordered, deduplicated identifiers of one generated enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enumeration {
    kind: EnumKind,
    members: Vec<String>,
}

impl Enumeration {
    /// Builds the member list from raw names already filtered by the caller.
    ///
    /// The list always starts with `None`; a name whose identifier is already
    /// present (including one that sanitizes to `None`) is dropped.
    pub fn build<'a, I>(kind: EnumKind, names: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut members = vec![NONE.to_string()];
        let mut seen: HashSet<String> = HashSet::from([NONE.to_string()]);

        for name in names {
            let identifier = sanitize_identifier(name, kind.label())?;
            if seen.insert(identifier.clone()) {
                members.push(identifier);
            } else {
                log::debug!(
                    "Dropping duplicate {} '{}' (identifier '{}' already present)",
                    kind.label(),
                    name,
                    identifier
                );
            }
        }

        Ok(Self { kind, members })
    }

    pub fn kind(&self) -> EnumKind {
        self.kind
    }

    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.members.iter().any(|m| m == identifier)
    }

    /// Resolves a selection to a member of this enumeration, falling back to
    /// `None` when it is absent or not a member.
    pub fn validate(&self, selection: &Selection) -> Result<String> {
        let Some(name) = selection.name() else {
            return Ok(NONE.to_string());
        };

        let identifier = sanitize_identifier(name, self.kind.label())?;
        if self.contains(&identifier) {
            Ok(identifier)
        } else {
            log::warn!(
                "Selected {} '{}' is not an enabled {} entry; using {}",
                self.kind.label(),
                name,
                self.kind.as_str(),
                NONE
            );
            Ok(NONE.to_string())
        }
    }
}

/// The four enumerations derived from one catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEnumerations {
    pub release_type: Enumeration,
    pub platform: Enumeration,
    pub architecture: Enumeration,
    pub distribution: Enumeration,
}

impl CatalogEnumerations {
    pub fn from_catalog(catalog: &Catalog) -> Result<Self> {
        Ok(Self {
            release_type: Enumeration::build(EnumKind::ReleaseType, catalog.release_type_names())?,
            platform: Enumeration::build(EnumKind::Platform, catalog.enabled_platform_names())?,
            architecture: Enumeration::build(
                EnumKind::Architecture,
                catalog.enabled_architecture_names(),
            )?,
            distribution: Enumeration::build(
                EnumKind::Distribution,
                catalog.enabled_distribution_names(),
            )?,
        })
    }

    pub fn get(&self, kind: EnumKind) -> &Enumeration {
        match kind {
            EnumKind::ReleaseType => &self.release_type,
            EnumKind::Platform => &self.platform,
            EnumKind::Architecture => &self.architecture,
            EnumKind::Distribution => &self.distribution,
        }
    }
}
