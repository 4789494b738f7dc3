use chrono::{DateTime, Utc};
use std::fmt::{self, Write as FmtWrite};

use crate::codegen::enumeration::{CatalogEnumerations, EnumKind, Enumeration};
use crate::constants::{CONSTANTS_CLASS_NAME, GENERATED_HEADER};
use crate::error::Result;
use crate::models::{timestamp, BuildSelection, Catalog};

const INDENT: &str = "    ";

/// Fully resolved contents of the constants file.
///
/// Every selection has already been validated against its enumeration, so
/// rendering cannot reference a member that does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantsFile {
    pub enumerations: CatalogEnumerations,
    pub build_ticks: i64,
    pub version: String,
    pub release_type: String,
    pub platform: String,
    pub architecture: String,
    pub distribution: String,
}

impl ConstantsFile {
    pub fn resolve(
        catalog: &Catalog,
        build_time: &DateTime<Utc>,
        selection: &BuildSelection,
    ) -> Result<Self> {
        let enumerations = CatalogEnumerations::from_catalog(catalog)?;

        let release_type = enumerations.release_type.validate(&selection.release_type)?;
        let platform = enumerations.platform.validate(&selection.platform)?;
        let architecture = enumerations.architecture.validate(&selection.architecture)?;
        let distribution = enumerations.distribution.validate(&selection.distribution)?;

        Ok(Self {
            enumerations,
            build_ticks: timestamp::to_ticks(build_time)?,
            version: selection.version.clone(),
            release_type,
            platform,
            architecture,
            distribution,
        })
    }

    pub fn selected(&self, kind: EnumKind) -> &str {
        match kind {
            EnumKind::ReleaseType => &self.release_type,
            EnumKind::Platform => &self.platform,
            EnumKind::Architecture => &self.architecture,
            EnumKind::Distribution => &self.distribution,
        }
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

fn write_enum(f: &mut fmt::Formatter<'_>, enumeration: &Enumeration) -> fmt::Result {
    writeln!(f, "{INDENT}public enum {}", enumeration.kind().as_str())?;
    writeln!(f, "{INDENT}{{")?;
    for member in enumeration.members() {
        writeln!(f, "{INDENT}{INDENT}{},", member)?;
    }
    writeln!(f, "{INDENT}}}")?;
    writeln!(f)
}

impl fmt::Display for ConstantsFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "using System;")?;
        writeln!(f)?;
        writeln!(f, "{}", GENERATED_HEADER)?;
        writeln!(f)?;
        writeln!(f, "public static class {}", CONSTANTS_CLASS_NAME)?;
        writeln!(f, "{{")?;

        for kind in EnumKind::all() {
            write_enum(f, self.enumerations.get(kind))?;
        }

        writeln!(
            f,
            "{INDENT}public static readonly DateTime buildDate = new DateTime({});",
            self.build_ticks
        )?;
        writeln!(
            f,
            "{INDENT}public const string version = \"{}\";",
            escape_string_literal(&self.version)
        )?;
        for kind in EnumKind::all() {
            writeln!(
                f,
                "{INDENT}public const {ty} {} = {ty}.{};",
                kind.binding_name(),
                self.selected(kind),
                ty = kind.as_str()
            )?;
        }

        writeln!(f, "}}")?;
        writeln!(f)
    }
}

/// Escapes text for a regular (non-verbatim) string literal.
pub fn escape_string_literal(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '\0' => escaped.push_str("\\0"),
            '\u{2028}' => escaped.push_str("\\u2028"),
            '\u{2029}' => escaped.push_str("\\u2029"),
            c if c.is_control() => {
                let _ = write!(escaped, "\\u{:04x}", c as u32);
            }
            c => escaped.push(c),
        }
    }
    escaped
}
