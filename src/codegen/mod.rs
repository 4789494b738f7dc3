mod enumeration;
mod render;
mod sanitize;

pub use enumeration::{CatalogEnumerations, EnumKind, Enumeration};
pub use render::{escape_string_literal, ConstantsFile};
pub use sanitize::sanitize_identifier;
