//! Fixed table of validation modules.
//!
//! Adding a new module means adding one entry to [`MODULES`]; the parser,
//! executor and orchestrator pick it up by name without changes.

/// A named, pure predicate over one extracted string value.
pub struct ValidationModule {
    pub name: &'static str,
    pub description: &'static str,
    pub check: fn(&str) -> bool,
}

pub const MODULES: &[ValidationModule] = &[ValidationModule {
    name: "isHostname",
    description: "Checks if the data is a valid hostname",
    check: is_hostname,
}];

pub fn lookup(name: &str) -> Option<&'static ValidationModule> {
    MODULES.iter().find(|m| m.name == name)
}

/// Syntactic hostname check: dot-separated labels of 1-63 characters from
/// `[A-Za-z0-9-]`, no label starting or ending with '-', at most 253
/// characters in total. No DNS resolution.
fn is_hostname(item: &str) -> bool {
    if item.is_empty() || item.len() > 253 {
        return false;
    }
    item.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
    })
}
