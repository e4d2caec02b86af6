//! Usage listings printed when the caller omits arguments.
//!
//! These are informational only; invocations that end up here always exit
//! non-zero so a hook misconfiguration cannot pass as a valid certificate.

use std::fmt::Write as _;

use crate::domain::models::{
    FieldListing, ModuleListing, OperationListing, TypeListing, HELP_LINK,
};
use crate::services::extraction::SUPPORTED_FIELDS;
use crate::services::output::print_one;
use crate::services::registry::MODULES;

pub const SUPPORTED_TYPES: &[&str] = &["x509"];

pub fn print_supported_types(json: bool) -> anyhow::Result<()> {
    let listing = TypeListing {
        supported_types: SUPPORTED_TYPES.iter().map(|t| t.to_string()).collect(),
        help_link: HELP_LINK.to_string(),
    };
    print_one(json, listing, |l| {
        let mut out = String::from("supported certificate types:");
        for t in &l.supported_types {
            let _ = write!(out, "\n  {t}");
        }
        let _ = write!(out, "\nsee {}", l.help_link);
        out
    })
}

pub fn print_supported_operations(json: bool, certificate_type: &str) -> anyhow::Result<()> {
    let listing = if certificate_type == "x509" {
        OperationListing {
            supported: true,
            recognized_type: Some("X.509".to_string()),
            supported_modules: MODULES
                .iter()
                .map(|m| ModuleListing {
                    module_name: m.name.to_string(),
                    description: m.description.to_string(),
                })
                .collect(),
            supported_fields: SUPPORTED_FIELDS
                .iter()
                .map(|(name, description)| FieldListing {
                    part_of_certificate: name.to_string(),
                    description: description.to_string(),
                })
                .collect(),
            help_link: HELP_LINK.to_string(),
        }
    } else {
        OperationListing {
            supported: false,
            recognized_type: None,
            supported_modules: Vec::new(),
            supported_fields: Vec::new(),
            help_link: HELP_LINK.to_string(),
        }
    };

    print_one(json, listing, |l| {
        if !l.supported {
            return format!(
                "certificate type '{certificate_type}' is not supported\nsee {}",
                l.help_link
            );
        }
        let mut out = String::from("supported modules:");
        for m in &l.supported_modules {
            let _ = write!(out, "\n  {}\t{}", m.module_name, m.description);
        }
        out.push_str("\nsupported certificate parts:");
        for f in &l.supported_fields {
            let _ = write!(out, "\n  {}\t{}", f.part_of_certificate, f.description);
        }
        let _ = write!(out, "\nsee {}", l.help_link);
        out
    })
}
