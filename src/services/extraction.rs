//! Named certificate field extraction.
//!
//! Each supported field maps to an ordered list of string values taken from
//! the certificate. Values come back byte-for-byte as decoded, with no
//! deduplication or case normalization, so modules see exactly what the
//! certificate carries.

use der::asn1::{Ia5StringRef, ObjectIdentifier, PrintableStringRef, Utf8StringRef};
use x509_cert::Certificate;

use crate::domain::error::ValidatorError;
use crate::domain::models::CertificateData;

const COMMON_NAME_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("2.5.4.3");

pub const SUPPORTED_FIELDS: &[(&str, &str)] =
    &[("CN", "The Common Name of the certificate")];

pub struct FieldExtractor<'a> {
    certificate: &'a Certificate,
}

impl<'a> FieldExtractor<'a> {
    pub fn new(certificate: &'a Certificate) -> Self {
        Self { certificate }
    }

    /// Extracts all values of `field_name` from the certificate.
    ///
    /// Fails with `UnsupportedField` for unrecognized names and with
    /// `EmptyField` when a recognized field has zero values; an empty
    /// result is never returned.
    pub fn extract(&self, field_name: &str) -> Result<CertificateData, ValidatorError> {
        let items = match field_name {
            "CN" => self.common_names(),
            _ => return Err(ValidatorError::UnsupportedField(field_name.to_string())),
        };
        if items.is_empty() {
            return Err(ValidatorError::EmptyField(field_name.to_string()));
        }
        Ok(CertificateData {
            field_name: field_name.to_string(),
            items,
        })
    }

    /// Every Common Name value in the Subject, in document order. A Subject
    /// may legally contain more than one CN RDN; all of them contribute.
    fn common_names(&self) -> Vec<String> {
        let subject = &self.certificate.tbs_certificate.subject;
        let mut names = Vec::new();
        for rdn in subject.0.iter() {
            for atv in rdn.0.iter() {
                if atv.oid != COMMON_NAME_OID {
                    continue;
                }
                if let Some(value) = decode_directory_string(&atv.value) {
                    names.push(value);
                }
            }
        }
        names
    }
}

/// Decodes an X.500 DirectoryString attribute value. Non-string values are
/// skipped rather than failing the whole extraction.
fn decode_directory_string(value: &der::Any) -> Option<String> {
    if let Ok(s) = PrintableStringRef::try_from(value) {
        Some(s.to_string())
    } else if let Ok(s) = Utf8StringRef::try_from(value) {
        Some(s.to_string())
    } else if let Ok(s) = Ia5StringRef::try_from(value) {
        Some(s.to_string())
    } else {
        None
    }
}
