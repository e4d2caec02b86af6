//! Certificate loading from an injected byte source.
//!
//! The caller passes any `Read` (stdin in production, in-memory fixtures in
//! tests). The input must be a single PEM `CERTIFICATE` block containing a
//! DER-encoded X.509 certificate.

use std::io::Read;

use x509_cert::der::Decode;
use x509_cert::Certificate;

use crate::domain::error::ValidatorError;

const CERTIFICATE_LABEL: &str = "CERTIFICATE";

pub fn load_x509_certificate(reader: &mut impl Read) -> Result<Certificate, ValidatorError> {
    let mut pem = Vec::new();
    reader.read_to_end(&mut pem)?;

    let (label, der_bytes) = pem_rfc7468::decode_vec(&pem)?;
    if label != CERTIFICATE_LABEL {
        return Err(ValidatorError::NotAnX509Certificate(label.to_string()));
    }

    Ok(Certificate::from_der(&der_bytes)?)
}

#[cfg(test)]
mod tests {
    use super::load_x509_certificate;
    use crate::domain::error::ValidatorError;

    const HOSTNAME_CERT: &str = include_str!("../../tests/fixtures/cn_hostname.pem");
    const EC_KEY: &str = include_str!("../../tests/fixtures/ec_key.pem");

    #[test]
    fn loads_a_pem_certificate() {
        let cert = load_x509_certificate(&mut HOSTNAME_CERT.as_bytes()).expect("loads");
        assert!(cert
            .tbs_certificate
            .subject
            .to_string()
            .contains("example.com"));
    }

    #[test]
    fn rejects_non_certificate_pem_blocks() {
        let err = load_x509_certificate(&mut EC_KEY.as_bytes()).unwrap_err();
        assert!(matches!(err, ValidatorError::NotAnX509Certificate(label) if label == "EC PRIVATE KEY"));
    }

    #[test]
    fn rejects_garbage_input() {
        let err = load_x509_certificate(&mut "not a certificate".as_bytes()).unwrap_err();
        assert!(matches!(err, ValidatorError::PemDecode(_)));
    }

    #[test]
    fn rejects_empty_input() {
        let err = load_x509_certificate(&mut "".as_bytes()).unwrap_err();
        assert!(matches!(err, ValidatorError::PemDecode(_)));
    }
}
