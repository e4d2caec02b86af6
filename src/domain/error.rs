use thiserror::Error;

/// Exit code for the normal negative outcome (some module failed) and for
/// usage errors. Not part of [`ValidatorError`]: a failed validation is a
/// result, not an error.
pub const EXIT_VALIDATION_FAILED: u8 = 1;

pub const EXIT_CERTIFICATE_LOAD: u8 = 2;
pub const EXIT_SPECIFICATION: u8 = 3;
pub const EXIT_EXTRACTION: u8 = 4;

/// Everything that can abort a run before a verdict is reached.
///
/// Variants fall into three classes, each with its own exit code:
/// certificate load, module specification, field extraction.
#[derive(Debug, Error)]
pub enum ValidatorError {
    #[error("failed to read certificate bytes: {0}")]
    CertificateRead(#[from] std::io::Error),

    #[error("input is not valid PEM: {0}")]
    PemDecode(#[from] pem_rfc7468::Error),

    #[error("expected an X.509 certificate but read a '{0}' block")]
    NotAnX509Certificate(String),

    #[error("failed to parse X.509 certificate: {0}")]
    CertificateParse(#[from] der::Error),

    #[error("malformed module specification '{0}': missing delimiter '='")]
    MissingDelimiter(String),

    #[error("malformed module specification '{0}': missing policy sign '+' or '-'")]
    MissingPolicySign(String),

    #[error("malformed module specification '{0}': no fields to validate")]
    EmptyFieldList(String),

    #[error("no module with name '{0}' could be found")]
    UnknownModule(String),

    #[error("extraction of certificate field '{0}' is not supported")]
    UnsupportedField(String),

    #[error("certificate contains no values for field '{0}'")]
    EmptyField(String),
}

impl ValidatorError {
    /// Process exit code for this error class.
    pub fn exit_code(&self) -> u8 {
        use ValidatorError::*;
        match self {
            CertificateRead(_) | PemDecode(_) | NotAnX509Certificate(_) | CertificateParse(_) => {
                EXIT_CERTIFICATE_LOAD
            }
            MissingDelimiter(_) | MissingPolicySign(_) | EmptyFieldList(_) | UnknownModule(_) => {
                EXIT_SPECIFICATION
            }
            UnsupportedField(_) | EmptyField(_) => EXIT_EXTRACTION,
        }
    }
}
