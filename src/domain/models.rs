use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// All values extracted for one field of one certificate.
///
/// `items` is never empty: extraction that finds nothing reports
/// [`crate::domain::error::ValidatorError::EmptyField`] instead of
/// constructing this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateData {
    pub field_name: String,
    pub items: Vec<String>,
}

/// One parsed `{+|-}<module>=<field>[,<field>...]` command-line token.
///
/// Built purely from CLI text; field names are not checked against the
/// certificate here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleSpec {
    pub module_name: String,
    pub negate_policy: bool,
    pub fields: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ModuleResult {
    pub module: String,
    pub passed: bool,
}

/// Aggregated verdict of one validator run.
#[derive(Debug, Serialize)]
pub struct RunOutcome {
    pub passed: bool,
    pub results: Vec<ModuleResult>,
}

impl RunOutcome {
    pub fn new(results: Vec<ModuleResult>) -> Self {
        let passed = results.iter().all(|r| r.passed);
        Self { passed, results }
    }
}

pub const HELP_LINK: &str = "https://github.com";

#[derive(Serialize)]
pub struct TypeListing {
    pub supported_types: Vec<String>,
    pub help_link: String,
}

#[derive(Serialize)]
pub struct ModuleListing {
    pub module_name: String,
    pub description: String,
}

#[derive(Serialize)]
pub struct FieldListing {
    pub part_of_certificate: String,
    pub description: String,
}

#[derive(Serialize)]
pub struct OperationListing {
    pub supported: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recognized_type: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub supported_modules: Vec<ModuleListing>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub supported_fields: Vec<FieldListing>,
    pub help_link: String,
}
