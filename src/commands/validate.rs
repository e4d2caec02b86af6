//! The validation pipeline: load, parse specs, extract, execute, aggregate.
//!
//! Stages run strictly in that order and the first failing stage aborts the
//! run; no module executes after a load, specification or extraction error.

use std::collections::HashMap;
use std::io::Read;

use tracing::{debug, info};

use crate::domain::error::ValidatorError;
use crate::domain::models::{CertificateData, ModuleResult, ModuleSpec, RunOutcome};
use crate::services::executor::ModuleExecutor;
use crate::services::extraction::FieldExtractor;
use crate::services::loader;
use crate::services::registry;
use crate::services::spec::parse_module_spec;

pub fn run_validation(
    spec_tokens: &[String],
    input: &mut impl Read,
) -> Result<RunOutcome, ValidatorError> {
    let certificate = loader::load_x509_certificate(input)?;
    let serial = certificate.tbs_certificate.serial_number.to_string();
    info!(serial = %serial, "loaded X.509 certificate");

    let specs = spec_tokens
        .iter()
        .map(|token| parse_module_spec(token))
        .collect::<Result<Vec<_>, _>>()?;

    let extractor = FieldExtractor::new(&certificate);
    let extracted = extract_referenced_fields(&extractor, &specs)?;
    let executors = bind_executors(&specs, &extracted)?;

    let mut results = Vec::with_capacity(executors.len());
    for executor in &executors {
        let passed = executor.execute();
        debug!(module = %executor.signed_name(), passed, "module executor finished");
        results.push(ModuleResult {
            module: executor.signed_name(),
            passed,
        });
    }

    let outcome = RunOutcome::new(results);
    if outcome.passed {
        info!(serial = %serial, "certificate passed validation");
    } else {
        info!(serial = %serial, "certificate failed validation");
    }
    Ok(outcome)
}

/// Extracts each distinct referenced field once. The certificate does not
/// change during a run, so a field appearing in several specs shares one
/// extraction.
fn extract_referenced_fields(
    extractor: &FieldExtractor<'_>,
    specs: &[ModuleSpec],
) -> Result<HashMap<String, CertificateData>, ValidatorError> {
    let mut extracted = HashMap::new();
    for spec in specs {
        for field in &spec.fields {
            if !extracted.contains_key(field) {
                extracted.insert(field.clone(), extractor.extract(field)?);
            }
        }
    }
    Ok(extracted)
}

fn bind_executors(
    specs: &[ModuleSpec],
    extracted: &HashMap<String, CertificateData>,
) -> Result<Vec<ModuleExecutor>, ValidatorError> {
    specs
        .iter()
        .map(|spec| {
            let module = registry::lookup(&spec.module_name)
                .ok_or_else(|| ValidatorError::UnknownModule(spec.module_name.clone()))?;
            let data = spec
                .fields
                .iter()
                .map(|field| {
                    extracted
                        .get(field)
                        .cloned()
                        .ok_or_else(|| ValidatorError::UnsupportedField(field.clone()))
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(ModuleExecutor::new(module, spec.negate_policy, data))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::run_validation;
    use crate::domain::error::ValidatorError;

    const HOSTNAME_CERT: &str = include_str!("../../tests/fixtures/cn_hostname.pem");
    const MIXED_CERT: &str = include_str!("../../tests/fixtures/cn_mixed.pem");
    const NO_CN_CERT: &str = include_str!("../../tests/fixtures/no_cn.pem");

    fn run(specs: &[&str], pem: &str) -> Result<bool, ValidatorError> {
        let tokens: Vec<String> = specs.iter().map(|s| s.to_string()).collect();
        run_validation(&tokens, &mut pem.as_bytes()).map(|outcome| outcome.passed)
    }

    #[test]
    fn hostname_certificate_passes_positive_policy() {
        assert!(run(&["+isHostname=CN"], HOSTNAME_CERT).expect("runs"));
        assert!(!run(&["-isHostname=CN"], HOSTNAME_CERT).expect("runs"));
    }

    #[test]
    fn overall_verdict_is_the_and_over_executors() {
        let passed = run(&["+isHostname=CN", "-isHostname=CN"], HOSTNAME_CERT).expect("runs");
        assert!(!passed);
    }

    #[test]
    fn mixed_common_names_fail_positive_and_satisfy_negative() {
        assert!(!run(&["+isHostname=CN"], MIXED_CERT).expect("runs"));
        assert!(run(&["-isHostname=CN"], MIXED_CERT).expect("runs"));
    }

    #[test]
    fn per_executor_results_are_reported_in_argument_order() {
        let tokens = vec!["+isHostname=CN".to_string(), "-isHostname=CN".to_string()];
        let outcome =
            super::run_validation(&tokens, &mut HOSTNAME_CERT.as_bytes()).expect("runs");
        assert_eq!(outcome.results.len(), 2);
        assert_eq!(outcome.results[0].module, "+isHostname");
        assert!(outcome.results[0].passed);
        assert_eq!(outcome.results[1].module, "-isHostname");
        assert!(!outcome.results[1].passed);
    }

    #[test]
    fn specification_errors_abort_before_extraction() {
        // The unsupported field 'OU' would be an extraction error, but the
        // malformed second token must win: specs parse before extraction.
        let err = run(&["+isHostname=OU", "isHostname=CN"], HOSTNAME_CERT).unwrap_err();
        assert!(matches!(err, ValidatorError::MissingPolicySign(_)));
    }

    #[test]
    fn unsupported_field_aborts_the_run() {
        let err = run(&["+isHostname=OU"], HOSTNAME_CERT).unwrap_err();
        assert!(matches!(err, ValidatorError::UnsupportedField(field) if field == "OU"));
    }

    #[test]
    fn missing_common_name_aborts_the_run() {
        let err = run(&["+isHostname=CN"], NO_CN_CERT).unwrap_err();
        assert!(matches!(err, ValidatorError::EmptyField(field) if field == "CN"));
    }

    #[test]
    fn runs_are_deterministic() {
        let first = run(&["+isHostname=CN"], MIXED_CERT).expect("runs");
        let second = run(&["+isHostname=CN"], MIXED_CERT).expect("runs");
        assert_eq!(first, second);
    }
}
