//! Command-line module-specification grammar.
//!
//! One token is `{+|-}<module>=<field>[,<field>...]`. Parsing is syntactic
//! apart from one lookup: the module name is resolved against the registry
//! immediately, because an unknown module is a request-level error. Field
//! names are deliberately not checked here; the extractor owns field
//! semantics.

use crate::domain::error::ValidatorError;
use crate::domain::models::ModuleSpec;
use crate::services::registry;

pub fn parse_module_spec(token: &str) -> Result<ModuleSpec, ValidatorError> {
    let Some((module_part, field_part)) = token.split_once('=') else {
        return Err(ValidatorError::MissingDelimiter(token.to_string()));
    };

    let (negate_policy, module_name) = if let Some(name) = module_part.strip_prefix('+') {
        (false, name)
    } else if let Some(name) = module_part.strip_prefix('-') {
        (true, name)
    } else {
        return Err(ValidatorError::MissingPolicySign(token.to_string()));
    };

    if field_part.is_empty() {
        return Err(ValidatorError::EmptyFieldList(token.to_string()));
    }
    let fields: Vec<String> = field_part.split(',').map(str::to_string).collect();

    if registry::lookup(module_name).is_none() {
        return Err(ValidatorError::UnknownModule(module_name.to_string()));
    }

    Ok(ModuleSpec {
        module_name: module_name.to_string(),
        negate_policy,
        fields,
    })
}
