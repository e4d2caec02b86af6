//! Module execution against bound certificate data.

use tracing::debug;

use crate::domain::models::CertificateData;
use crate::services::registry::ValidationModule;

/// One module invocation bound to the certificate data it validates.
///
/// Constructed once from fully-validated parts, executed once, discarded.
pub struct ModuleExecutor {
    module: &'static ValidationModule,
    negate_policy: bool,
    data: Vec<CertificateData>,
}

impl ModuleExecutor {
    pub fn new(
        module: &'static ValidationModule,
        negate_policy: bool,
        data: Vec<CertificateData>,
    ) -> Self {
        Self {
            module,
            negate_policy,
            data,
        }
    }

    pub fn signed_name(&self) -> String {
        let sign = if self.negate_policy { '-' } else { '+' };
        format!("{}{}", sign, self.module.name)
    }

    /// Evaluates each bound field in order. A field passes when every one of
    /// its values satisfies the predicate; the verdict for the field is
    /// `field_pass != negate_policy`, so `-module` requires the aggregated
    /// predicate to fail. The first false verdict fails the executor.
    pub fn execute(&self) -> bool {
        for field in &self.data {
            debug!(
                module = %self.signed_name(),
                field = %field.field_name,
                items = ?field.items,
                "validating certificate data"
            );
            let field_pass = field.items.iter().all(|item| (self.module.check)(item));
            if field_pass == self.negate_policy {
                return false;
            }
        }
        true
    }
}
