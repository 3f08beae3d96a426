use pharmacy_core::DomainError;
use pharmacy_infra::StoreError;

use crate::app::flash::Flash;

/// Flash for a store failure during `action` (e.g. "adding medicine").
///
/// The failure is logged here so handlers only decide where to send the user.
pub fn store_error_flash(action: &str, err: &StoreError) -> Flash {
    tracing::error!(action, error = %err, "store operation failed");
    Flash::danger(format!("Error {action}: {err}"))
}

/// Flash for input rejected at the boundary.
pub fn domain_error_flash(err: &DomainError) -> Flash {
    tracing::warn!(error = %err, "request rejected");
    Flash::danger(err.user_message())
}

pub fn not_found_flash() -> Flash {
    Flash::danger(DomainError::not_found().user_message())
}
