use crate::domain::DomainError;

/// Result of one call to an inference endpoint.
///
/// `Ok(None)` means the endpoint answered successfully but the expected field
/// was missing or empty. Each component decides how to present that case.
pub type InferenceOutcome = Result<Option<String>, DomainError>;

/// Treats empty or whitespace-only payload fields as absent.
///
/// Used for image references, where a blank value cannot be displayed.
pub fn usable_field(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
