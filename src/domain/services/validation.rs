pub struct ServiceNameValidator;

impl ServiceNameValidator {
    /// Service names are opaque OS tokens, so the only hard rule is
    /// non-empty after trimming. Control characters never appear in real
    /// service names and would mangle the sc invocation.
    pub fn validate(name: &str) -> bool {
        let trimmed = name.trim();
        !trimmed.is_empty() && !trimmed.chars().any(|c| c.is_control())
    }
}
