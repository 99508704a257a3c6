pub mod instructions;
pub mod quote;
pub mod swap;
pub mod version;

/// Skips optional strings that are unset or empty, so `Some("")` never reaches the wire.
pub(crate) fn is_unset_string(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}
