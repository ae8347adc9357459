//! URI template interpolation for resource wrappers.
//!
//! Resource URIs are templates such as
//! `/Accounts/{account_sid}/Queues/{sid}.json`. Path values are
//! percent-encoded so that identifiers containing reserved characters
//! (phone numbers with `+`, for instance) stay within one path segment.

/// Builds a URI from a template by interpolating path values.
///
/// Replaces `{name}` placeholders with the matching value from `values`.
/// Placeholders without a value are left untouched.
///
/// # Arguments
///
/// * `template` - The URI template with placeholders
/// * `values` - `(name, value)` pairs
///
/// # Example
///
/// ```rust
/// use twilio_api::rest::build_path;
///
/// let uri = build_path(
///     "/Accounts/{account_sid}/Queues/{sid}.json",
///     &[("account_sid", "AC123"), ("sid", "QU456")],
/// );
/// assert_eq!(uri, "/Accounts/AC123/Queues/QU456.json");
/// ```
#[must_use]
pub fn build_path(template: &str, values: &[(&str, &str)]) -> String {
    let mut result = template.to_string();

    for (name, value) in values {
        let placeholder = format!("{{{name}}}");
        result = result.replace(&placeholder, &urlencoding::encode(value));
    }

    result
}
