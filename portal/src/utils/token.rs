use chrono::Utc;
use rand::{Rng, distributions::Alphanumeric};

/// Generates a random alphanumeric string of the specified length.
///
/// # Examples
///
/// ```
/// use phc_portal::utils::token::generate_random_string;
///
/// let suffix = generate_random_string(8);
/// assert_eq!(suffix.len(), 8);
/// ```
pub fn generate_random_string(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Builds an opaque session token: `mock-token-<unix millis>-<8 random chars>`.
///
/// Uniqueness is best-effort. Nothing validates the token server-side.
pub fn generate_session_token() -> String {
    format!(
        "mock-token-{}-{}",
        Utc::now().timestamp_millis(),
        generate_random_string(8)
    )
}
