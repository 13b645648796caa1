//! Form field checks shared by the profile and account actors.

/// Syntactic e-mail check: `local@domain.tld`, no whitespace, one `@`, and a domain
/// made of non-empty dot-separated labels.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || email.chars().any(char::is_whitespace) {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2
        && labels.iter().all(|label| {
            !label.is_empty()
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        })
}

/// The part of an address before `@`, used to greet the recipient.
pub fn local_part(email: &str) -> &str {
    email.split_once('@').map(|(local, _)| local).unwrap_or(email)
}
