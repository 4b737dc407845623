//! E-mail helpers

/// Mask an e-mail address for logging, keeping the first character of the
/// local part and the full domain: `alice@example.com` → `a***@example.com`.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first: String = local.chars().take(1).collect();
            format!("{}***@{}", first, domain)
        }
        None => "***".to_string(),
    }
}

/// Canonical form used for lookups, creation and product keys: trimmed and
/// lowercased, so one mailbox maps to one account in every store.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
