//! ID prefix constants.
//!
//! Every entity ID is `{prefix}-{8 hex chars}`, e.g. `usr-a3f8b2c1`.
//! The random part is generated by the database layer (`randomblob(4)`).

/// Prefix for user IDs.
pub const PREFIX_USER: &str = "usr";

/// Prefix for session IDs.
pub const PREFIX_SESSION: &str = "ses";

/// Prefix for message IDs.
pub const PREFIX_MESSAGE: &str = "msg";

/// All known prefixes, for exhaustive ID-format tests.
pub const ALL_PREFIXES: &[&str] = &[PREFIX_USER, PREFIX_SESSION, PREFIX_MESSAGE];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_are_three_chars() {
        for prefix in ALL_PREFIXES {
            assert_eq!(prefix.len(), 3, "prefix '{prefix}' should be 3 chars");
        }
    }

    #[test]
    fn prefixes_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for prefix in ALL_PREFIXES {
            assert!(seen.insert(prefix), "duplicate prefix '{prefix}'");
        }
    }
}
