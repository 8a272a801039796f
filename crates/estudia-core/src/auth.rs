//! Credential primitive and registration validation.
//!
//! The credential is deliberately opaque to the rest of the system:
//! `hash_password`/`verify_password` are the only operations, so the scheme
//! is swappable without touching the store or controller. Current scheme:
//! SHA-256 over password+salt, hex-encoded, with a 16-byte hex salt.
//!
//! Validation messages are user-facing Spanish strings, matching the rest of
//! the product surface.

use sha2::{Digest, Sha256};

use crate::enums::PasswordStrength;
use crate::errors::CoreError;

/// Salt length in raw bytes (hex-encodes to 32 chars).
const SALT_BYTES: usize = 16;

/// Symbols counted toward password strength.
const STRENGTH_SYMBOLS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Generate a fresh random salt, hex-encoded.
///
/// # Errors
///
/// Returns `CoreError::Other` if the OS entropy source fails.
pub fn generate_salt() -> Result<String, CoreError> {
    let mut bytes = [0u8; SALT_BYTES];
    getrandom::fill(&mut bytes)
        .map_err(|e| CoreError::Other(anyhow::anyhow!("entropy source failed: {e}")))?;
    Ok(bytes.iter().map(|b| format!("{b:02x}")).collect())
}

/// Hash a password with a salt. Output is a 64-char lowercase hex digest.
#[must_use]
pub fn hash_password(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hasher.update(salt.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Check a password attempt against stored credential material.
#[must_use]
pub fn verify_password(password: &str, salt: &str, digest: &str) -> bool {
    hash_password(password, salt) == digest
}

/// Validate registration input. Returns the first failing rule as a
/// `CoreError::Validation` with a user-facing message.
///
/// Rules: all fields present; username 3–50 chars of `[A-Za-z0-9_]`;
/// plausible email; password ≥6 chars with at least one letter and one
/// digit; confirmation matches.
///
/// # Errors
///
/// Returns `CoreError::Validation` describing the first violated rule.
pub fn validate_registration(
    username: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), CoreError> {
    if username.is_empty() || email.is_empty() || password.is_empty() || confirm_password.is_empty()
    {
        return Err(CoreError::Validation(
            "Todos los campos son requeridos".into(),
        ));
    }

    if username.len() < 3 {
        return Err(CoreError::Validation(
            "El nombre de usuario debe tener al menos 3 caracteres".into(),
        ));
    }
    if username.len() > 50 {
        return Err(CoreError::Validation(
            "El nombre de usuario no puede tener más de 50 caracteres".into(),
        ));
    }
    if !username.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(CoreError::Validation(
            "El nombre de usuario solo puede contener letras, números y guiones bajos".into(),
        ));
    }

    if !is_plausible_email(email) {
        return Err(CoreError::Validation("Formato de email inválido".into()));
    }

    if password.len() < 6 {
        return Err(CoreError::Validation(
            "La contraseña debe tener al menos 6 caracteres".into(),
        ));
    }
    if password != confirm_password {
        return Err(CoreError::Validation(
            "Las contraseñas no coinciden".into(),
        ));
    }
    if !password.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err(CoreError::Validation(
            "La contraseña debe contener al menos una letra".into(),
        ));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(CoreError::Validation(
            "La contraseña debe contener al menos un número".into(),
        ));
    }

    Ok(())
}

/// Coarse strength level for a candidate password.
///
/// Scores one point each for: lowercase, uppercase, digit, symbol, length ≥8.
#[must_use]
pub fn password_strength(password: &str) -> PasswordStrength {
    if password.len() < 6 {
        return PasswordStrength::Weak;
    }

    let mut score = 0;
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| STRENGTH_SYMBOLS.contains(c)) {
        score += 1;
    }
    if password.len() >= 8 {
        score += 1;
    }

    match score {
        0..=2 => PasswordStrength::Weak,
        3 => PasswordStrength::Medium,
        4 => PasswordStrength::Strong,
        _ => PasswordStrength::VeryStrong,
    }
}

/// Pragmatic email shape check: `local@domain.tld` with a restricted
/// character set and an alphabetic TLD of ≥2 chars. Not RFC 5322.
fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    let local_ok = local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "._%+-".contains(c));
    if !local_ok {
        return false;
    }
    let domain_ok = domain
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-');
    if !domain_ok {
        return false;
    }
    let Some((_, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn salt_is_32_hex_chars_and_unique() {
        let a = generate_salt().unwrap();
        let b = generate_salt().unwrap();
        assert_eq!(a.len(), 32);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }

    #[test]
    fn hash_is_deterministic_and_salt_sensitive() {
        let digest = hash_password("secreto1", "aabbccdd");
        assert_eq!(digest, hash_password("secreto1", "aabbccdd"));
        assert_eq!(digest.len(), 64);
        assert_ne!(digest, hash_password("secreto1", "ddccbbaa"));
        assert_ne!(digest, hash_password("secreto2", "aabbccdd"));
    }

    #[test]
    fn verify_roundtrip() {
        let salt = generate_salt().unwrap();
        let digest = hash_password("clave123", &salt);
        assert!(verify_password("clave123", &salt, &digest));
        assert!(!verify_password("clave124", &salt, &digest));
    }

    #[rstest]
    #[case("", "a@b.com", "clave123", "clave123", "Todos los campos")]
    #[case("ab", "a@b.com", "clave123", "clave123", "al menos 3 caracteres")]
    #[case("user name", "a@b.com", "clave123", "clave123", "letras, números")]
    #[case("usuario", "not-an-email", "clave123", "clave123", "email inválido")]
    #[case("usuario", "a@b", "clave123", "clave123", "email inválido")]
    #[case("usuario", "a@b.com", "abc1", "abc1", "al menos 6 caracteres")]
    #[case("usuario", "a@b.com", "clave123", "clave124", "no coinciden")]
    #[case("usuario", "a@b.com", "123456", "123456", "al menos una letra")]
    #[case("usuario", "a@b.com", "abcdef", "abcdef", "al menos un número")]
    fn registration_rejects_invalid_input(
        #[case] username: &str,
        #[case] email: &str,
        #[case] password: &str,
        #[case] confirm: &str,
        #[case] expected_fragment: &str,
    ) {
        let err = validate_registration(username, email, password, confirm)
            .expect_err("input should be rejected");
        assert!(
            err.to_string().contains(expected_fragment),
            "expected '{expected_fragment}' in '{err}'"
        );
    }

    #[test]
    fn registration_accepts_valid_input() {
        validate_registration("ana_perez", "ana.perez@example.com", "clave123", "clave123")
            .expect("valid registration data");
    }

    #[test]
    fn username_too_long_is_rejected() {
        let long = "a".repeat(51);
        let err = validate_registration(&long, "a@b.com", "clave123", "clave123")
            .expect_err("long username rejected");
        assert!(err.to_string().contains("más de 50"));
    }

    #[rstest]
    #[case("corta", PasswordStrength::Weak)]
    #[case("abcdef", PasswordStrength::Weak)]
    #[case("abc123", PasswordStrength::Weak)]
    #[case("abcd1234", PasswordStrength::Medium)]
    #[case("Abcd1234", PasswordStrength::Strong)]
    #[case("Abcd123!", PasswordStrength::VeryStrong)]
    fn strength_levels(#[case] password: &str, #[case] expected: PasswordStrength) {
        assert_eq!(password_strength(password), expected);
    }
}
