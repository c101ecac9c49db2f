//! Domain Services
//!
//! The concrete rules: [`CredentialFormatChecker`] and [`BasicTriangleValidator`].
//! Both are pure and hold no per-request state.

use crate::domain::validator::{CredentialValidator, TriangleValidator};
use crate::domain::value_object::{Credentials, TriangleSides};
use crate::error::{CheckError, CheckResult};
use unicode_general_category::{GeneralCategory, get_general_category};

// ============================================================================
// Constants
// ============================================================================

/// Required username length, in characters
pub const USERNAME_LENGTH: usize = 5;

/// Substring every password must contain (case-sensitive)
pub const PASSWORD_MARKER: &str = "SWUST";

// ============================================================================
// Credential format
// ============================================================================

/// Parameters of the credential format rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialPolicy {
    /// Exact username length in characters (Unicode scalar values)
    pub username_length: usize,
    /// Literal substring the password must contain
    pub password_marker: String,
}

impl Default for CredentialPolicy {
    fn default() -> Self {
        Self {
            username_length: USERNAME_LENGTH,
            password_marker: PASSWORD_MARKER.to_string(),
        }
    }
}

/// Checks the shape of a username/password pair.
///
/// Rules, first failure wins:
/// 1. username is exactly `username_length` characters, all alphabetic
/// 2. password contains `password_marker`
///
/// This does not look anything up. A pair that passes is well formed, not
/// authenticated.
#[derive(Debug, Clone, Default)]
pub struct CredentialFormatChecker {
    policy: CredentialPolicy,
}

impl CredentialFormatChecker {
    pub fn new(policy: CredentialPolicy) -> Self {
        Self { policy }
    }

    fn is_valid_username(&self, username: &str) -> bool {
        username.chars().count() == self.policy.username_length
            && username.chars().all(is_letter)
    }
}

/// Letter categories only (Lu, Ll, Lt, Lm, Lo).
///
/// Narrower than `char::is_alphabetic`, which also admits letter numbers
/// such as `Ⅰ` and combining marks such as Devanagari vowel signs.
fn is_letter(ch: char) -> bool {
    matches!(
        get_general_category(ch),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

impl CredentialValidator for CredentialFormatChecker {
    fn check(&self, credentials: &Credentials) -> CheckResult<()> {
        if !self.is_valid_username(&credentials.username) {
            return Err(CheckError::InvalidUsername {
                length: self.policy.username_length,
            });
        }

        if !credentials
            .password
            .contains(self.policy.password_marker.as_str())
        {
            return Err(CheckError::MissingPasswordMarker {
                marker: self.policy.password_marker.clone(),
            });
        }

        Ok(())
    }
}

// ============================================================================
// Triangle
// ============================================================================

/// Strict triangle inequality, exact float comparison.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicTriangleValidator;

impl TriangleValidator for BasicTriangleValidator {
    fn validate(&self, sides: &TriangleSides) -> bool {
        sides.satisfies_triangle_inequality()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(username: &str, password: &str) -> CheckResult<()> {
        CredentialFormatChecker::default().check(&Credentials::new(username, password))
    }

    mod credential_format {
        use super::*;

        #[test]
        fn test_valid_pair() {
            assert_eq!(check("alice", "SWUST123"), Ok(()));
            assert_eq!(check("ABCDE", "xxSWUSTxx"), Ok(()));
            assert_eq!(check("aBcDe", "SWUST"), Ok(()));
        }

        #[test]
        fn test_username_wrong_length() {
            for username in ["", "a", "alic", "alices", "abcdefghij"] {
                assert_eq!(
                    check(username, "SWUST"),
                    Err(CheckError::InvalidUsername { length: 5 }),
                    "username {username:?}"
                );
            }
        }

        #[test]
        fn test_username_non_alphabetic() {
            for username in ["al1ce", "ali e", "alic_", "12345", "ali-e", "alic\t"] {
                assert_eq!(
                    check(username, "SWUST"),
                    Err(CheckError::InvalidUsername { length: 5 }),
                    "username {username:?}"
                );
            }
        }

        #[test]
        fn test_username_counts_characters_not_bytes() {
            // 5 alphabetic characters, 10 bytes
            assert_eq!(check("éléan", "SWUST"), Ok(()));
            assert_eq!(check("日本語です", "SWUST"), Ok(()));
        }

        #[test]
        fn test_username_letters_only() {
            // Letter number (Nl), combining mark (Mn), Devanagari vowel sign (Mc)
            let usernames = [
                "abcd\u{2160}",
                "abcd\u{345}",
                "\u{915}\u{93e}\u{915}\u{93e}\u{915}",
            ];
            for username in usernames {
                assert_eq!(
                    check(username, "SWUST"),
                    Err(CheckError::InvalidUsername { length: 5 }),
                    "username {username:?}"
                );
            }
            // Titlecase (Lt) and modifier (Lm) letters count
            assert_eq!(check("\u{1c5}abcd", "SWUST"), Ok(()));
            assert_eq!(check("abcd\u{2b0}", "SWUST"), Ok(()));
        }

        #[test]
        fn test_password_missing_marker() {
            for password in ["hunter2", "", "swust", "SWUS T", "SwUsT"] {
                assert_eq!(
                    check("alice", password),
                    Err(CheckError::MissingPasswordMarker {
                        marker: "SWUST".to_string()
                    }),
                    "password {password:?}"
                );
            }
        }

        #[test]
        fn test_username_checked_first() {
            assert_eq!(
                check("al1ce", "hunter2"),
                Err(CheckError::InvalidUsername { length: 5 })
            );
        }

        #[test]
        fn test_custom_policy() {
            let checker = CredentialFormatChecker::new(CredentialPolicy {
                username_length: 3,
                password_marker: "ZZ".to_string(),
            });
            assert_eq!(checker.check(&Credentials::new("bob", "aZZb")), Ok(()));
            assert_eq!(
                checker.check(&Credentials::new("alice", "aZZb")),
                Err(CheckError::InvalidUsername { length: 3 })
            );
            let err = checker
                .check(&Credentials::new("bob", "SWUST"))
                .unwrap_err();
            assert_eq!(err.to_string(), "Password must contain \"ZZ\".");
        }
    }

    mod triangle {
        use super::*;

        fn check(a: f64, b: f64, c: f64) -> CheckResult<bool> {
            BasicTriangleValidator.check(&TriangleSides::new(a, b, c))
        }

        #[test]
        fn test_triangles() {
            assert_eq!(check(3.0, 4.0, 5.0), Ok(true));
            assert_eq!(check(1.0, 1.0, 1.0), Ok(true));
            assert_eq!(check(0.5, 0.5, 0.9), Ok(true));
        }

        #[test]
        fn test_not_triangles() {
            assert_eq!(check(1.0, 1.0, 3.0), Ok(false));
            assert_eq!(check(10.0, 1.0, 2.0), Ok(false));
            assert_eq!(check(1.0, 10.0, 2.0), Ok(false));
        }

        #[test]
        fn test_degenerate_rejected() {
            assert_eq!(check(2.0, 2.0, 4.0), Ok(false));
            assert_eq!(check(1.0, 2.0, 3.0), Ok(false));
            assert_eq!(check(3.0, 1.0, 2.0), Ok(false));
        }

        #[test]
        fn test_non_positive_wins_over_geometry() {
            assert_eq!(check(-1.0, 2.0, 2.0), Err(CheckError::NonPositiveSide));
            assert_eq!(check(3.0, 4.0, 0.0), Err(CheckError::NonPositiveSide));
            assert_eq!(check(3.0, -4.0, 5.0), Err(CheckError::NonPositiveSide));
        }

        #[test]
        fn test_no_epsilon() {
            // 0.1 + 0.2 > 0.3 in binary floating point
            assert_eq!(check(0.1, 0.2, 0.3), Ok(true));
        }
    }
}
