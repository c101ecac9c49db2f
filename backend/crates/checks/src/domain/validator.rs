//! Validator Traits
//!
//! Capabilities the coordinator depends on. Implementations live in
//! [`services`](crate::domain::services); any other rule set can be swapped
//! in by implementing these traits.

use crate::domain::value_object::{Credentials, TriangleSides};
use crate::error::{CheckError, CheckResult};

/// Credential format check
pub trait CredentialValidator: Send + Sync {
    /// `Ok(())` if the pair has an acceptable shape, otherwise the first failing rule.
    fn check(&self, credentials: &Credentials) -> CheckResult<()>;
}

/// Triangle rule
///
/// Implementors supply the geometric test only. The positivity precondition
/// is applied by the provided [`check`](TriangleValidator::check) so every
/// rule set shares it.
pub trait TriangleValidator: Send + Sync {
    /// Whether sides already known to be positive form a triangle.
    fn validate(&self, sides: &TriangleSides) -> bool;

    /// `Err(NonPositiveSide)` if any side is `<= 0`, otherwise `Ok(self.validate(sides))`.
    ///
    /// `Ok(false)` is a successful outcome: valid input that is not a triangle.
    fn check(&self, sides: &TriangleSides) -> CheckResult<bool> {
        if sides.has_non_positive_side() {
            return Err(CheckError::NonPositiveSide);
        }
        Ok(self.validate(sides))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Accepts everything, to show the precondition is not up to the implementor.
    struct AlwaysTriangle;

    impl TriangleValidator for AlwaysTriangle {
        fn validate(&self, _sides: &TriangleSides) -> bool {
            true
        }
    }

    #[test]
    fn test_precondition_applies_to_any_validator() {
        let rule = AlwaysTriangle;
        assert_eq!(
            rule.check(&TriangleSides::new(1.0, 1.0, 0.0)),
            Err(CheckError::NonPositiveSide)
        );
        assert_eq!(rule.check(&TriangleSides::new(1.0, 1.0, 100.0)), Ok(true));
    }
}
