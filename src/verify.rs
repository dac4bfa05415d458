use crate::*;

/// Post-condition check: every output element satisfies `predicate`.
/// Reports the first offending position.
pub fn verify(output: &[i32], predicate: &MultipleOf) -> Result<(), SelectError> {
    for (position, value) in output.iter().enumerate() {
        if !predicate.test(value)? {
            return Err(SelectError::VerificationFailed {
                position,
                value: *value,
            });
        }
    }
    Ok(())
}

pub fn render(output: &[i32]) -> String {
    format!("w = {}", output.iter().join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_output() {
        assert_eq!(verify(&[3, 6, 9, 12], &MultipleOf::default()), Ok(()));
        assert_eq!(verify(&[], &MultipleOf::new(0)), Ok(()));
    }

    #[test]
    fn reports_first_violation() {
        assert_eq!(
            verify(&[3, 4, 6, 5], &MultipleOf::default()),
            Err(SelectError::VerificationFailed { position: 1, value: 4 })
        );
    }

    #[test]
    fn renders_space_separated() {
        assert_eq!(render(&[3, 6, 9, 12]), "w = 3 6 9 12");
        assert_eq!(render(&[]), "w = ");
    }
}
