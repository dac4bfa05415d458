use crate::*;

/// `x % divisor == 0`. Evaluation fails instead of panicking when the remainder is undefined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("x % {divisor} == 0")]
pub struct MultipleOf {
    divisor: i32,
}

impl Default for MultipleOf {
    fn default() -> Self {
        Self::new(3)
    }
}

impl MultipleOf {
    pub fn new(divisor: i32) -> Self {
        Self { divisor }
    }
    pub fn divisor(&self) -> i32 {
        self.divisor
    }
    pub fn test(&self, x: &i32) -> Result<bool, SelectError> {
        match x.checked_rem(self.divisor) {
            Some(r) => Ok(r == 0),
            None => Err(SelectError::PredicateFault {
                value: *x,
                reason: if self.divisor == 0 {
                    "division by zero".to_string()
                } else {
                    "remainder overflows".to_string()
                },
            }),
        }
    }
}
