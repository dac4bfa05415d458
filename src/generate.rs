use crate::*;

/// Bounds and seed for the pseudo-random input sequence.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct GeneratorConfig {
    #[builder(default = 1)]
    pub seed: u64,
    #[builder(default = 0)]
    pub min: i32,
    #[builder(default = 100)]
    pub max: i32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), SelectError> {
        if self.min > self.max {
            return Err(SelectError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// `n` values drawn uniformly from `[min, max]`; the same seed always yields the same sequence.
#[time]
pub fn generate(n: usize, config: &GeneratorConfig) -> Result<Vec<i32>, SelectError> {
    config.validate()?;
    let distribution = Uniform::new_inclusive(config.min, config.max);
    let mut engine = StdRng::seed_from_u64(config.seed);
    Ok((0..n).map(|_| distribution.sample(&mut engine)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible_per_seed() {
        let config = GeneratorConfig::default();
        let a = generate(500, &config).unwrap();
        let b = generate(500, &config).unwrap();
        assert_eq!(a, b);

        let other = generate(500, &GeneratorConfig::builder().seed(2).build()).unwrap();
        assert_ne!(a, other);
    }

    #[test]
    fn values_stay_in_bounds() {
        let config = GeneratorConfig::builder().min(-5).max(5).build();
        let v = generate(2000, &config).unwrap();
        assert_eq!(v.len(), 2000);
        assert!(v.iter().all(|x| (-5..=5).contains(x)));
        assert!(v.iter().any(|&x| x == -5) && v.iter().any(|&x| x == 5));
    }

    #[test]
    fn zero_length_and_single_value_range() {
        assert!(generate(0, &GeneratorConfig::default()).unwrap().is_empty());
        let fixed = GeneratorConfig::builder().min(7).max(7).build();
        assert_eq!(generate(3, &fixed).unwrap(), vec![7, 7, 7]);
    }

    #[test]
    fn inverted_range_is_rejected() {
        let config = GeneratorConfig::builder().min(10).max(0).build();
        assert_eq!(
            generate(4, &config),
            Err(SelectError::InvalidRange { min: 10, max: 0 })
        );
    }
}
