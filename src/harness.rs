use crate::*;

/// Generates the input, selects the elements satisfying the configured
/// predicate and checks the result before handing it back.
pub fn run(args: &Args) -> Result<Vec<i32>, SelectError> {
    args.validate()?;
    let predicate = args.predicate();
    let compactor = args.compactor();
    info!(
        "Selecting `{}` from {} elements ({}, {} threads)",
        predicate,
        args.length,
        compactor.strategy(),
        rayon::current_num_threads()
    );

    let v = generate(args.length, &args.generator())?;
    let w = compactor.try_select(&v, |x| predicate.test(x))?;
    verify(&w, &predicate)?;

    info!("Kept {} of {} elements", w.len(), v.len());
    if w.is_empty() && !v.is_empty() {
        warn!("No element satisfies `{}`", predicate);
    }
    Ok(w)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;

    fn args(extra: &[&str]) -> Args {
        let argv = ["stream-select"].iter().chain(extra.iter()).copied();
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn strategies_agree_on_generated_input() {
        let sequential = run(&args(&["5000", "--strategy", "sequential"])).unwrap();
        let parallel = run(&args(&["5000", "--strategy", "parallel", "--chunk-len", "97"])).unwrap();
        assert_eq!(sequential, parallel);

        let input = generate(5000, &GeneratorConfig::default()).unwrap();
        let expected: Vec<i32> = input.into_iter().filter(|x| x % 3 == 0).collect();
        assert_eq!(sequential, expected);
    }

    #[test]
    fn zero_length_yields_empty_output() {
        assert_eq!(run(&args(&["0"])), Ok(vec![]));
    }

    #[test]
    fn zero_divisor_faults_only_when_evaluated() {
        assert_eq!(run(&args(&["0", "--divisor", "0"])), Ok(vec![]));
        let err = run(&args(&["10", "--divisor", "0"])).unwrap_err();
        assert!(matches!(err, SelectError::PredicateFault { .. }));
        assert_eq!(err.exit_code(), 3);
    }

    proptest::proptest! {
        #[test]
        fn output_passes_its_own_check(seed in 0u64..1000, length in 0usize..3000, divisor in 1i32..10) {
            let w = run(&args(&[
                &length.to_string(),
                "--seed",
                &seed.to_string(),
                "--divisor",
                &divisor.to_string(),
                "--chunk-len",
                "64",
            ]))
            .unwrap();
            proptest::prop_assert!(w.iter().all(|x| x % divisor == 0));
        }
    }

    #[test]
    fn invalid_configuration_is_reported_before_generation() {
        assert_eq!(
            run(&args(&["10", "--min", "9", "--max", "1"])),
            Err(SelectError::InvalidRange { min: 9, max: 1 })
        );
    }
}
