use crate::*;
use clap::Parser;

/// Order-preserving stream compaction over a seeded random sequence
#[derive(Parser, Debug, Clone)]
#[command(name = "stream-select", version, about)]
pub struct Args {
    /// Number of elements to generate
    #[arg(value_name = "LENGTH", value_parser = parse_length, allow_negative_numbers = true)]
    pub length: usize,

    /// Seed for the input generator
    #[arg(long, default_value_t = 1)]
    pub seed: u64,

    /// Smallest generated value (inclusive)
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub min: i32,

    /// Largest generated value (inclusive)
    #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
    pub max: i32,

    /// Keep the elements divisible by this value
    #[arg(long, default_value_t = 3, allow_negative_numbers = true)]
    pub divisor: i32,

    /// Execution strategy: sequential or parallel
    #[arg(long, default_value_t = Strategy::Parallel)]
    pub strategy: Strategy,

    /// Minimum number of elements per parallel task
    #[arg(long, default_value_t = DEFAULT_CHUNK_LEN)]
    pub chunk_len: usize,

    /// Only report OK/ERROR, do not print the selected elements
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn parse_length(s: &str) -> Result<usize, SelectError> {
    s.trim()
        .parse::<usize>()
        .map_err(|_| SelectError::InvalidLength(s.to_string()))
}

impl Args {
    pub fn validate(&self) -> Result<(), SelectError> {
        if self.chunk_len == 0 {
            return Err(SelectError::InvalidChunkLen);
        }
        self.generator().validate()
    }

    pub fn generator(&self) -> GeneratorConfig {
        GeneratorConfig::builder()
            .seed(self.seed)
            .min(self.min)
            .max(self.max)
            .build()
    }

    pub fn compactor(&self) -> Compactor {
        Compactor::builder()
            .strategy(self.strategy)
            .chunk_len(self.chunk_len)
            .build()
    }

    pub fn predicate(&self) -> MultipleOf {
        MultipleOf::new(self.divisor)
    }
}
