pub use bon::Builder;
pub use colored::Colorize;
pub use derive_more::Display;
pub use itertools::Itertools;
pub use log::{debug, info, warn, Level, LevelFilter};
pub use logging_timer::{finish, time, timer};
pub use rand::distributions::{Distribution, Uniform};
pub use rand::rngs::StdRng;
pub use rand::SeedableRng;
pub use vec_util::*;
