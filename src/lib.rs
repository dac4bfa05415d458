pub mod util;
pub use util::*;

pub mod error;
pub use error::*;

pub mod config;
pub use config::*;

mod generate;
pub use generate::*;

mod predicate;
pub use predicate::*;

mod verify;
pub use verify::*;

mod harness;
pub use harness::*;
