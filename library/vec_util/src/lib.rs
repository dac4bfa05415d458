mod boolean_mask;
pub use boolean_mask::*;
mod compactor;
pub use compactor::*;
pub mod prefix_sum;
pub use prefix_sum::{inclusive_scan, par_inclusive_scan, total_selected};
pub mod scatter;
pub use scatter::{par_scatter, scatter, scatter_in_place};
