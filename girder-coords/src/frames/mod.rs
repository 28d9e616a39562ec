pub mod lcs;

pub use lcs::{LcsFrame, LocalAxes};
