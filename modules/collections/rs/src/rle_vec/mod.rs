pub use identical::{Equal, Identical};
pub use rle_vec::RleVec;

mod identical;
#[allow(clippy::module_inception)]
mod rle_vec;
