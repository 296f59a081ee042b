//! Numeric primitives shared by the attribute model and world generation.

mod block_pos;
mod clamp;

pub use block_pos::BlockPos;
pub use clamp::clamp;
