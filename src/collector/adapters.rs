mod fuse;
mod map_output;
mod skip;
mod take;

pub use fuse::*;
pub use map_output::*;
pub use skip::*;
pub use take::*;
