mod debug;

pub use debug::*;
