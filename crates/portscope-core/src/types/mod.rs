mod banner;
mod search;
mod tools;

pub use banner::*;
pub use search::*;
pub use tools::*;
