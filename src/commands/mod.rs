pub mod cd;
pub mod cp;
pub mod ls;
pub mod tree;
pub mod uptime;

pub use cd::*;
pub use cp::*;
pub use ls::*;
pub use tree::*;
pub use uptime::*;
