pub mod branch;
pub mod semester;
pub mod subject;

pub use branch::*;
pub use semester::*;
pub use subject::*;
