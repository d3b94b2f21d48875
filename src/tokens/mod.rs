mod factory;
pub mod registry;
pub use factory::*;
pub use registry::*;
