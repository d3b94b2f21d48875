mod chains;
pub mod utils;
pub use chains::*;
pub use utils::*;
