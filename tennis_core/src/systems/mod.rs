pub mod lookup;
pub mod scoring;

pub use lookup::*;
pub use scoring::*;
