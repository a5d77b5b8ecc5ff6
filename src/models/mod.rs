pub mod envelope;
pub mod platform;
pub mod product;

pub use envelope::*;
pub use product::*;
