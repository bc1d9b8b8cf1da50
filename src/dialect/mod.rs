// import modules
mod c;
mod python;

// make dialects public
pub use c::C;
pub use python::Python;

pub mod dialect;

pub use dialect::Dialect;
pub use dialect::Language;
