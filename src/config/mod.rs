pub mod builders;
pub mod models;
pub mod parser;
#[cfg(test)]
mod tests;

pub use builders::*;
pub use parser::*;
