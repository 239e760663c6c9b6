mod generate;
mod health;
mod index;
mod settings;

#[cfg(test)]
mod tests;

pub use generate::*;
pub use health::*;
pub use index::*;
pub use settings::*;
