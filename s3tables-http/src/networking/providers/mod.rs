#[cfg(feature = "reqwest")]
pub mod reqwest_builder;
