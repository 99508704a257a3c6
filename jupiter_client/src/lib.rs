pub mod aggregator;
pub mod client;
pub mod config;
pub mod decoder;
pub mod error;
#[cfg(test)]
pub mod tests;
pub mod transport;
