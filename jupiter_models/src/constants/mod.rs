pub mod dexes;
pub mod mints;
