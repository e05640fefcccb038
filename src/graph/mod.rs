pub mod dense;
pub mod parse;
pub mod stats;
