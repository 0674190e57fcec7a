pub mod corpus;
pub mod counter;
pub mod driver;
pub mod errors;
mod information;
pub mod outlier;
pub mod output;
pub mod tokenizer;
pub mod walker;
