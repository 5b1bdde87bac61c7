pub mod anonymize;
pub mod generate;
