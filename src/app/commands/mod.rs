pub mod generate;
pub mod hash;
pub mod record;
