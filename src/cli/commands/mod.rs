pub mod generate;
pub mod show;
