pub mod generate;
pub mod mods;
