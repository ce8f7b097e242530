pub mod log;
pub mod xml;
