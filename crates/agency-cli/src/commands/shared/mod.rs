pub mod gate_write;
pub mod parse;
