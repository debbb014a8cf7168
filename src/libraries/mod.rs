pub mod address;
pub mod assembler;

pub use address::{compose_address, resolve_address};
pub use assembler::assemble;
