pub mod fault;
pub mod panic;
pub mod result;
