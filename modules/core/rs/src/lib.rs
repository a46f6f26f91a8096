pub mod loc;
pub mod seq;
