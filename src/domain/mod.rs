//! Domain types: payment instruments, processing context, decision traces and
//! classification results, plus the ports the application layer depends on.

pub mod context;
pub mod instrument;
pub mod ports;
pub mod request;
pub mod result;
pub mod trace;
