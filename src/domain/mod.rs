pub mod source;
pub mod depth;
pub mod patterns;
pub mod options;
pub mod cancel;
pub mod error;
pub mod interface;
pub mod receiver;
pub mod hint;
pub mod ports;
