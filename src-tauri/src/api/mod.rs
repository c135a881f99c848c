pub mod command;
pub mod emitter;
