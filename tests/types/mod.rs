pub mod deferred;
pub mod handler;
