pub mod classified;
pub mod dispatch_ext;
