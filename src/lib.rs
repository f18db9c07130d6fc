pub mod error_handling;
pub mod server;
pub mod util;
