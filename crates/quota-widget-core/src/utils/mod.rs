pub mod http;
pub mod paths;
