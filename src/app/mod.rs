pub mod env;
pub mod errors;
pub mod models;
pub mod util;
