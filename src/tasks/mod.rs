pub mod config;
pub mod dtos;
pub mod enums;
pub mod models;
pub mod service;
pub mod structs;
pub mod util;
