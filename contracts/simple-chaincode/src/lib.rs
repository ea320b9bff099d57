pub mod contract;
pub mod handler;
