pub mod core;
pub mod events;
pub mod ledger;
pub mod msg;
pub mod operation;
