//! Display formatting for terminal output

pub mod premium;
pub mod transaction;

pub use premium::format_premium_offer;
pub use transaction::{format_transaction_list, format_transaction_row};
