pub mod constants;
pub mod errors;
pub mod forecast;
pub mod transactions;

pub use errors::{Error, Result};
pub use forecast::*;
pub use transactions::*;
