pub mod client;
pub mod error;
pub mod lookup;
pub mod models;
pub mod traits;

pub use client::SportsDbClient;
pub use error::{LookupError, Result};
pub use lookup::{ImageLookup, LookupOutcome, LookupSummary};
pub use traits::PlayerSearch;
