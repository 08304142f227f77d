pub mod catalog;
pub mod data;
pub mod error;
pub mod models;
pub mod repository;

pub use data::Roster;
pub use error::{Result, RosterError};
