pub mod fighter;

pub use fighter::FighterRepository;
