mod fight;
mod fighter;

pub use fight::{Fight, FightResult};
pub use fighter::{FightRecord, Fighter, FighterStats, FormTier};
