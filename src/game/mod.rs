//! Game state: configuration, lives, flavor text and the session controller

pub mod config;
pub mod flavor;
pub mod lives;
pub mod session;

pub use config::{ConfigError, GameConfig};
pub use lives::{LifeToken, LivesPool};
pub use session::{
    GameOverReason, Input, InputOutcome, Phase, RoundOutcome, RoundRecord, ScheduledRound,
    Session,
};
