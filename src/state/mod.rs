pub mod layout;
pub mod score;

pub use layout::BoardLayout;
pub use score::{scale_score, DisplayStats, Phase, ScoreClock};
