mod game;
mod tick;

pub use game::{FrameReport, Game, SimulationLoop};
pub use tick::{FixedTimestep, TickContext};
