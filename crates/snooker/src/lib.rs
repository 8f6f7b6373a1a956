//! Simplified snooker: mouse-aimed shots, equal-mass elastic ball collisions,
//! pocket detection and a point-chart scoring overlay, running as a
//! [`baize_engine::Game`] on the headless engine surface.

pub mod ball;
pub mod game;
pub mod physics;
pub mod rack;
pub mod session;
pub mod table;

pub use ball::{Ball, BallKind, BALL_RADIUS};
pub use game::SnookerGame;
pub use rack::Difficulty;
pub use session::{Session, SimEvent};
pub use table::Table;
