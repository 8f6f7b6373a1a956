pub mod api;
pub mod assets;
pub mod core;
pub mod input;
pub mod runner;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::game::{EngineContext, Game, GameConfig};
pub use api::types::{GameEvent, SoundEvent};
pub use assets::manifest::{SoundEntry, SoundManifest};
pub use core::time::FixedTimestep;
pub use input::queue::{InputEvent, InputQueue};
pub use runner::GameRunner;
pub use systems::draw::{DrawColor, DrawCommand, DrawList};
