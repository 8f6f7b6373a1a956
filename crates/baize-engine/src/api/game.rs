use crate::api::types::{GameEvent, SoundEvent};
use crate::input::queue::InputQueue;
use crate::systems::draw::DrawList;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// World width in game units.
    pub world_width: f32,
    /// World height in game units.
    pub world_height: f32,
    /// Maximum number of draw commands per frame (default: 512).
    pub max_draw_commands: usize,
    /// Maximum number of sound events per frame (default: 32).
    pub max_sounds: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            world_width: 800.0,
            world_height: 600.0,
            max_draw_commands: 512,
            max_sounds: 32,
            max_events: 32,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state before the first tick.
    fn init(&mut self, ctx: &mut EngineContext);

    /// The game loop tick. Simulate, emit sounds/events, fill the draw list.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);
}

/// Mutable access to engine state, passed to Game::init and Game::update.
///
/// The draw list, sound buffer and event buffer are transient: the runner
/// clears them before each frame and the host consumes them after it.
pub struct EngineContext {
    pub draw: DrawList,
    pub sounds: Vec<SoundEvent>,
    pub events: Vec<GameEvent>,
}

impl EngineContext {
    pub fn new() -> Self {
        Self {
            draw: DrawList::new(),
            sounds: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Emit a sound event to be forwarded to the host.
    pub fn emit_sound(&mut self, event: SoundEvent) {
        self.sounds.push(event);
    }

    /// Emit a game event to be forwarded to the host.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data (draw list, sounds, events).
    pub fn clear_frame_data(&mut self) {
        self.draw.clear();
        self.sounds.clear();
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::draw::DrawColor;
    use glam::Vec2;

    #[test]
    fn emit_and_clear_frame_data() {
        let mut ctx = EngineContext::new();
        ctx.emit_sound(SoundEvent(2));
        ctx.emit_event(GameEvent::new(1.0, 10.0, 0.0, 0.0));
        ctx.draw.fill_circle(Vec2::new(5.0, 5.0), 3.0, DrawColor::WHITE);
        assert_eq!(ctx.sounds.len(), 1);
        assert_eq!(ctx.events.len(), 1);
        assert_eq!(ctx.draw.len(), 1);

        ctx.clear_frame_data();
        assert!(ctx.sounds.is_empty());
        assert!(ctx.events.is_empty());
        assert_eq!(ctx.draw.len(), 0);
    }

    #[test]
    fn default_config_values() {
        let config = GameConfig::default();
        assert_eq!(config.fixed_dt, 1.0 / 60.0);
        assert_eq!(config.max_sounds, 32);
    }
}
