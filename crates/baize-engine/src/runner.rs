use crate::api::game::{EngineContext, Game, GameConfig};
use crate::api::types::{GameEvent, SoundEvent};
use crate::core::time::FixedTimestep;
use crate::input::queue::{InputEvent, InputQueue};
use crate::systems::draw::DrawList;

/// Generic game runner that wires up the engine loop.
///
/// The host owns one `GameRunner`, feeds it input and frame deltas, and
/// after each `tick()` reads the draw list, sound buffer and event buffer
/// to present the frame.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    timestep: FixedTimestep,
    config: GameConfig,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let timestep = FixedTimestep::new(config.fixed_dt);

        Self {
            game,
            ctx: EngineContext::new(),
            input: InputQueue::new(),
            timestep,
            config,
            initialized: false,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.config = self.game.config();
        self.game.init(&mut self.ctx);
        self.initialized = true;
        log::debug!(
            "runner initialized: world {}x{}, dt {}",
            self.config.world_width,
            self.config.world_height,
            self.config.fixed_dt
        );
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: clear transient buffers, run fixed steps, drain input.
    ///
    /// Transient buffers accumulate across the fixed steps of a single frame
    /// so a slow host never drops sounds or events.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        self.ctx.clear_frame_data();

        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.game.update(&mut self.ctx, &self.input);
        }

        // Drain input after update — edge-triggered events are seen exactly
        // once, the sampled pointer position persists.
        self.input.drain();
    }

    /// Draw commands produced by the last frame.
    pub fn draw_list(&self) -> &DrawList {
        &self.ctx.draw
    }

    /// Sound events produced by the last frame.
    pub fn sounds(&self) -> &[SoundEvent] {
        &self.ctx.sounds
    }

    /// Game events produced by the last frame.
    pub fn events(&self) -> &[GameEvent] {
        &self.ctx.events
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::draw::DrawColor;
    use glam::Vec2;

    /// Minimal game: draws one rect per tick, beeps on any key.
    struct Beeper;

    impl Game for Beeper {
        fn config(&self) -> GameConfig {
            GameConfig {
                fixed_dt: 1.0 / 30.0,
                ..GameConfig::default()
            }
        }

        fn init(&mut self, _ctx: &mut EngineContext) {}

        fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
            ctx.draw
                .fill_rect(Vec2::ZERO, 1.0, 1.0, DrawColor::WHITE);
            for event in input.iter() {
                if let InputEvent::KeyDown { .. } = event {
                    ctx.emit_sound(SoundEvent(0));
                }
            }
        }
    }

    #[test]
    fn tick_runs_fixed_steps_and_drains_input() {
        let mut runner = GameRunner::new(Beeper);
        runner.init();

        runner.push_input(InputEvent::KeyDown { key_code: 80 });
        runner.tick(1.0 / 30.0);
        assert_eq!(runner.sounds(), &[SoundEvent(0)]);
        assert_eq!(runner.draw_list().len(), 1);

        // Input was drained — the key must not fire again.
        runner.tick(1.0 / 30.0);
        assert!(runner.sounds().is_empty());
    }

    #[test]
    fn no_steps_before_init() {
        let mut runner = GameRunner::new(Beeper);
        runner.tick(1.0);
        assert_eq!(runner.draw_list().len(), 0);
    }
}
