//! Menu/play state machine and presentation: turns session state into draw
//! commands and [`SimEvent`]s into sound cues.

use baize_engine::{
    DrawColor, EngineContext, Game, GameConfig, GameEvent, InputEvent, InputQueue, SoundEvent,
};
use glam::Vec2;

use crate::ball::{BALL_RADIUS, SCORING_KINDS};
use crate::rack::Difficulty;
use crate::session::{Session, SimEvent};
use crate::table::{CANVAS_HEIGHT, CANVAS_WIDTH, POCKET_RADIUS};

/// Key codes the game understands (ASCII of the unshifted key).
pub mod keys {
    pub const DIGIT_1: u32 = 49;
    pub const DIGIT_2: u32 = 50;
    pub const DIGIT_3: u32 = 51;
    pub const MENU: u32 = 77; // 'M'
    pub const SHOOT: u32 = 80; // 'P'
    pub const RESTART: u32 = 82; // 'R'
}

/// Sound cue ids, matched by the host's sound manifest.
pub mod sounds {
    pub const SHOT: u32 = 0;
    pub const CLACK: u32 = 1; // collision or pot
    pub const CUE_POT: u32 = 2;
    pub const CLEAR: u32 = 3;
}

/// Game event kinds emitted to the host.
pub mod events {
    /// a = score, b = shots, c = object balls remaining.
    pub const STATUS: f32 = 1.0;
}

mod palette {
    use baize_engine::DrawColor;

    pub const BACKDROP: DrawColor = DrawColor::rgb(0.22, 0.36, 0.60);
    pub const FELT: DrawColor = DrawColor::rgb(0.10, 0.55, 0.35);
    pub const WOOD: DrawColor = DrawColor::rgb(0.42, 0.26, 0.15);
    pub const POCKET: DrawColor = DrawColor::BLACK;
    pub const TEXT: DrawColor = DrawColor::WHITE;
    pub const TEXT_DIM: DrawColor = DrawColor::rgb(0.75, 0.78, 0.85);
    pub const TEXT_ACCENT: DrawColor = DrawColor::rgb(0.91, 0.76, 0.36);
    pub const POWER_BAR: DrawColor = DrawColor::RED;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Menu,
    Play,
}

/// The snooker game as a [`Game`] on the engine surface.
pub struct SnookerGame {
    phase: Phase,
    session: Option<Session>,
}

impl SnookerGame {
    pub fn new() -> Self {
        Self {
            phase: Phase::Menu,
            session: None,
        }
    }

    /// Start (or restart) a session at the given difficulty. The whole
    /// session aggregate is replaced, never patched.
    fn start(&mut self, difficulty: Difficulty) {
        self.session = Some(Session::new(difficulty));
        self.phase = Phase::Play;
    }

    fn update_menu(&mut self, input: &InputQueue) {
        for event in input.iter() {
            if let InputEvent::KeyDown { key_code } = event {
                match *key_code {
                    keys::DIGIT_1 => self.start(Difficulty::Easy),
                    keys::DIGIT_2 => self.start(Difficulty::Normal),
                    keys::DIGIT_3 => self.start(Difficulty::Hard),
                    _ => {}
                }
            }
        }
    }

    fn update_play(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        let mut shoot = false;
        let mut restart = false;
        let mut to_menu = false;
        for event in input.iter() {
            if let InputEvent::KeyDown { key_code } = event {
                match *key_code {
                    keys::SHOOT => shoot = true,
                    keys::RESTART => restart = true,
                    keys::MENU => to_menu = true,
                    _ => {}
                }
            }
        }

        if to_menu {
            log::info!("returning to menu");
            self.session = None;
            self.phase = Phase::Menu;
            return;
        }

        if restart {
            let difficulty = self
                .session
                .as_ref()
                .map(|s| s.difficulty)
                .unwrap_or(Difficulty::Easy);
            self.start(difficulty);
            if let Some(session) = self.session.as_mut() {
                session.message = "Game restarted.".to_string();
            }
        }

        let Some(session) = self.session.as_mut() else {
            return;
        };

        let sim_events = session.tick(input.pointer(), shoot);
        for event in &sim_events {
            let cue = match event {
                SimEvent::Shot => Some(sounds::SHOT),
                SimEvent::Collision | SimEvent::Potted { .. } => Some(sounds::CLACK),
                SimEvent::CuePotted => Some(sounds::CUE_POT),
                SimEvent::CueRespawned => None,
                SimEvent::Cleared => Some(sounds::CLEAR),
            };
            if let Some(id) = cue {
                ctx.emit_sound(SoundEvent(id));
            }
        }

        ctx.emit_event(GameEvent::new(
            events::STATUS,
            session.score as f32,
            session.shots as f32,
            session.balls_remaining() as f32,
        ));
    }

    fn draw_menu(&self, ctx: &mut EngineContext) {
        let d = &mut ctx.draw;
        d.text(Vec2::new(100.0, 50.0), "--- Snooker Game ---", palette::TEXT);
        d.text(Vec2::new(90.0, 80.0), "Select Difficulty:", palette::TEXT_ACCENT);
        d.text(Vec2::new(90.0, 100.0), "1 - Easy (3 reds)", palette::TEXT_DIM);
        d.text(Vec2::new(90.0, 110.0), "2 - Normal (6 reds)", palette::TEXT_DIM);
        d.text(Vec2::new(90.0, 120.0), "3 - Hard (10 reds)", palette::TEXT_DIM);
    }

    fn draw_play(&self, session: &Session, pointer: Vec2, ctx: &mut EngineContext) {
        let d = &mut ctx.draw;
        let table = &session.table;

        // Wood frame, felt, pockets.
        d.fill_rect(
            Vec2::new(table.x - 6.0, table.y - 6.0),
            table.width + 12.0,
            table.height + 12.0,
            palette::WOOD,
        );
        d.fill_rect(
            Vec2::new(table.x, table.y),
            table.width,
            table.height,
            palette::FELT,
        );
        for pocket in table.pockets() {
            d.fill_circle(pocket, POCKET_RADIUS, palette::POCKET);
        }

        // Aim guide from the pointer back to the cue ball.
        if session.can_shoot() {
            d.line(pointer, session.cue().pos, 1.0, DrawColor::WHITE);
        }

        for ball in &session.balls {
            if ball.in_play {
                d.fill_circle(ball.pos, BALL_RADIUS, ball.kind.draw_color());
            }
        }

        // HUD below the table.
        let ui_y = table.y + table.height + 10.0;
        d.text(
            Vec2::new(10.0, ui_y),
            format!("Score: {}", session.score),
            palette::TEXT,
        );
        d.text(
            Vec2::new(10.0, ui_y + 10.0),
            format!("Shots: {}", session.shots),
            palette::TEXT_DIM,
        );
        d.text(
            Vec2::new(10.0, ui_y + 20.0),
            format!("Difficulty: {}", session.difficulty.label()),
            palette::TEXT_DIM,
        );

        if session.can_shoot() {
            let power = session.aim_power(pointer);
            d.text(Vec2::new(10.0, ui_y + 35.0), "Power:", palette::TEXT);
            d.fill_rect(
                Vec2::new(60.0, ui_y + 36.0),
                power * 10.0,
                5.0,
                palette::POWER_BAR,
            );
        }

        d.text(Vec2::new(10.0, ui_y + 50.0), session.message.clone(), palette::TEXT);

        // Point chart.
        d.text(Vec2::new(240.0, ui_y), "Points", palette::TEXT);
        for (i, kind) in SCORING_KINDS.iter().enumerate() {
            d.text(
                Vec2::new(240.0, ui_y + 10.0 + i as f32 * 8.0),
                format!("{}: {}", kind.label(), kind.points()),
                palette::TEXT_DIM,
            );
        }

        d.text(
            Vec2::new(5.0, CANVAS_HEIGHT - 10.0),
            "M: Menu",
            palette::TEXT_DIM,
        );

        if session.cleared {
            d.text(
                Vec2::new(90.0, ui_y + 70.0),
                "*** GAME CLEAR! ***",
                palette::TEXT_ACCENT,
            );
        }
    }
}

impl Default for SnookerGame {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for SnookerGame {
    fn config(&self) -> GameConfig {
        GameConfig {
            fixed_dt: 1.0 / 30.0,
            world_width: CANVAS_WIDTH,
            world_height: CANVAS_HEIGHT,
            max_draw_commands: 128,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, _ctx: &mut EngineContext) {
        log::info!("snooker ready, entering menu");
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        match self.phase {
            Phase::Menu => self.update_menu(input),
            Phase::Play => self.update_play(ctx, input),
        }

        // Presentation is a pure function of the state we just computed.
        ctx.draw.fill_rect(
            Vec2::ZERO,
            CANVAS_WIDTH,
            CANVAS_HEIGHT,
            palette::BACKDROP,
        );
        match (self.phase, self.session.as_ref()) {
            (Phase::Play, Some(session)) => self.draw_play(session, input.pointer(), ctx),
            _ => self.draw_menu(ctx),
        }
    }
}
