//! One game of snooker: the owned aggregate of balls, score and messages,
//! advanced by a pure simulation tick that reports what happened as
//! [`SimEvent`]s. Presentation (sound, drawing) consumes the events; the
//! session itself never touches the engine.

use glam::Vec2;

use crate::ball::{Ball, BallKind};
use crate::physics::resolve_collisions;
use crate::rack::{rack, Difficulty};
use crate::table::{Table, POCKET_RADIUS};

/// Drag-to-power scale: one unit of power per 10 units of drag.
pub const POWER_SCALE: f32 = 10.0;

/// Hard cap on shot power.
pub const MAX_POWER: f32 = 7.0;

/// Index of the cue ball in the ball list. The rack generator guarantees it.
const CUE: usize = 0;

/// What a single simulation tick produced, in occurrence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimEvent {
    /// A shot was injected into the cue ball.
    Shot,
    /// One ball pair collided and was resolved.
    Collision,
    /// A non-cue ball dropped into a pocket.
    Potted { kind: BallKind },
    /// The cue ball dropped into a pocket.
    CuePotted,
    /// The cue ball was re-placed on its spawn point.
    CueRespawned,
    /// The last colour ball left the table. Fires exactly once per session.
    Cleared,
}

/// Full state of one game, created fresh on every start or restart and
/// replaced wholesale — never patched from outside.
pub struct Session {
    pub difficulty: Difficulty,
    pub table: Table,
    /// Index 0 is the cue ball; reds follow, then the colours.
    pub balls: Vec<Ball>,
    pub score: u32,
    pub shots: u32,
    /// Names of potted balls in pot order, for history/debugging.
    pub potted: Vec<&'static str>,
    /// Human-readable last-event line. Overwritten per event, except the
    /// cue-ball reset notice which is appended to the pot message.
    pub message: String,
    /// Monotonic: set when the last colour ball leaves play, never cleared.
    pub cleared: bool,
}

impl Session {
    pub fn new(difficulty: Difficulty) -> Self {
        let table = Table::standard();
        let balls = rack(&table, difficulty);
        log::info!(
            "session started: {} ({} reds, {} balls)",
            difficulty.label(),
            difficulty.red_count(),
            balls.len()
        );
        Self {
            difficulty,
            table,
            balls,
            score: 0,
            shots: 0,
            potted: Vec::new(),
            message: String::new(),
            cleared: false,
        }
    }

    pub fn cue(&self) -> &Ball {
        &self.balls[CUE]
    }

    fn cue_mut(&mut self) -> &mut Ball {
        &mut self.balls[CUE]
    }

    /// Stillness gate: no in-play ball has a nonzero velocity component.
    pub fn all_stopped(&self) -> bool {
        self.balls
            .iter()
            .filter(|b| b.in_play)
            .all(|b| !b.is_moving())
    }

    /// A shot is allowed only while everything is still and the table has
    /// not been cleared.
    pub fn can_shoot(&self) -> bool {
        self.all_stopped() && !self.cleared
    }

    /// Power the current pointer position would put on a shot.
    pub fn aim_power(&self, pointer: Vec2) -> f32 {
        (self.cue().pos.distance(pointer) / POWER_SCALE).min(MAX_POWER)
    }

    /// Count of in-play object balls (everything but the cue).
    pub fn balls_remaining(&self) -> usize {
        self.balls
            .iter()
            .filter(|b| b.in_play && b.kind != BallKind::Cue)
            .count()
    }

    /// Advance the simulation by one tick.
    ///
    /// `pointer` is this tick's sampled pointer position; `shoot` is the
    /// edge-triggered shot request. Order per tick: shot injection,
    /// integration, collision resolution, pocket scan, cue respawn,
    /// clear check.
    pub fn tick(&mut self, pointer: Vec2, shoot: bool) -> Vec<SimEvent> {
        let mut events = Vec::new();

        if shoot && self.can_shoot() {
            self.try_shot(pointer, &mut events);
        }

        let table = self.table;
        for ball in &mut self.balls {
            ball.step(&table);
        }

        for _ in 0..resolve_collisions(&mut self.balls) {
            events.push(SimEvent::Collision);
        }

        self.scan_pockets(&mut events);

        if !self.balls[CUE].in_play {
            self.respawn_cue(&mut events);
        }

        if !self.cleared {
            self.check_clear(&mut events);
        }

        events
    }

    /// Aim from the pointer to the cue ball (pull-back aiming: dragging away
    /// from the target shoots toward it). A pointer exactly on the cue ball
    /// has no direction, so no shot is taken.
    fn try_shot(&mut self, pointer: Vec2, events: &mut Vec<SimEvent>) {
        let delta = self.cue().pos - pointer;
        let dist = delta.length();
        if dist <= 0.0 {
            return;
        }
        let power = (dist / POWER_SCALE).min(MAX_POWER);
        self.cue_mut().vel = delta / dist * power;
        self.shots += 1;
        self.message = format!("Shot! Total shots: {}", self.shots);
        log::info!("shot {} at power {:.2}", self.shots, power);
        events.push(SimEvent::Shot);
    }

    /// Test every in-play ball against the six pocket sites. A ball can
    /// only fall into one pocket per tick.
    fn scan_pockets(&mut self, events: &mut Vec<SimEvent>) {
        let pockets = self.table.pockets();
        for i in 0..self.balls.len() {
            if !self.balls[i].in_play {
                continue;
            }
            for pocket in pockets {
                if self.balls[i].pos.distance(pocket) < POCKET_RADIUS {
                    self.balls[i].in_play = false;
                    self.balls[i].vel = Vec2::ZERO;
                    let kind = self.balls[i].kind;
                    self.handle_potted(kind, events);
                    break;
                }
            }
        }
    }

    fn handle_potted(&mut self, kind: BallKind, events: &mut Vec<SimEvent>) {
        if kind == BallKind::Cue {
            self.message = "Cue ball potted!".to_string();
            log::info!("cue ball potted");
            events.push(SimEvent::CuePotted);
        } else {
            let points = kind.points();
            self.potted.push(kind.name());
            self.score += points;
            self.message = format!("Potted {}! +{}", kind.name(), points);
            log::info!("potted {} (+{}), score {}", kind.name(), points, self.score);
            events.push(SimEvent::Potted { kind });
        }
    }

    /// Put the cue ball back on its spawn point. The notice is appended so
    /// the player sees both the pot and the reset in one message.
    fn respawn_cue(&mut self, events: &mut Vec<SimEvent>) {
        let spawn = self.table.cue_spawn();
        let cue = self.cue_mut();
        cue.pos = spawn;
        cue.vel = Vec2::ZERO;
        cue.in_play = true;
        self.message.push_str(" Cue ball reset.");
        events.push(SimEvent::CueRespawned);
    }

    /// The table is clear when all six colour balls are off it; reds and
    /// the cue ball do not count. Callers guard on `!self.cleared`, so the
    /// event fires only on the transition tick.
    fn check_clear(&mut self, events: &mut Vec<SimEvent>) {
        let colours_down = self
            .balls
            .iter()
            .filter(|b| b.kind.is_colour())
            .all(|b| !b.in_play);
        if colours_down {
            self.cleared = true;
            self.message = format!(
                "GAME CLEAR! Score: {}, Shots: {}",
                self.score, self.shots
            );
            log::info!("table cleared: score {}, shots {}", self.score, self.shots);
            events.push(SimEvent::Cleared);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Run ticks with no input until every ball is still.
    fn settle(session: &mut Session) {
        for _ in 0..1000 {
            session.tick(Vec2::ZERO, false);
            if session.all_stopped() {
                return;
            }
        }
        panic!("session never settled");
    }

    #[test]
    fn fresh_session_is_zeroed() {
        let session = Session::new(Difficulty::Easy);
        assert_eq!(session.score, 0);
        assert_eq!(session.shots, 0);
        assert!(session.potted.is_empty());
        assert!(session.message.is_empty());
        assert!(!session.cleared);
        assert_eq!(session.cue().kind, BallKind::Cue);
    }

    #[test]
    fn untouched_rack_stays_still_after_settling() {
        // The opening layout contains one overlapping pair (pink vs blue)
        // and two colours seeded against the left cushion; the first tick
        // nudges those into legal positions, then nothing moves again.
        let mut session = Session::new(Difficulty::Easy);
        session.tick(Vec2::ZERO, false);

        let positions: Vec<Vec2> = session.balls.iter().map(|b| b.pos).collect();
        for _ in 0..30 {
            let events = session.tick(Vec2::ZERO, false);
            assert!(events.is_empty(), "quiet rack produced {:?}", events);
        }
        for (ball, pos) in session.balls.iter().zip(&positions) {
            assert_eq!(ball.pos, *pos);
        }
        assert!(session.message.is_empty());
        assert_eq!(session.shots, 0);
    }

    #[test]
    fn shot_injects_capped_velocity_and_counts() {
        let mut session = Session::new(Difficulty::Easy);
        settle(&mut session);

        // Drag far below the cue ball: shot goes up, power capped at 7.
        let cue_pos = session.cue().pos;
        let pointer = cue_pos + Vec2::new(0.0, 500.0);
        let events = session.tick(pointer, true);

        assert!(events.contains(&SimEvent::Shot));
        assert_eq!(session.shots, 1);
        assert_eq!(session.message, "Shot! Total shots: 1");
        // Velocity was set to 7 up, then one integration tick of friction ran.
        let cue = session.cue();
        assert!(cue.vel.y < 0.0);
        assert!(cue.vel.length() <= MAX_POWER);
    }

    #[test]
    fn pointer_on_cue_ball_takes_no_shot() {
        let mut session = Session::new(Difficulty::Easy);
        settle(&mut session);
        let events = session.tick(session.cue().pos, true);
        assert!(!events.contains(&SimEvent::Shot));
        assert_eq!(session.shots, 0);
    }

    #[test]
    fn stillness_gate_blocks_second_shot() {
        let mut session = Session::new(Difficulty::Easy);
        settle(&mut session);
        let pointer = session.cue().pos + Vec2::new(500.0, 0.0);
        session.tick(pointer, true);
        assert!(!session.all_stopped());

        let events = session.tick(pointer, true);
        assert!(!events.contains(&SimEvent::Shot));
        assert_eq!(session.shots, 1);
    }

    #[test]
    fn ball_on_pocket_site_is_potted_next_tick() {
        let mut session = Session::new(Difficulty::Easy);
        settle(&mut session);
        let pocket = session.table.pockets()[0];
        let black = session
            .balls
            .iter_mut()
            .find(|b| b.kind == BallKind::Black)
            .unwrap();
        black.pos = pocket;

        let events = session.tick(Vec2::ZERO, false);
        assert!(events.contains(&SimEvent::Potted { kind: BallKind::Black }));
        assert_eq!(session.score, 7);
        assert_eq!(session.potted, vec!["black"]);
        assert_eq!(session.message, "Potted black! +7");
    }

    #[test]
    fn potting_red_scores_one() {
        let mut session = Session::new(Difficulty::Easy);
        settle(&mut session);
        let pocket = session.table.pockets()[5];
        let red = session
            .balls
            .iter_mut()
            .find(|b| b.kind == BallKind::Red)
            .unwrap();
        red.pos = pocket;

        session.tick(Vec2::ZERO, false);
        assert_eq!(session.score, 1);
        assert_eq!(session.potted, vec!["red"]);
    }

    #[test]
    fn potted_cue_scores_nothing_and_respawns_same_tick() {
        let mut session = Session::new(Difficulty::Easy);
        settle(&mut session);
        let score_before = session.score;
        let pocket = session.table.pockets()[3];
        session.balls[0].pos = pocket;

        let events = session.tick(Vec2::ZERO, false);
        assert!(events.contains(&SimEvent::CuePotted));
        assert!(events.contains(&SimEvent::CueRespawned));
        assert_eq!(session.score, score_before);
        assert!(session.potted.is_empty());

        // One tick after the pot the cue ball is observable back on its
        // spawn point, still, and in play.
        let cue = session.cue();
        assert!(cue.in_play);
        assert_eq!(cue.pos, session.table.cue_spawn());
        assert_eq!(cue.vel, Vec2::ZERO);
        assert_eq!(session.message, "Cue ball potted! Cue ball reset.");
    }

    #[test]
    fn ball_cannot_drop_into_two_pockets() {
        let mut session = Session::new(Difficulty::Easy);
        settle(&mut session);
        // Corner pocket: only one site is within range, but even if pocket
        // radii overlapped, the scan breaks after the first hit.
        let pocket = session.table.pockets()[0];
        let red = session
            .balls
            .iter_mut()
            .find(|b| b.kind == BallKind::Red)
            .unwrap();
        red.pos = pocket;

        let events = session.tick(Vec2::ZERO, false);
        let pots = events
            .iter()
            .filter(|e| matches!(e, SimEvent::Potted { .. }))
            .count();
        assert_eq!(pots, 1);
        assert_eq!(session.potted.len(), 1);
    }

    #[test]
    fn clear_fires_once_and_flag_is_monotonic() {
        let mut session = Session::new(Difficulty::Easy);
        settle(&mut session);

        // Take all colours but the black off the table directly.
        for ball in session.balls.iter_mut() {
            if ball.kind.is_colour() && ball.kind != BallKind::Black {
                ball.in_play = false;
            }
        }
        let events = session.tick(Vec2::ZERO, false);
        assert!(!events.contains(&SimEvent::Cleared));
        assert!(!session.cleared);

        // Pot the last colour.
        let pocket = session.table.pockets()[2];
        session
            .balls
            .iter_mut()
            .find(|b| b.kind == BallKind::Black)
            .unwrap()
            .pos = pocket;
        let events = session.tick(Vec2::ZERO, false);
        assert!(events.contains(&SimEvent::Cleared));
        assert!(session.cleared);
        assert!(session.message.starts_with("GAME CLEAR!"));

        // Steady state: flag stays set, event never re-fires.
        for _ in 0..10 {
            let events = session.tick(Vec2::ZERO, false);
            assert!(!events.contains(&SimEvent::Cleared));
            assert!(session.cleared);
        }
        assert!(!session.can_shoot());
    }

    #[test]
    fn reds_do_not_hold_up_the_clear_condition() {
        let mut session = Session::new(Difficulty::Easy);
        settle(&mut session);
        for ball in session.balls.iter_mut() {
            if ball.kind.is_colour() {
                ball.in_play = false;
            }
        }
        // Reds and cue still on the table.
        let events = session.tick(Vec2::ZERO, false);
        assert!(events.contains(&SimEvent::Cleared));
    }

    #[test]
    fn cue_into_resting_red_hands_over_velocity() {
        let mut session = Session::new(Difficulty::Easy);
        settle(&mut session);

        // Park a red directly right of the cue ball, just out of contact.
        let cue_pos = session.cue().pos;
        let red_index = session
            .balls
            .iter()
            .position(|b| b.kind == BallKind::Red)
            .unwrap();
        session.balls[red_index].pos = cue_pos + Vec2::new(30.0, 0.0);

        // Shoot straight at it.
        let pointer = cue_pos - Vec2::new(70.0, 0.0);
        session.tick(pointer, true);

        // Run until they have collided.
        let mut collided = false;
        for _ in 0..60 {
            let events = session.tick(pointer, false);
            if events.contains(&SimEvent::Collision) {
                collided = true;
                break;
            }
        }
        assert!(collided, "cue ball never reached the red");
        // Head-on equal-mass hit: the red inherits the forward motion and
        // the cue ball keeps (at most) a negligible remainder along x.
        let red_vel = session.balls[red_index].vel;
        assert!(red_vel.x > 0.0);
        assert!(session.cue().vel.x.abs() < 0.5);
    }

    #[test]
    fn tick_order_is_deterministic() {
        let mut a = Session::new(Difficulty::Hard);
        let mut b = Session::new(Difficulty::Hard);
        let pointer = a.cue().pos + Vec2::new(-45.0, 12.0);
        for i in 0..120 {
            let ea = a.tick(pointer, i == 5);
            let eb = b.tick(pointer, i == 5);
            assert_eq!(ea, eb);
        }
        for (x, y) in a.balls.iter().zip(b.balls.iter()) {
            assert_eq!(x.pos, y.pos);
            assert_eq!(x.vel, y.vel);
        }
    }
}
