use baize_engine::DrawColor;
use glam::Vec2;

use crate::table::Table;

/// All balls share one radius.
pub const BALL_RADIUS: f32 = 5.0;

/// Per-tick velocity retention (felt friction).
pub const FRICTION: f32 = 0.96;

/// Below this magnitude a velocity component snaps to exactly zero,
/// so balls come to rest instead of creeping forever.
pub const STOP_THRESHOLD: f32 = 0.05;

/// Ball role and colour in one tag. The six colour balls score 2-7 points,
/// reds score 1, the cue ball scores nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallKind {
    Cue,
    Red,
    Yellow,
    Green,
    Brown,
    Blue,
    Pink,
    Black,
}

/// The seven scoring kinds in point-value order, for the HUD chart.
pub const SCORING_KINDS: [BallKind; 7] = [
    BallKind::Red,
    BallKind::Yellow,
    BallKind::Green,
    BallKind::Brown,
    BallKind::Blue,
    BallKind::Pink,
    BallKind::Black,
];

impl BallKind {
    pub fn name(self) -> &'static str {
        match self {
            BallKind::Cue => "cue",
            BallKind::Red => "red",
            BallKind::Yellow => "yellow",
            BallKind::Green => "green",
            BallKind::Brown => "brown",
            BallKind::Blue => "blue",
            BallKind::Pink => "pink",
            BallKind::Black => "black",
        }
    }

    /// Capitalized name for the point chart.
    pub fn label(self) -> &'static str {
        match self {
            BallKind::Cue => "Cue",
            BallKind::Red => "Red",
            BallKind::Yellow => "Yellow",
            BallKind::Green => "Green",
            BallKind::Brown => "Brown",
            BallKind::Blue => "Blue",
            BallKind::Pink => "Pink",
            BallKind::Black => "Black",
        }
    }

    /// Point value awarded when this ball is potted. Kinds outside the
    /// point table contribute zero.
    pub fn points(self) -> u32 {
        match self {
            BallKind::Cue => 0,
            BallKind::Red => 1,
            BallKind::Yellow => 2,
            BallKind::Green => 3,
            BallKind::Brown => 4,
            BallKind::Blue => 5,
            BallKind::Pink => 6,
            BallKind::Black => 7,
        }
    }

    /// The six named colour balls — the set the clear condition watches.
    /// Reds and the cue ball are excluded.
    pub fn is_colour(self) -> bool {
        !matches!(self, BallKind::Cue | BallKind::Red)
    }

    pub fn draw_color(self) -> DrawColor {
        match self {
            BallKind::Cue => DrawColor::WHITE,
            BallKind::Red => DrawColor::rgb8(212, 24, 60),
            BallKind::Yellow => DrawColor::rgb8(233, 195, 91),
            BallKind::Green => DrawColor::rgb8(40, 140, 70),
            BallKind::Brown => DrawColor::rgb8(139, 72, 40),
            BallKind::Blue => DrawColor::rgb8(50, 90, 200),
            BallKind::Pink => DrawColor::rgb8(240, 130, 170),
            BallKind::Black => DrawColor::rgb8(20, 20, 20),
        }
    }
}

/// A ball on (or off) the table.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub kind: BallKind,
    pub in_play: bool,
}

impl Ball {
    pub fn new(pos: Vec2, kind: BallKind) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            kind,
            in_play: true,
        }
    }

    pub fn is_moving(&self) -> bool {
        self.vel.x != 0.0 || self.vel.y != 0.0
    }

    /// One kinematics tick: integrate, apply friction, snap tiny velocity
    /// components to zero, then reflect off the cushions. Both axes are
    /// checked independently so a corner hit reflects both in one tick.
    pub fn step(&mut self, table: &Table) {
        if !self.in_play {
            return;
        }
        self.pos += self.vel;
        self.vel *= FRICTION;
        if self.vel.x.abs() < STOP_THRESHOLD {
            self.vel.x = 0.0;
        }
        if self.vel.y.abs() < STOP_THRESHOLD {
            self.vel.y = 0.0;
        }

        if self.pos.x - BALL_RADIUS < table.x {
            self.vel.x = -self.vel.x;
            self.pos.x = table.x + BALL_RADIUS;
        } else if self.pos.x + BALL_RADIUS > table.x + table.width {
            self.vel.x = -self.vel.x;
            self.pos.x = table.x + table.width - BALL_RADIUS;
        }

        if self.pos.y - BALL_RADIUS < table.y {
            self.vel.y = -self.vel.y;
            self.pos.y = table.y + BALL_RADIUS;
        } else if self.pos.y + BALL_RADIUS > table.y + table.height {
            self.vel.y = -self.vel.y;
            self.pos.y = table.y + table.height - BALL_RADIUS;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Table {
        Table::standard()
    }

    #[test]
    fn integrates_and_applies_friction() {
        let t = table();
        let mut ball = Ball::new(t.centre(), BallKind::Cue);
        ball.vel = Vec2::new(2.0, -1.0);
        ball.step(&t);
        assert_eq!(ball.pos, t.centre() + Vec2::new(2.0, -1.0));
        assert_eq!(ball.vel, Vec2::new(2.0 * FRICTION, -1.0 * FRICTION));
    }

    #[test]
    fn friction_is_strictly_contractive() {
        let t = table();
        let mut ball = Ball::new(t.centre(), BallKind::Red);
        ball.vel = Vec2::new(3.0, 4.0);
        let mut prev = ball.vel.length();
        for _ in 0..10 {
            ball.step(&t);
            let speed = ball.vel.length();
            assert!(speed <= prev);
            prev = speed;
        }
    }

    #[test]
    fn velocity_reaches_exactly_zero() {
        let t = table();
        let mut ball = Ball::new(t.centre(), BallKind::Red);
        ball.vel = Vec2::new(7.0, 7.0);
        let mut ticks = 0;
        while ball.is_moving() {
            ball.step(&t);
            ticks += 1;
            assert!(ticks < 1000, "ball never stopped");
        }
        assert_eq!(ball.vel, Vec2::ZERO);
    }

    #[test]
    fn bounces_off_left_cushion() {
        let t = table();
        let mut ball = Ball::new(Vec2::new(t.x + BALL_RADIUS + 1.0, t.y + 50.0), BallKind::Cue);
        ball.vel = Vec2::new(-4.0, 0.0);
        ball.step(&t);
        assert_eq!(ball.pos.x, t.x + BALL_RADIUS);
        assert!(ball.vel.x > 0.0, "x velocity must flip sign");
    }

    #[test]
    fn corner_hit_reflects_both_axes() {
        let t = table();
        let mut ball = Ball::new(
            Vec2::new(t.x + BALL_RADIUS + 1.0, t.y + BALL_RADIUS + 1.0),
            BallKind::Cue,
        );
        ball.vel = Vec2::new(-3.0, -3.0);
        ball.step(&t);
        assert_eq!(ball.pos, Vec2::new(t.x + BALL_RADIUS, t.y + BALL_RADIUS));
        assert!(ball.vel.x > 0.0 && ball.vel.y > 0.0);
    }

    #[test]
    fn stays_inside_table_under_heavy_speed() {
        let t = table();
        let mut ball = Ball::new(t.centre(), BallKind::Cue);
        ball.vel = Vec2::new(7.0, -7.0);
        for _ in 0..200 {
            ball.step(&t);
            assert!(ball.pos.x - BALL_RADIUS >= t.x);
            assert!(ball.pos.x + BALL_RADIUS <= t.x + t.width);
            assert!(ball.pos.y - BALL_RADIUS >= t.y);
            assert!(ball.pos.y + BALL_RADIUS <= t.y + t.height);
        }
    }

    #[test]
    fn out_of_play_balls_do_not_move() {
        let t = table();
        let mut ball = Ball::new(t.centre(), BallKind::Black);
        ball.vel = Vec2::new(5.0, 5.0);
        ball.in_play = false;
        let before = ball.pos;
        ball.step(&t);
        assert_eq!(ball.pos, before);
    }

    #[test]
    fn point_table_matches_snooker_values() {
        let values: Vec<u32> = SCORING_KINDS.iter().map(|k| k.points()).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(BallKind::Cue.points(), 0);
    }

    #[test]
    fn colour_set_excludes_red_and_cue() {
        assert!(!BallKind::Cue.is_colour());
        assert!(!BallKind::Red.is_colour());
        assert!(BallKind::Pink.is_colour());
        assert_eq!(SCORING_KINDS.iter().filter(|k| k.is_colour()).count(), 6);
    }
}
