//! Deterministic opening layout: cue ball on the baulk spot, a triangular
//! red rack, and the six colour balls on their spots.

use glam::Vec2;

use crate::ball::{Ball, BallKind, BALL_RADIUS};
use crate::table::Table;

/// Difficulty selects the size of the red rack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    pub fn red_count(self) -> usize {
        match self {
            Difficulty::Easy => 3,
            Difficulty::Normal => 6,
            Difficulty::Hard => 10,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Build the opening ball list. Index 0 is always the cue ball; every
/// position is a fixed function of the table and difficulty.
pub fn rack(table: &Table, difficulty: Difficulty) -> Vec<Ball> {
    let mut balls = Vec::with_capacity(difficulty.red_count() + 7);

    balls.push(Ball::new(table.cue_spawn(), BallKind::Cue));

    // Red triangle: rows fill from the apex, one more ball per row,
    // stopping mid-row once the difficulty's count is reached.
    let apex = Vec2::new(table.x + table.width / 2.0 + 30.0, table.y + table.height / 2.0);
    let spacing = BALL_RADIUS * 2.0 + 1.0;
    let red_count = difficulty.red_count();
    let mut reds = 0;
    let mut row = 0usize;
    while reds < red_count {
        for col in 0..=row {
            if reds >= red_count {
                break;
            }
            let pos = Vec2::new(
                apex.x + row as f32 * spacing,
                apex.y - row as f32 * spacing / 2.0 + col as f32 * spacing,
            );
            balls.push(Ball::new(pos, BallKind::Red));
            reds += 1;
        }
        row += 1;
    }

    // Pink and black flank the rack along its axis.
    balls.push(Ball::new(
        Vec2::new(apex.x - 2.0 * spacing, apex.y),
        BallKind::Pink,
    ));
    balls.push(Ball::new(
        Vec2::new(apex.x + 4.0 * spacing, apex.y),
        BallKind::Black,
    ));

    balls.push(Ball::new(table.centre(), BallKind::Blue));

    let baulk = table.baulk();
    balls.push(Ball::new(baulk + Vec2::new(-20.0, -20.0), BallKind::Green));
    balls.push(Ball::new(baulk, BallKind::Brown));
    balls.push(Ball::new(baulk + Vec2::new(-20.0, 20.0), BallKind::Yellow));

    balls
}
