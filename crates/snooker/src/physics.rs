//! Pairwise ball-ball collision resolution.
//!
//! Equal-mass frictionless elastic model: velocities are decomposed into a
//! normal/tangent basis, the normal components are exchanged and the
//! tangential components kept. Pairs are visited once per tick in list
//! order (i < j) — no fixed-point iteration, so dense clusters may keep a
//! little interpenetration for one extra tick.

use glam::Vec2;

use crate::ball::{Ball, BALL_RADIUS};

/// Resolve every overlapping in-play pair once. Returns the number of pairs
/// resolved this tick (one collision sound per pair).
///
/// Coincident centres (distance exactly zero) are skipped: there is no
/// normal to resolve along.
pub fn resolve_collisions(balls: &mut [Ball]) -> usize {
    let mut resolved = 0;

    for i in 0..balls.len() {
        if !balls[i].in_play {
            continue;
        }
        for j in (i + 1)..balls.len() {
            if !balls[j].in_play {
                continue;
            }

            let delta = balls[j].pos - balls[i].pos;
            let dist = delta.length();
            if dist == 0.0 || dist >= BALL_RADIUS * 2.0 {
                continue;
            }

            let normal = delta / dist;
            let tangent = Vec2::new(-normal.y, normal.x);
            let overlap = BALL_RADIUS * 2.0 - dist;

            // Symmetric positional correction: push each ball half the
            // overlap apart so the pair is not re-resolved next tick.
            let mut a = balls[i];
            let mut b = balls[j];
            a.pos -= normal * (overlap / 2.0);
            b.pos += normal * (overlap / 2.0);

            // Exchange normal components, keep tangential ones.
            let a_n = a.vel.dot(normal);
            let a_t = a.vel.dot(tangent);
            let b_n = b.vel.dot(normal);
            let b_t = b.vel.dot(tangent);
            a.vel = normal * b_n + tangent * a_t;
            b.vel = normal * a_n + tangent * b_t;

            balls[i] = a;
            balls[j] = b;
            resolved += 1;
        }
    }

    resolved
}
