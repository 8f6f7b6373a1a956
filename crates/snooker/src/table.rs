use glam::Vec2;

/// Canvas the whole game is laid out on, in world units.
pub const CANVAS_WIDTH: f32 = 320.0;
pub const CANVAS_HEIGHT: f32 = 280.0;

pub const TABLE_WIDTH: f32 = 256.0;
pub const TABLE_HEIGHT: f32 = 144.0;
pub const TABLE_X: f32 = (CANVAS_WIDTH - TABLE_WIDTH) / 2.0;
pub const TABLE_Y: f32 = 20.0;

/// Pocket capture radius: base 8, scaled 1.5x.
pub const POCKET_RADIUS: f32 = 8.0 * 1.5;

/// The playing rectangle and its six pocket sites.
/// Immutable for the lifetime of a session.
#[derive(Debug, Clone, Copy)]
pub struct Table {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Table {
    pub fn standard() -> Self {
        Self {
            x: TABLE_X,
            y: TABLE_Y,
            width: TABLE_WIDTH,
            height: TABLE_HEIGHT,
        }
    }

    /// The six pocket sites: four corners plus the two mid-long-edge points.
    pub fn pockets(&self) -> [Vec2; 6] {
        [
            Vec2::new(self.x, self.y),
            Vec2::new(self.x + self.width / 2.0, self.y),
            Vec2::new(self.x + self.width - 1.0, self.y),
            Vec2::new(self.x, self.y + self.height - 1.0),
            Vec2::new(self.x + self.width / 2.0, self.y + self.height - 1.0),
            Vec2::new(self.x + self.width - 1.0, self.y + self.height - 1.0),
        ]
    }

    /// Baulk-side spawn point for the cue ball.
    pub fn cue_spawn(&self) -> Vec2 {
        Vec2::new(self.x + 32.0, self.y + self.height / 2.0)
    }

    /// Baulk reference point the green/brown/yellow spots hang off.
    pub fn baulk(&self) -> Vec2 {
        Vec2::new(self.x + 20.0, self.y + self.height / 2.0)
    }

    /// Centre spot (blue ball).
    pub fn centre(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}
