//! Retained draw-command list.
//!
//! The game fills the list every tick from its own state; the host walks it
//! and rasterizes with whatever backend it has (canvas, GPU, terminal).
//! Nothing is read back — drawing is a pure function of game state.
//!
//! # Usage
//!
//! ```ignore
//! // In your Game::update():
//! ctx.draw.fill_rect(Vec2::new(32.0, 20.0), 256.0, 144.0, DrawColor::rgb8(24, 96, 48));
//! ctx.draw.fill_circle(Vec2::new(64.0, 92.0), 5.0, DrawColor::WHITE);
//! ctx.draw.line(pointer, cue_pos, 1.0, DrawColor::WHITE);
//! ctx.draw.text(Vec2::new(10.0, 174.0), "Score: 0", DrawColor::WHITE);
//! ```

use glam::Vec2;

/// RGBA color for draw commands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl DrawColor {
    /// Create a color from RGBA components (0.0 - 1.0).
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color from RGB components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from RGB u8 values (0-255) with full opacity.
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Create a color with the given alpha value.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    // Named color constants
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const YELLOW: Self = Self::rgb(1.0, 1.0, 0.0);
    pub const GRAY: Self = Self::rgb(0.5, 0.5, 0.5);
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
}

impl Default for DrawColor {
    fn default() -> Self {
        Self::WHITE
    }
}

/// A single draw command. Coordinates are world-space, y-down.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Filled circle centered at `center`.
    Circle {
        center: Vec2,
        radius: f32,
        color: DrawColor,
    },
    /// Filled axis-aligned rectangle with top-left corner at `pos`.
    Rect {
        pos: Vec2,
        width: f32,
        height: f32,
        color: DrawColor,
    },
    /// Line segment from `a` to `b`.
    Line {
        a: Vec2,
        b: Vec2,
        width: f32,
        color: DrawColor,
    },
    /// Text with its top-left anchor at `pos`. Glyph metrics are the host's.
    Text {
        pos: Vec2,
        text: String,
        color: DrawColor,
    },
}

/// Ordered list of draw commands for one frame.
/// Commands are rasterized in insertion order (painter's algorithm).
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(128),
        }
    }

    /// Remove all commands. Called by the runner at the start of each frame.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: DrawColor) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    pub fn fill_rect(&mut self, pos: Vec2, width: f32, height: f32, color: DrawColor) {
        self.commands.push(DrawCommand::Rect {
            pos,
            width,
            height,
            color,
        });
    }

    pub fn line(&mut self, a: Vec2, b: Vec2, width: f32, color: DrawColor) {
        self.commands.push(DrawCommand::Line { a, b, width, color });
    }

    pub fn text(&mut self, pos: Vec2, text: impl Into<String>, color: DrawColor) {
        self.commands.push(DrawCommand::Text {
            pos,
            text: text.into(),
            color,
        });
    }

    /// Iterate over commands in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new()
    }
}
