//! Confetti particle value type and colour palette.

use std::ops::{Add, AddAssign, Mul};

/// 2D vector in viewport pixels (y grows downwards)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Rotate by `degrees`, clockwise on screen
    pub fn rotate(self, degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

/// Fixed confetti palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfettiColor {
    Coral,
    Turquoise,
    Sky,
    Sage,
    Butter,
    Plum,
    Mint,
    Gold,
    Lavender,
}

impl ConfettiColor {
    pub const ALL: [ConfettiColor; 9] = [
        ConfettiColor::Coral,
        ConfettiColor::Turquoise,
        ConfettiColor::Sky,
        ConfettiColor::Sage,
        ConfettiColor::Butter,
        ConfettiColor::Plum,
        ConfettiColor::Mint,
        ConfettiColor::Gold,
        ConfettiColor::Lavender,
    ];

    /// sRGB components
    pub const fn rgb(self) -> [u8; 3] {
        match self {
            ConfettiColor::Coral => [0xFF, 0x6B, 0x6B],
            ConfettiColor::Turquoise => [0x4E, 0xCD, 0xC4],
            ConfettiColor::Sky => [0x45, 0xB7, 0xD1],
            ConfettiColor::Sage => [0x96, 0xCE, 0xB4],
            ConfettiColor::Butter => [0xFF, 0xEA, 0xA7],
            ConfettiColor::Plum => [0xDD, 0xA0, 0xDD],
            ConfettiColor::Mint => [0x98, 0xD8, 0xC8],
            ConfettiColor::Gold => [0xF7, 0xDC, 0x6F],
            ConfettiColor::Lavender => [0xBB, 0x8F, 0xCE],
        }
    }
}

/// One confetti piece
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,  // Pixels per tick, constant for the run
    pub color: ConfettiColor,
    pub size: f32,
    pub rotation: f32,       // Degrees
    pub rotation_speed: f32, // Degrees per tick, signed
}

impl Particle {
    /// Advance by one tick
    pub fn advance(&mut self) {
        self.position += self.velocity;
        self.rotation += self.rotation_speed;
    }

    pub fn width(&self) -> f32 {
        self.size
    }

    pub fn height(&self) -> f32 {
        self.size / 2.0
    }

    /// Corners of the drawn rectangle, rotated about the particle's own centre.
    /// Order: top-left, top-right, bottom-right, bottom-left (before rotation).
    pub fn corners(&self) -> [Vec2; 4] {
        let half_w = self.width() / 2.0;
        let half_h = self.height() / 2.0;
        [
            Vec2::new(-half_w, -half_h),
            Vec2::new(half_w, -half_h),
            Vec2::new(half_w, half_h),
            Vec2::new(-half_w, half_h),
        ]
        .map(|corner| self.position + corner.rotate(self.rotation))
    }
}
