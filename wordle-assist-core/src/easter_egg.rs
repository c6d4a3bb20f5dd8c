//! The bouncing image unlocked by clicking the logo.
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpriteSize {
    pub width: f64,
    pub height: f64,
}

/// Counts logo clicks until the animation unlocks. Once active it stays
/// active for the life of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EasterEgg {
    clicks: u32,
    threshold: u32,
}

impl EasterEgg {
    #[must_use]
    pub const fn new(threshold: u32) -> Self {
        Self {
            clicks: 0,
            threshold,
        }
    }

    /// Returns `true` only for the click that unlocks the animation.
    pub fn register_click(&mut self) -> bool {
        if self.is_active() {
            return false;
        }
        self.clicks += 1;
        self.is_active()
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.clicks >= self.threshold
    }

    #[must_use]
    pub const fn clicks(&self) -> u32 {
        self.clicks
    }
}

/// Position and velocity of the moving image, in viewport pixels.
///
/// Each axis flips its velocity whenever the sprite touches or passes the
/// matching edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bouncer {
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
    sprite: SpriteSize,
    viewport: Viewport,
}

impl Bouncer {
    #[must_use]
    pub const fn new(x: f64, y: f64, speed: f64, sprite: SpriteSize, viewport: Viewport) -> Self {
        Self {
            x,
            y,
            vx: speed,
            vy: speed,
            sprite,
            viewport,
        }
    }

    /// Start somewhere inside the viewport, chosen by `rng`.
    pub fn random_start<R: Rng + ?Sized>(
        rng: &mut R,
        speed: f64,
        sprite: SpriteSize,
        viewport: Viewport,
    ) -> Self {
        let x = rng.r#gen::<f64>() * (viewport.width - sprite.width).max(0.0);
        let y = rng.r#gen::<f64>() * (viewport.height - sprite.height).max(0.0);
        Self::new(x, y, speed, sprite, viewport)
    }

    /// Advance one frame and return the new top-left corner.
    pub fn step(&mut self) -> (f64, f64) {
        self.x += self.vx;
        self.y += self.vy;

        if self.x + self.sprite.width >= self.viewport.width || self.x <= 0.0 {
            self.vx = -self.vx;
        }
        if self.y + self.sprite.height >= self.viewport.height || self.y <= 0.0 {
            self.vy = -self.vy;
        }
        (self.x, self.y)
    }

    pub const fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// The image may finish loading after the animation starts.
    pub const fn set_sprite(&mut self, sprite: SpriteSize) {
        self.sprite = sprite;
    }

    #[must_use]
    pub const fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    #[must_use]
    pub const fn velocity(&self) -> (f64, f64) {
        (self.vx, self.vy)
    }
}
