//! Falling raindrop streaks

use super::ripple::PLOT_EXTENT;
use rand::Rng;

const SPAWN_TOP: f64 = 100.0;
const SPAWN_BOTTOM: f64 = 80.0;
const SPAWN_JITTER: f64 = 5.0;
const LENGTH_RANGE: (f64, f64) = (7.0, 15.0);
const WIDTH_RANGE: (f64, f64) = (1.0, 2.5);
const FALL_RANGE: (f64, f64) = (4.0, 7.0);
const DRIFT: f64 = 1.2;
const MAX_SPREAD_BONUS: f64 = 1.5;

/// Palette drops are coloured from: deepskyblue, lightblue, dodgerblue, aqua
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropColor {
    DeepSkyBlue,
    LightBlue,
    DodgerBlue,
    Aqua,
}

impl DropColor {
    pub const ALL: [DropColor; 4] = [
        DropColor::DeepSkyBlue,
        DropColor::LightBlue,
        DropColor::DodgerBlue,
        DropColor::Aqua,
    ];

    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            DropColor::DeepSkyBlue => (0, 191, 255),
            DropColor::LightBlue => (173, 216, 230),
            DropColor::DodgerBlue => (30, 144, 255),
            DropColor::Aqua => (0, 255, 255),
        }
    }

    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Raindrop {
    pub x: f64,
    pub y: f64,
    pub length: f64,
    pub line_width: f64,
    pub color: DropColor,
    pub alpha: f64,
}

/// Line segment handed to the renderer
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub color: DropColor,
    pub width: f64,
    pub alpha: f64,
}

/// Heavier rain scatters drops further to the right before clipping
pub fn spread_factor(rainfall: f64) -> f64 {
    1.0 + (rainfall / 8.0).min(MAX_SPREAD_BONUS)
}

pub fn drop_count(rainfall: f64) -> usize {
    (10.0 + rainfall * 10.0) as usize
}

impl Raindrop {
    /// Fresh drop somewhere along the top band of the canvas
    pub fn respawn<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.y = rng.gen_range(SPAWN_BOTTOM..=SPAWN_TOP);
        self.x = rng.gen_range(0.0..=PLOT_EXTENT);
        self.length = rng.gen_range(LENGTH_RANGE.0..=LENGTH_RANGE.1);
        self.line_width = rng.gen_range(WIDTH_RANGE.0..=WIDTH_RANGE.1);
        self.color = DropColor::random(rng);
    }

    /// Fall and drift one frame; a drop leaving the canvas starts over
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.y -= rng.gen_range(FALL_RANGE.0..=FALL_RANGE.1);
        self.x += rng.gen_range(-DRIFT..=DRIFT);
        if self.is_off_canvas() {
            self.respawn(rng);
        }
    }

    pub fn is_off_canvas(&self) -> bool {
        self.y < 0.0 || self.x < 0.0 || self.x > PLOT_EXTENT
    }

    pub fn segment(&self) -> Segment {
        Segment {
            from: (self.x, self.y),
            to: (self.x, self.y + self.length),
            color: self.color,
            width: self.line_width,
            alpha: self.alpha,
        }
    }
}

/// Initial curtain of drops, staggered from the top edge down to y = 80
pub fn spawn_drops<R: Rng + ?Sized>(rainfall: f64, alpha: f64, rng: &mut R) -> Vec<Raindrop> {
    let count = drop_count(rainfall);
    let max_x = PLOT_EXTENT * spread_factor(rainfall);
    let step = if count > 1 {
        (SPAWN_TOP - SPAWN_BOTTOM) / (count - 1) as f64
    } else {
        0.0
    };

    (0..count)
        .map(|i| {
            let x = rng.gen_range(0.0..=max_x).clamp(0.0, PLOT_EXTENT);
            let y = SPAWN_TOP - step * i as f64 + rng.gen_range(-SPAWN_JITTER..=SPAWN_JITTER);
            Raindrop {
                x,
                y,
                length: rng.gen_range(LENGTH_RANGE.0..=LENGTH_RANGE.1),
                line_width: rng.gen_range(WIDTH_RANGE.0..=WIDTH_RANGE.1),
                color: DropColor::random(rng),
                alpha,
            }
        })
        .collect()
}
