//! Click-triggered ripple animation: one session at a time, driven by an interval timer

use super::drops::{spawn_drops, Raindrop, Segment};
use super::ripple::{ripple_field, Field, RippleParams, PLOT_EXTENT};
use super::scheduler::Interval;
use crate::colors::Colormap;
use crate::config::AnimationConfig;
use rand::Rng;
use std::time::{Duration, Instant};

const FIELD_ALPHA: f64 = 0.7;
const LABEL_ALPHA: f64 = 0.7;
const DROP_ALPHA: f64 = 0.6;
const TICK_FADE_SCALE: f64 = 0.7;

/// Puddle radius scale for a rainfall amount in mm
pub fn puddle_size(rainfall: f64) -> f64 {
    5.0 + rainfall * 2.5
}

/// Ripple image layer
#[derive(Debug, Clone, PartialEq)]
pub struct FieldLayer {
    pub field: Field,
    pub colormap: Colormap,
    pub alpha: f64,
    pub visible: bool,
    /// `[x_min, x_max, y_min, y_max]` in plot space
    pub extent: [f64; 4],
}

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub position: (f64, f64),
    pub text: String,
    pub alpha: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    /// Drawn by `start` before the first tick
    Initial,
    Tick(usize),
    /// Last tick: field hidden, label transparent
    Final(usize),
}

/// Everything that changed for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Redraw {
    pub kind: FrameKind,
    pub field: FieldLayer,
    pub label: Label,
    pub segments: Vec<Segment>,
}

impl Redraw {
    pub fn is_final(&self) -> bool {
        matches!(self.kind, FrameKind::Final(_))
    }
}

/// Visual state owned by the running session
#[derive(Debug)]
pub struct Puddle {
    pub district: String,
    pub rainfall: f64,
    pub center: (f64, f64),
    pub size: f64,
    pub field: FieldLayer,
    pub label: Label,
    pub drops: Vec<Raindrop>,
    timer: Interval,
}

impl Puddle {
    fn segments(&self) -> Vec<Segment> {
        self.drops.iter().map(Raindrop::segment).collect()
    }

    fn snapshot(&self, kind: FrameKind, segments: Vec<Segment>) -> Redraw {
        Redraw {
            kind,
            field: self.field.clone(),
            label: self.label.clone(),
            segments,
        }
    }
}

#[derive(Debug, Default)]
enum State {
    #[default]
    Idle,
    Running(Box<Puddle>),
}

/// Owner of the single live ripple animation
#[derive(Debug)]
pub struct AnimationSession {
    config: AnimationConfig,
    state: State,
}

impl AnimationSession {
    pub fn new(config: AnimationConfig) -> Self {
        Self {
            config,
            state: State::Idle,
        }
    }

    /// Ripple frames plus the transparent closing frame
    pub fn total_frames(&self) -> usize {
        self.config.layers + 1
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, State::Running(_))
    }

    pub fn puddle(&self) -> Option<&Puddle> {
        match &self.state {
            State::Running(p) => Some(p.as_ref()),
            State::Idle => None,
        }
    }

    /// Begin a new animation at `center`, tearing down any session in flight.
    /// Returns the initial frame.
    pub fn start<R: Rng + ?Sized>(
        &mut self,
        center: (f64, f64),
        rainfall: f64,
        district: &str,
        now: Instant,
        rng: &mut R,
    ) -> Redraw {
        if self.is_running() {
            log::debug!("tearing down in-flight session before restart");
            self.teardown();
        }

        let layers = self.config.layers;
        let size = puddle_size(rainfall);
        let field = ripple_field(
            &RippleParams {
                size,
                layer: 1,
                center,
                fade: 1.0 - 1.0 / layers as f64,
            },
            self.config.resolution,
            rng,
        );
        let drops = spawn_drops(rainfall, DROP_ALPHA, rng);

        log::info!(
            "ripple: {} {} mm at ({:.1}, {:.1}) size={} drops={}",
            district,
            rainfall,
            center.0,
            center.1,
            size,
            drops.len()
        );

        let puddle = Puddle {
            district: district.to_string(),
            rainfall,
            center,
            size,
            field: FieldLayer {
                field,
                colormap: Colormap::Blues,
                alpha: FIELD_ALPHA,
                visible: true,
                extent: [0.0, PLOT_EXTENT, 0.0, PLOT_EXTENT],
            },
            label: Label {
                position: center,
                text: format!("{district}\nRainfall: {rainfall} mm"),
                alpha: LABEL_ALPHA,
            },
            drops,
            timer: Interval::start(self.config.interval, self.total_frames(), now),
        };
        let redraw = puddle.snapshot(FrameKind::Initial, puddle.segments());
        self.state = State::Running(Box::new(puddle));
        redraw
    }

    /// Stop the timer and release the field, label and drops
    pub fn teardown(&mut self) {
        if let State::Running(mut puddle) = std::mem::take(&mut self.state) {
            puddle.timer.cancel();
        }
    }

    /// Run the tick the timer has due at `now`, if any
    pub fn poll<R: Rng + ?Sized>(&mut self, now: Instant, rng: &mut R) -> Option<Redraw> {
        let State::Running(puddle) = &mut self.state else {
            return None;
        };
        let frame = puddle.timer.poll(now)?;
        let redraw = render_frame(puddle, frame, &self.config, rng);
        self.finish_if_final(&redraw);
        Some(redraw)
    }

    /// Run the next tick immediately, regardless of the clock
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Redraw> {
        let State::Running(puddle) = &mut self.state else {
            return None;
        };
        let frame = puddle.timer.next_tick()?;
        let redraw = render_frame(puddle, frame, &self.config, rng);
        self.finish_if_final(&redraw);
        Some(redraw)
    }

    /// How long the event loop may wait before the next tick is due
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.puddle().and_then(|p| p.timer.time_until_due(now))
    }

    fn finish_if_final(&mut self, redraw: &Redraw) {
        if redraw.is_final() {
            if let Some(p) = self.puddle() {
                log::debug!("ripple for {} finished after {} frames", p.district, self.total_frames());
            }
            self.teardown();
        }
    }
}

fn render_frame<R: Rng + ?Sized>(
    puddle: &mut Puddle,
    frame: usize,
    config: &AnimationConfig,
    rng: &mut R,
) -> Redraw {
    if frame == config.layers {
        puddle.field.visible = false;
        puddle.label.alpha = 0.0;
        return puddle.snapshot(FrameKind::Final(frame), Vec::new());
    }

    let fade = 1.0 - frame as f64 / config.layers as f64;
    puddle.field.field = ripple_field(
        &RippleParams {
            size: puddle.size,
            layer: frame + 1,
            center: puddle.center,
            fade: TICK_FADE_SCALE * fade,
        },
        config.resolution,
        rng,
    );
    puddle.field.alpha = FIELD_ALPHA;
    puddle.field.visible = true;
    puddle.label.alpha = LABEL_ALPHA * fade;

    for drop in &mut puddle.drops {
        drop.advance(rng);
        drop.alpha = DROP_ALPHA * fade;
    }

    puddle.snapshot(FrameKind::Tick(frame), puddle.segments())
}
