//! Headless run of a single session, one summary line per frame

use crate::config::{resolve_seed, ReplayConfig};
use crate::dispatch::start_selection;
use crate::districts::{self, Selection};
use crate::puddle::ripple::PLOT_EXTENT;
use crate::puddle::{AnimationSession, FrameKind, Redraw};
use rand::prelude::*;
use std::io::{self, Write};
use std::time::Instant;

/// Largest rainfall override accepted, in mm
pub const MAX_RAINFALL: f64 = 200.0;

fn invalid(msg: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, msg)
}

fn select<R: Rng + ?Sized>(config: &ReplayConfig, rng: &mut R) -> io::Result<Selection> {
    let mut selection = match &config.district {
        Some(name) => {
            let district_index =
                districts::find(name).ok_or_else(|| invalid(format!("unknown district: {name}")))?;
            Selection::for_index(district_index, rng)
        }
        None => districts::pick(rng),
    };
    if let Some(rainfall) = config.rainfall {
        if !rainfall.is_finite() || rainfall > MAX_RAINFALL {
            return Err(invalid(format!(
                "rainfall must be a number of mm up to {MAX_RAINFALL}, got {rainfall}"
            )));
        }
        selection.rainfall = rainfall.max(0.0);
    }
    Ok(selection)
}

/// Click position in plot space, clamped to the canvas
pub fn plot_center(x: f64, y: f64) -> io::Result<(f64, f64)> {
    if !x.is_finite() || !y.is_finite() {
        return Err(invalid(format!("click position must be finite, got ({x}, {y})")));
    }
    Ok((x.clamp(0.0, PLOT_EXTENT), y.clamp(0.0, PLOT_EXTENT)))
}

fn describe(redraw: &Redraw) -> String {
    let frame = match redraw.kind {
        FrameKind::Initial => "init".to_string(),
        FrameKind::Tick(n) => format!("{n:>4}"),
        FrameKind::Final(n) => format!("{n:>4}"),
    };
    let field = if redraw.field.visible { "shown " } else { "hidden" };
    let mut line = format!(
        "{frame}  field={field} peak={:.3}  label={:.3}  drops={}",
        redraw.field.field.peak(),
        redraw.label.alpha,
        redraw.segments.len()
    );
    if redraw.is_final() {
        line.push_str("  (final)");
    }
    line
}

/// Play one session to completion without a terminal
pub fn run<W: Write>(config: &ReplayConfig, out: &mut W) -> io::Result<()> {
    let seed = resolve_seed(config.seed);
    let mut rng = StdRng::seed_from_u64(seed);
    let selection = select(config, &mut rng)?;

    let mut session = AnimationSession::new(config.animation.clone());
    let initial = start_selection(&mut session, config.center, selection, Instant::now(), &mut rng);

    if let Some(p) = session.puddle() {
        writeln!(
            out,
            "{} {} mm at ({:.1}, {:.1}): size={} drops={} frames={} seed={}",
            p.district,
            p.rainfall,
            p.center.0,
            p.center.1,
            p.size,
            p.drops.len(),
            session.total_frames(),
            seed
        )?;
    }
    writeln!(out, "{}", describe(&initial))?;

    while let Some(redraw) = session.tick(&mut rng) {
        writeln!(out, "{}", describe(&redraw))?;
    }
    Ok(())
}
