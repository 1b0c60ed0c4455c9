//! Mouse click to animation start

use crate::districts::{self, Selection};
use crate::puddle::{AnimationSession, Redraw};
use rand::Rng;
use std::time::Instant;

/// Start a ripple for a random district at the clicked plot coordinate.
///
/// A click with no coordinate (outside the canvas) changes nothing and
/// returns `None`; any running session keeps going.
pub fn dispatch_click<R: Rng + ?Sized>(
    coordinate: Option<(f64, f64)>,
    session: &mut AnimationSession,
    now: Instant,
    rng: &mut R,
) -> Option<Redraw> {
    let Some(center) = coordinate else {
        log::trace!("click outside canvas ignored");
        return None;
    };
    let selection = districts::pick(rng);
    Some(start_selection(session, center, selection, now, rng))
}

pub fn start_selection<R: Rng + ?Sized>(
    session: &mut AnimationSession,
    center: (f64, f64),
    selection: Selection,
    now: Instant,
    rng: &mut R,
) -> Redraw {
    session.start(center, selection.rainfall, selection.district().name, now, rng)
}
