//! Screen layout and drawing of redraw sets onto the terminal buffer

use crate::colors::{self, shade_glyph, with_alpha};
use crate::districts::{self, TABLE_TITLE};
use crate::puddle::drops::Segment;
use crate::puddle::ripple::PLOT_EXTENT;
use crate::puddle::session::{FieldLayer, Label};
use crate::puddle::Redraw;
use crate::terminal::Terminal;

const PROMPT: &str = "Click to see rainfall!";
const PROMPT_POS: (f64, f64) = (50.0, 95.0);
const TABLE_GAP: u16 = 2;
const MIN_CANVAS_WIDTH: u16 = 30;
const HEAVY_DROP_WIDTH: f64 = 2.0;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Area {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Area {
    pub fn contains(&self, col: u16, row: u16) -> bool {
        col >= self.x
            && col < self.x + self.width
            && row >= self.y
            && row < self.y + self.height
    }

    /// Plot coordinate at the centre of a screen cell, `None` outside the area
    pub fn to_plot(&self, col: u16, row: u16) -> Option<(f64, f64)> {
        if !self.contains(col, row) {
            return None;
        }
        let fx = (col - self.x) as f64 + 0.5;
        let fy = (row - self.y) as f64 + 0.5;
        Some((
            fx / self.width as f64 * PLOT_EXTENT,
            PLOT_EXTENT - fy / self.height as f64 * PLOT_EXTENT,
        ))
    }

    /// Screen cell showing a plot coordinate, `None` outside plot space
    pub fn to_screen(&self, x: f64, y: f64) -> Option<(u16, u16)> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        if !(0.0..=PLOT_EXTENT).contains(&x) || !(0.0..=PLOT_EXTENT).contains(&y) {
            return None;
        }
        let col = ((x / PLOT_EXTENT * self.width as f64) as u16).min(self.width - 1);
        let row = (((PLOT_EXTENT - y) / PLOT_EXTENT * self.height as f64) as u16).min(self.height - 1);
        Some((self.x + col, self.y + row))
    }
}

/// Where the title, table panel and canvas sit on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub table: Option<Area>,
    pub canvas: Area,
}

impl Layout {
    pub fn compute(width: u16, height: u16, show_table: bool) -> Self {
        let body_y = 2u16.min(height);
        let body_h = height.saturating_sub(body_y);
        let table_w = table_width();

        let table = (show_table && width >= table_w + TABLE_GAP + MIN_CANVAS_WIDTH).then(|| Area {
            x: 0,
            y: body_y,
            width: table_w,
            height: body_h,
        });
        let canvas_x = table.map_or(0, |t| t.width + TABLE_GAP);

        Self {
            table,
            canvas: Area {
                x: canvas_x,
                y: body_y,
                width: width.saturating_sub(canvas_x),
                height: body_h,
            },
        }
    }
}

fn table_width() -> u16 {
    districts::table_lines()
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0) as u16
}

/// Title row, table panel and the idle prompt
pub fn draw_static(term: &mut Terminal, layout: &Layout) {
    let (width, _) = term.size();
    let title: String = TABLE_TITLE.chars().take(width as usize).collect();
    let x = (width as usize).saturating_sub(title.chars().count()) / 2;
    term.set_str(x as i32, 0, &title, Some(colors::TITLE), true);

    if let Some(area) = layout.table {
        for (i, line) in districts::table_lines().iter().enumerate() {
            if i as u16 >= area.height {
                break;
            }
            let color = if i < 2 { colors::TABLE_HEADER } else { colors::TABLE_TEXT };
            term.set_str(area.x as i32, (area.y + i as u16) as i32, line, Some(color), i == 0);
        }
        let rule_x = (area.x + area.width + TABLE_GAP / 2) as i32;
        for row in area.y..area.y + area.height {
            term.set(rule_x, row as i32, '│', Some(colors::BORDER), false);
        }
    }

    draw_centered(term, &layout.canvas, PROMPT_POS, &[PROMPT], Some(colors::PROMPT), false);
}

/// Draw one frame's field, drops and label onto the canvas
pub fn draw_redraw(term: &mut Terminal, canvas: &Area, redraw: &Redraw) {
    if redraw.field.visible {
        draw_field(term, canvas, &redraw.field);
    }
    for segment in &redraw.segments {
        draw_segment(term, canvas, segment);
    }
    draw_label(term, canvas, &redraw.label);
}

fn draw_field(term: &mut Terminal, canvas: &Area, layer: &FieldLayer) {
    for row in canvas.y..canvas.y + canvas.height {
        for col in canvas.x..canvas.x + canvas.width {
            let Some((x, y)) = canvas.to_plot(col, row) else {
                continue;
            };
            let v = layer.field.sample(x, y);
            if let Some(glyph) = shade_glyph(v) {
                let color = with_alpha(layer.colormap.rgb(v), layer.alpha);
                term.set(col as i32, row as i32, glyph, Some(color), false);
            }
        }
    }
}

fn draw_segment(term: &mut Terminal, canvas: &Area, segment: &Segment) {
    let heavy = segment.width >= HEAVY_DROP_WIDTH;
    let glyph = if heavy { '┃' } else { '│' };
    let color = with_alpha(segment.color.rgb(), segment.alpha);
    let (x, y0) = segment.from;
    let y1 = segment.to.1;

    let top = canvas.to_screen(x, y1.min(PLOT_EXTENT));
    let bottom = canvas.to_screen(x, y0.max(0.0));
    if let (Some((col, top_row)), Some((_, bottom_row))) = (top, bottom) {
        for row in top_row..=bottom_row {
            term.set(col as i32, row as i32, glyph, Some(color), heavy);
        }
    }
}

fn draw_label(term: &mut Terminal, canvas: &Area, label: &Label) {
    if label.alpha <= 0.0 {
        return;
    }
    let lines: Vec<&str> = label.text.lines().collect();
    let color = with_alpha(colors::LABEL, label.alpha);
    draw_centered(term, canvas, label.position, &lines, Some(color), true);
}

/// Lines centred horizontally and vertically on a plot coordinate
fn draw_centered(
    term: &mut Terminal,
    canvas: &Area,
    pos: (f64, f64),
    lines: &[&str],
    color: Option<crossterm::style::Color>,
    bold: bool,
) {
    let Some((col, row)) = canvas.to_screen(pos.0, pos.1) else {
        return;
    };
    let first_row = row as i32 - (lines.len() as i32 - 1) / 2;
    for (i, line) in lines.iter().enumerate() {
        let x = col as i32 - line.chars().count() as i32 / 2;
        term.set_str(x, first_row + i as i32, line, color, bold);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnimationConfig;
    use crate::puddle::AnimationSession;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Instant;

    fn canvas() -> Area {
        Area { x: 10, y: 2, width: 50, height: 20 }
    }

    #[test]
    fn click_maps_to_cell_centre() {
        let a = canvas();
        let (x, y) = a.to_plot(10, 2).unwrap();
        assert!((x - 1.0).abs() < 1e-9);
        assert!((y - 97.5).abs() < 1e-9);
        let (x, y) = a.to_plot(59, 21).unwrap();
        assert!((x - 99.0).abs() < 1e-9);
        assert!((y - 2.5).abs() < 1e-9);
    }

    #[test]
    fn click_outside_canvas_has_no_coordinate() {
        let a = canvas();
        assert!(a.to_plot(9, 5).is_none());
        assert!(a.to_plot(60, 5).is_none());
        assert!(a.to_plot(20, 1).is_none());
        assert!(a.to_plot(20, 22).is_none());
    }

    #[test]
    fn plot_round_trips_to_same_cell() {
        let a = canvas();
        for col in a.x..a.x + a.width {
            for row in a.y..a.y + a.height {
                let (x, y) = a.to_plot(col, row).unwrap();
                assert_eq!(a.to_screen(x, y), Some((col, row)));
            }
        }
        assert_eq!(a.to_screen(100.0, 0.0), Some((59, 21)));
        assert_eq!(a.to_screen(100.5, 50.0), None);
    }

    #[test]
    fn narrow_terminal_hides_table() {
        let wide = Layout::compute(160, 40, true);
        assert!(wide.table.is_some());
        assert!(wide.canvas.x > 0);
        let narrow = Layout::compute(40, 40, true);
        assert!(narrow.table.is_none());
        assert_eq!(narrow.canvas.x, 0);
        assert_eq!(narrow.canvas.width, 40);
        let off = Layout::compute(160, 40, false);
        assert!(off.table.is_none());
    }

    #[test]
    fn initial_frame_paints_label_and_field() {
        let mut term = Terminal::headless(100, 40);
        let layout = Layout::compute(100, 40, false);
        let mut rng = StdRng::seed_from_u64(1);
        let mut session = AnimationSession::new(AnimationConfig::default());
        let redraw = session.start((50.0, 50.0), 5.0, "Sha Tin", Instant::now(), &mut rng);

        draw_redraw(&mut term, &layout.canvas, &redraw);

        let (col, row) = layout.canvas.to_screen(50.0, 50.0).unwrap();
        let text: String = (0..100).filter_map(|x| term.get(x, row).map(|c| c.ch)).collect();
        assert!(text.contains("Sha Tin"), "row was {text:?}");
        let below: String = (0..100).filter_map(|x| term.get(x, row + 1).map(|c| c.ch)).collect();
        assert!(below.contains("Rainfall: 5 mm"));
        // Core shading just above the label
        let above = term.get(col, row - 2).unwrap();
        assert_ne!(above.ch, ' ');
    }

    #[test]
    fn final_frame_draws_nothing() {
        let mut term = Terminal::headless(60, 20);
        let layout = Layout::compute(60, 20, false);
        let mut rng = StdRng::seed_from_u64(2);
        let mut session = AnimationSession::new(AnimationConfig::default());
        session.start((50.0, 50.0), 1.0, "Tuen Mun", Instant::now(), &mut rng);
        let mut last = None;
        while let Some(r) = session.tick(&mut rng) {
            last = Some(r);
        }
        let last = last.unwrap();
        assert!(last.is_final());

        draw_redraw(&mut term, &layout.canvas, &last);
        for y in 0..20 {
            for x in 0..60 {
                assert_eq!(term.get(x, y).map(|c| c.ch), Some(' '));
            }
        }
    }
}
