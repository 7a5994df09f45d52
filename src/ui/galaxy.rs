//! Decorative starfield background.
//!
//! A fixed number of randomly placed elements in two families: point-like
//! stars in three size classes, and a handful of larger abstract shapes.
//! Generation happens once per mount and is intentionally unseeded; the
//! visuals are not a correctness concern. Each frame the elements are
//! redrawn with a parallax offset computed as a pure function of the last
//! pointer position and the element's depth band, so there is no imperative
//! mutation of positions anywhere.

use rand::Rng;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    Frame,
};

// ============================================================================
// Constants
// ============================================================================

/// Number of stars generated per mount
pub const STAR_COUNT: usize = 120;

/// Number of larger abstract shapes generated per mount
pub const SHAPE_COUNT: usize = 8;

/// Parallax travel in terminal cells at full pointer deflection.
/// Terminal cells are roughly twice as tall as wide, so vertical travel is
/// half the horizontal to keep the motion visually uniform.
const STAR_TRAVEL_X: f32 = 6.0;
const STAR_TRAVEL_Y: f32 = 3.0;
const SHAPE_TRAVEL_X: f32 = 10.0;
const SHAPE_TRAVEL_Y: f32 = 5.0;

/// Twinkle cycle length in render ticks (~10 ticks per second)
const TWINKLE_PERIOD_TICKS: u64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarSize {
    Small,
    Medium,
    Large,
}

impl StarSize {
    fn glyph(self) -> &'static str {
        match self {
            StarSize::Small => "·",
            StarSize::Medium => "•",
            StarSize::Large => "✦",
        }
    }

    /// Size class from a uniform roll, biased heavily toward small stars
    fn from_roll(roll: f32) -> Self {
        if roll > 0.95 {
            StarSize::Large
        } else if roll > 0.7 {
            StarSize::Medium
        } else {
            StarSize::Small
        }
    }
}

/// One generated star. Positions are percentages of the render area so the
/// field survives terminal resizes without regeneration.
#[derive(Debug, Clone)]
pub struct Star {
    pub x_pct: f32,
    pub y_pct: f32,
    pub size: StarSize,
    /// 0.4 to 1.0, mapped to a grayscale level
    pub brightness: f32,
    /// Twinkle phase offset in ticks
    pub twinkle_delay: u64,
    /// Parallax depth band, 0.2 to 1.2
    pub depth: f32,
}

/// One generated abstract shape
#[derive(Debug, Clone)]
pub struct Shape {
    pub x_pct: f32,
    pub y_pct: f32,
    /// Cycles through the three shape variants
    pub variant: usize,
    /// 0.25 to 0.9
    pub opacity: f32,
    /// Parallax depth band, 0.4 to 1.15
    pub depth: f32,
}

const SHAPE_GLYPHS: [&str; 3] = ["◆", "●", "▲"];

/// The generated field plus the last known pointer position.
/// Dropped wholesale on teardown; nothing persists across mounts.
pub struct Galaxy {
    pub stars: Vec<Star>,
    pub shapes: Vec<Shape>,
    /// Normalized pointer offset from the area centre, each axis -1.0 to 1.0
    pointer: Option<(f32, f32)>,
}

impl Galaxy {
    pub fn generate() -> Self {
        Self::with_counts(STAR_COUNT, SHAPE_COUNT)
    }

    pub fn with_counts(star_count: usize, shape_count: usize) -> Self {
        let mut rng = rand::thread_rng();

        let stars = (0..star_count)
            .map(|i| Star {
                x_pct: rng.gen_range(0.0..100.0),
                y_pct: rng.gen_range(0.0..100.0),
                size: StarSize::from_roll(rng.gen::<f32>()),
                brightness: rng.gen_range(0.4..1.0),
                twinkle_delay: rng.gen_range(0..TWINKLE_PERIOD_TICKS),
                depth: star_depth(i),
            })
            .collect();

        let shapes = (0..shape_count)
            .map(|i| Shape {
                x_pct: rng.gen_range(0.0..100.0),
                y_pct: rng.gen_range(0.0..100.0),
                variant: i % SHAPE_GLYPHS.len(),
                opacity: rng.gen_range(0.25..0.9),
                depth: shape_depth(i),
            })
            .collect();

        Self {
            stars,
            shapes,
            pointer: None,
        }
    }

    /// Record the pointer position as a normalized centre offset
    pub fn set_pointer(&mut self, dx: f32, dy: f32) {
        self.pointer = Some((dx.clamp(-1.0, 1.0), dy.clamp(-1.0, 1.0)));
    }

    /// Parallax offset for a star, in cells. Zero until a pointer is seen.
    pub fn star_offset(&self, star: &Star) -> (f32, f32) {
        match self.pointer {
            Some((dx, dy)) => (
                dx * star.depth * STAR_TRAVEL_X,
                dy * star.depth * STAR_TRAVEL_Y,
            ),
            None => (0.0, 0.0),
        }
    }

    /// Parallax offset for a shape, in cells. Shapes travel further than
    /// stars, reading as the near layer.
    pub fn shape_offset(&self, shape: &Shape) -> (f32, f32) {
        match self.pointer {
            Some((dx, dy)) => (
                dx * shape.depth * SHAPE_TRAVEL_X,
                dy * shape.depth * SHAPE_TRAVEL_Y,
            ),
            None => (0.0, 0.0),
        }
    }
}

/// Depth band for star `index`. Bands cycle so that neighbouring stars move
/// at different rates, which is what sells the parallax.
pub fn star_depth(index: usize) -> f32 {
    (index % 5) as f32 / 5.0 + 0.2
}

/// Depth band for shape `index`
pub fn shape_depth(index: usize) -> f32 {
    (index % 4) as f32 / 4.0 + 0.4
}

/// Normalize a cell position to a -1.0..1.0 offset from the area centre
pub fn normalized_pointer(column: u16, row: u16, width: u16, height: u16) -> (f32, f32) {
    let cx = (width.max(2) - 1) as f32 / 2.0;
    let cy = (height.max(2) - 1) as f32 / 2.0;
    let dx = (column as f32 - cx) / cx;
    let dy = (row as f32 - cy) / cy;
    (dx.clamp(-1.0, 1.0), dy.clamp(-1.0, 1.0))
}

/// Draw the field into `area`. `tick` drives the twinkle animation and is
/// just the frame counter from the event loop.
pub fn render(galaxy: &Galaxy, tick: u64, frame: &mut Frame, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let buf = frame.buffer_mut();

    for star in &galaxy.stars {
        let (ox, oy) = galaxy.star_offset(star);
        if let Some((x, y)) = cell_position(star.x_pct, star.y_pct, ox, oy, area) {
            let dimmed = twinkle_dimmed(tick, star.twinkle_delay);
            let level = gray_level(star.brightness, dimmed);
            let style = Style::default().fg(Color::Rgb(level, level, level));
            buf.set_string(x, y, star.size.glyph(), style);
        }
    }

    for shape in &galaxy.shapes {
        let (ox, oy) = galaxy.shape_offset(shape);
        if let Some((x, y)) = cell_position(shape.x_pct, shape.y_pct, ox, oy, area) {
            let style = Style::default().fg(shape_color(shape.opacity));
            buf.set_string(x, y, SHAPE_GLYPHS[shape.variant % SHAPE_GLYPHS.len()], style);
        }
    }
}

/// Map percent coordinates plus a cell offset into the area, or None when
/// the parallax pushes the element out of view.
fn cell_position(x_pct: f32, y_pct: f32, ox: f32, oy: f32, area: Rect) -> Option<(u16, u16)> {
    let x = (x_pct / 100.0 * (area.width - 1) as f32 + ox).round();
    let y = (y_pct / 100.0 * (area.height - 1) as f32 + oy).round();
    if x < 0.0 || y < 0.0 || x > (area.width - 1) as f32 || y > (area.height - 1) as f32 {
        return None;
    }
    Some((area.x + x as u16, area.y + y as u16))
}

/// A star spends a short slice of each twinkle period dimmed
fn twinkle_dimmed(tick: u64, delay: u64) -> bool {
    (tick + delay) % TWINKLE_PERIOD_TICKS < 5
}

fn gray_level(brightness: f32, dimmed: bool) -> u8 {
    let level = (brightness * 200.0 + 55.0) as u8;
    if dimmed {
        level / 2
    } else {
        level
    }
}

/// Shapes sit in a muted violet band, opacity scaling the whole channel
fn shape_color(opacity: f32) -> Color {
    Color::Rgb(
        (120.0 * opacity) as u8,
        (90.0 * opacity) as u8,
        (190.0 * opacity) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_requested_counts() {
        let galaxy = Galaxy::with_counts(25, 4);
        assert_eq!(galaxy.stars.len(), 25);
        assert_eq!(galaxy.shapes.len(), 4);
    }

    #[test]
    fn generated_positions_stay_in_percent_range() {
        let galaxy = Galaxy::with_counts(50, 6);
        for star in &galaxy.stars {
            assert!((0.0..100.0).contains(&star.x_pct));
            assert!((0.0..100.0).contains(&star.y_pct));
            assert!((0.4..1.0).contains(&star.brightness));
        }
        for shape in &galaxy.shapes {
            assert!((0.25..0.9).contains(&shape.opacity));
        }
    }

    #[test]
    fn offsets_are_zero_before_any_pointer_event() {
        let galaxy = Galaxy::with_counts(5, 2);
        assert_eq!(galaxy.star_offset(&galaxy.stars[0]), (0.0, 0.0));
        assert_eq!(galaxy.shape_offset(&galaxy.shapes[0]), (0.0, 0.0));
    }

    #[test]
    fn offset_is_pure_in_pointer_and_depth() {
        let mut galaxy = Galaxy::with_counts(5, 2);
        galaxy.set_pointer(1.0, 1.0);

        let star = &galaxy.stars[0];
        let expected = (star.depth * STAR_TRAVEL_X, star.depth * STAR_TRAVEL_Y);
        assert_eq!(galaxy.star_offset(star), expected);
        // Same inputs, same output.
        assert_eq!(galaxy.star_offset(star), expected);

        galaxy.set_pointer(0.0, 0.0);
        assert_eq!(galaxy.star_offset(&galaxy.stars[0]), (0.0, 0.0));
    }

    #[test]
    fn pointer_values_are_clamped() {
        let mut galaxy = Galaxy::with_counts(1, 1);
        galaxy.set_pointer(5.0, -5.0);
        let star = &galaxy.stars[0];
        let (ox, oy) = galaxy.star_offset(star);
        assert_eq!(ox, star.depth * STAR_TRAVEL_X);
        assert_eq!(oy, -star.depth * STAR_TRAVEL_Y);
    }

    #[test]
    fn depth_bands_cycle() {
        assert_eq!(star_depth(0), star_depth(5));
        assert!(star_depth(4) > star_depth(0));
        assert_eq!(shape_depth(1), shape_depth(5));
    }

    #[test]
    fn normalized_pointer_centre_and_corners() {
        let (dx, dy) = normalized_pointer(40, 12, 81, 25);
        assert!(dx.abs() < 0.01 && dy.abs() < 0.01);

        let (dx, dy) = normalized_pointer(0, 0, 81, 25);
        assert_eq!((dx, dy), (-1.0, -1.0));

        let (dx, dy) = normalized_pointer(80, 24, 81, 25);
        assert_eq!((dx, dy), (1.0, 1.0));
    }

    #[test]
    fn cell_position_rejects_out_of_view() {
        let area = Rect::new(0, 0, 80, 24);
        assert!(cell_position(50.0, 50.0, 0.0, 0.0, area).is_some());
        assert!(cell_position(99.9, 50.0, 10.0, 0.0, area).is_none());
        assert!(cell_position(0.0, 0.0, -1.0, 0.0, area).is_none());
    }
}
