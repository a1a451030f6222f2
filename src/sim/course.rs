//! Static course model: hole definitions, terrain zones, and obstacles
//!
//! A `Course` is loaded once (builtin or from JSON) and never mutated during
//! play, so the simulation can query it freely without locking.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{BALL_RADIUS, CUP_RADIUS, RAMP_ACCEL};

/// Closed set of playable surfaces. Each maps to a fixed friction
/// coefficient; there is deliberately no way to extend this at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceType {
    Fairway,
    Rough,
    Green,
    Sand,
    Water,
}

impl SurfaceType {
    /// Fraction of speed retained per frame at the 60 Hz reference rate.
    ///
    /// Water has no rolling friction: landing in it is an immediate hazard
    /// penalty, handled by the physics step before friction matters.
    pub fn friction(self) -> f32 {
        match self {
            SurfaceType::Fairway => 0.98,
            SurfaceType::Rough => 0.95,
            SurfaceType::Green => 0.985,
            SurfaceType::Sand => 0.90,
            SurfaceType::Water => 1.0,
        }
    }

    /// Hazards outrank all other zones when stacked at the same point
    pub fn is_hazard(self) -> bool {
        matches!(self, SurfaceType::Sand | SurfaceType::Water)
    }

    /// Z-order for overlapping zones: hazards > green > fairway > rough
    fn priority(self) -> u8 {
        match self {
            SurfaceType::Water => 4,
            SurfaceType::Sand => 3,
            SurfaceType::Green => 2,
            SurfaceType::Fairway => 1,
            SurfaceType::Rough => 0,
        }
    }
}

/// Axis-aligned rectangle in world coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_size(min: Vec2, size: Vec2) -> Self {
        Self {
            min,
            max: min + size,
        }
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Closest point on (or inside) the rectangle to `p`
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        p.clamp(self.min, self.max)
    }
}

/// Geometry used by both terrain zones and obstacles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Rect(Rect),
    Circle { center: Vec2, radius: f32 },
}

impl Shape {
    pub fn contains(&self, p: Vec2) -> bool {
        match *self {
            Shape::Rect(r) => r.contains(p),
            Shape::Circle { center, radius } => (p - center).length_squared() <= radius * radius,
        }
    }
}

/// A region of the hole with a particular surface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerrainZone {
    pub shape: Shape,
    pub surface: SurfaceType,
}

/// Solid or slope obstacle kinds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ObstacleKind {
    Wall,
    Tree,
    /// Down-slope direction; the ball accelerates this way while on the ramp
    Ramp {
        downhill: Vec2,
    },
}

impl ObstacleKind {
    /// Fraction of speed kept after bouncing off this obstacle
    pub fn restitution(self) -> f32 {
        match self {
            ObstacleKind::Wall => 0.8,
            ObstacleKind::Tree => 0.55,
            // Ramps never produce contacts
            ObstacleKind::Ramp { .. } => 0.0,
        }
    }

    fn is_solid(self) -> bool {
        !matches!(self, ObstacleKind::Ramp { .. })
    }
}

/// An obstacle placed on a hole
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub shape: Shape,
    pub kind: ObstacleKind,
}

/// Result of an obstacle overlap query
#[derive(Debug, Clone, Copy)]
pub struct Contact {
    /// Surface normal pointing away from the obstacle, toward the ball
    pub normal: Vec2,
    /// Overlap depth along the normal (for push-out)
    pub penetration: f32,
    pub kind: ObstacleKind,
}

/// Static definition of a single hole. Immutable during play.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoleDef {
    pub par: u32,
    /// Playable boundary; leaving it is an out-of-bounds penalty
    pub bounds: Rect,
    /// Ball start position
    pub tee: Vec2,
    /// Cup center
    pub cup: Vec2,
    #[serde(default = "default_cup_radius")]
    pub cup_radius: f32,
    #[serde(default)]
    pub zones: Vec<TerrainZone>,
    #[serde(default)]
    pub obstacles: Vec<Obstacle>,
}

fn default_cup_radius() -> f32 {
    CUP_RADIUS
}

impl HoleDef {
    /// Whether `p` is inside the playable boundary
    #[inline]
    pub fn contains_point(&self, p: Vec2) -> bool {
        self.bounds.contains(p)
    }

    /// Surface at `p`: the highest-priority zone containing the point,
    /// defaulting to rough anywhere no zone applies.
    pub fn surface_at(&self, p: Vec2) -> SurfaceType {
        self.zones
            .iter()
            .filter(|z| z.shape.contains(p))
            .map(|z| z.surface)
            .max_by_key(|s| s.priority())
            .unwrap_or(SurfaceType::Rough)
    }

    /// First solid obstacle overlapping a ball at `pos` with `radius`.
    ///
    /// Obstacles are checked in definition order, which is stable per hole,
    /// so resolution is deterministic when shapes touch.
    pub fn collide_obstacle(&self, pos: Vec2, radius: f32) -> Option<Contact> {
        self.obstacles
            .iter()
            .filter(|o| o.kind.is_solid())
            .find_map(|o| circle_shape_contact(pos, radius, &o.shape).map(|(normal, penetration)| Contact {
                normal,
                penetration,
                kind: o.kind,
            }))
    }

    /// Down-slope acceleration at `p` (zero on flat terrain)
    pub fn slope_at(&self, p: Vec2) -> Vec2 {
        for o in &self.obstacles {
            if let ObstacleKind::Ramp { downhill } = o.kind
                && o.shape.contains(p)
            {
                return downhill.normalize_or_zero() * RAMP_ACCEL;
            }
        }
        Vec2::ZERO
    }

    fn validate(&self, index: usize) -> Result<(), CourseError> {
        if self.par == 0 {
            return Err(CourseError::BadPar { hole: index });
        }
        if !self.bounds.contains(self.tee) {
            return Err(CourseError::TeeOutOfBounds { hole: index });
        }
        if !self.bounds.contains(self.cup) {
            return Err(CourseError::CupOutOfBounds { hole: index });
        }
        if self.cup_radius <= BALL_RADIUS {
            return Err(CourseError::CupTooSmall { hole: index });
        }
        Ok(())
    }
}

/// Overlap test between a circle and a shape.
/// Returns (normal pointing toward the circle center, penetration depth).
fn circle_shape_contact(pos: Vec2, radius: f32, shape: &Shape) -> Option<(Vec2, f32)> {
    match *shape {
        Shape::Circle { center, radius: r } => {
            let offset = pos - center;
            let dist = offset.length();
            if dist < r + radius {
                let normal = if dist > 1e-4 {
                    offset / dist
                } else {
                    // Ball center exactly on the obstacle center
                    Vec2::X
                };
                Some((normal, r + radius - dist))
            } else {
                None
            }
        }
        Shape::Rect(rect) => {
            let closest = rect.closest_point(pos);
            let offset = pos - closest;
            let dist = offset.length();
            if dist >= radius {
                return None;
            }
            if dist > 1e-4 {
                // Center outside the rect: normal points from the face/corner
                Some((offset / dist, radius - dist))
            } else {
                // Center inside the rect: push out along the nearest face
                let left = pos.x - rect.min.x;
                let right = rect.max.x - pos.x;
                let down = pos.y - rect.min.y;
                let up = rect.max.y - pos.y;
                let min = left.min(right).min(down).min(up);
                let normal = if min == left {
                    -Vec2::X
                } else if min == right {
                    Vec2::X
                } else if min == down {
                    -Vec2::Y
                } else {
                    Vec2::Y
                };
                Some((normal, min + radius))
            }
        }
    }
}

/// Errors starting a round against bad course data. Fatal per hole: the
/// state machine refuses to simulate against undefined terrain.
#[derive(Debug)]
pub enum CourseError {
    Empty,
    BadPar { hole: usize },
    TeeOutOfBounds { hole: usize },
    CupOutOfBounds { hole: usize },
    CupTooSmall { hole: usize },
    Parse(serde_json::Error),
}

impl fmt::Display for CourseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CourseError::Empty => write!(f, "course has no holes"),
            CourseError::BadPar { hole } => write!(f, "hole {hole}: par must be at least 1"),
            CourseError::TeeOutOfBounds { hole } => {
                write!(f, "hole {hole}: tee is outside the playable boundary")
            }
            CourseError::CupOutOfBounds { hole } => {
                write!(f, "hole {hole}: cup is outside the playable boundary")
            }
            CourseError::CupTooSmall { hole } => {
                write!(f, "hole {hole}: cup radius must exceed the ball radius")
            }
            CourseError::Parse(e) => write!(f, "failed to parse course data: {e}"),
        }
    }
}

impl std::error::Error for CourseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CourseError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CourseError {
    fn from(e: serde_json::Error) -> Self {
        CourseError::Parse(e)
    }
}

/// An ordered set of holes making up one round
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub holes: Vec<HoleDef>,
}

impl Course {
    /// Validate and wrap a list of holes
    pub fn new(holes: Vec<HoleDef>) -> Result<Self, CourseError> {
        if holes.is_empty() {
            return Err(CourseError::Empty);
        }
        for (i, hole) in holes.iter().enumerate() {
            hole.validate(i)?;
        }
        Ok(Self { holes })
    }

    /// Parse a course from its JSON representation
    pub fn from_json(json: &str) -> Result<Self, CourseError> {
        let course: Course = serde_json::from_str(json)?;
        Self::new(course.holes)
    }

    pub fn len(&self) -> usize {
        self.holes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holes.is_empty()
    }

    pub fn hole(&self, index: usize) -> Option<&HoleDef> {
        self.holes.get(index)
    }

    /// Total par across all holes
    pub fn total_par(&self) -> u32 {
        self.holes.iter().map(|h| h.par).sum()
    }

    /// The builtin nine-hole course
    pub fn standard() -> Self {
        let holes = vec![
            // 1: straight par 2 warm-up, all fairway
            HoleDef {
                par: 2,
                bounds: Rect::from_size(Vec2::ZERO, Vec2::new(800.0, 400.0)),
                tee: Vec2::new(100.0, 200.0),
                cup: Vec2::new(700.0, 200.0),
                cup_radius: CUP_RADIUS,
                zones: vec![
                    zone_rect(40.0, 120.0, 760.0, 280.0, SurfaceType::Fairway),
                    zone_circle(700.0, 200.0, 70.0, SurfaceType::Green),
                ],
                obstacles: vec![],
            },
            // 2: central wall forces a bank shot
            HoleDef {
                par: 3,
                bounds: Rect::from_size(Vec2::ZERO, Vec2::new(800.0, 500.0)),
                tee: Vec2::new(100.0, 250.0),
                cup: Vec2::new(700.0, 250.0),
                cup_radius: CUP_RADIUS,
                zones: vec![
                    zone_rect(40.0, 80.0, 760.0, 420.0, SurfaceType::Fairway),
                    zone_circle(700.0, 250.0, 65.0, SurfaceType::Green),
                ],
                obstacles: vec![wall(380.0, 140.0, 420.0, 360.0)],
            },
            // 3: sand pockets around the green
            HoleDef {
                par: 3,
                bounds: Rect::from_size(Vec2::ZERO, Vec2::new(800.0, 500.0)),
                tee: Vec2::new(100.0, 400.0),
                cup: Vec2::new(680.0, 120.0),
                cup_radius: CUP_RADIUS,
                zones: vec![
                    zone_rect(40.0, 60.0, 760.0, 440.0, SurfaceType::Fairway),
                    zone_circle(680.0, 120.0, 60.0, SurfaceType::Green),
                    zone_circle(600.0, 200.0, 45.0, SurfaceType::Sand),
                    zone_circle(740.0, 210.0, 40.0, SurfaceType::Sand),
                ],
                obstacles: vec![],
            },
            // 4: pond carry
            HoleDef {
                par: 4,
                bounds: Rect::from_size(Vec2::ZERO, Vec2::new(900.0, 500.0)),
                tee: Vec2::new(100.0, 250.0),
                cup: Vec2::new(790.0, 250.0),
                cup_radius: CUP_RADIUS,
                zones: vec![
                    zone_rect(40.0, 80.0, 860.0, 420.0, SurfaceType::Fairway),
                    zone_rect(380.0, 80.0, 540.0, 420.0, SurfaceType::Water),
                    zone_circle(790.0, 250.0, 60.0, SurfaceType::Green),
                ],
                obstacles: vec![],
            },
            // 5: tree grove down the middle
            HoleDef {
                par: 3,
                bounds: Rect::from_size(Vec2::ZERO, Vec2::new(800.0, 600.0)),
                tee: Vec2::new(120.0, 520.0),
                cup: Vec2::new(660.0, 100.0),
                cup_radius: CUP_RADIUS,
                zones: vec![
                    zone_rect(40.0, 40.0, 760.0, 560.0, SurfaceType::Fairway),
                    zone_circle(660.0, 100.0, 60.0, SurfaceType::Green),
                ],
                obstacles: vec![
                    tree(360.0, 320.0, 22.0),
                    tree(440.0, 260.0, 26.0),
                    tree(400.0, 420.0, 20.0),
                ],
            },
            // 6: uphill ramp against the shot line
            HoleDef {
                par: 4,
                bounds: Rect::from_size(Vec2::ZERO, Vec2::new(900.0, 400.0)),
                tee: Vec2::new(100.0, 200.0),
                cup: Vec2::new(800.0, 200.0),
                cup_radius: CUP_RADIUS,
                zones: vec![
                    zone_rect(40.0, 60.0, 860.0, 340.0, SurfaceType::Fairway),
                    zone_circle(800.0, 200.0, 55.0, SurfaceType::Green),
                ],
                obstacles: vec![ramp(420.0, 60.0, 620.0, 340.0, Vec2::new(-1.0, 0.0))],
            },
            // 7: long par 5 through rough with a dogleg wall
            HoleDef {
                par: 5,
                bounds: Rect::from_size(Vec2::ZERO, Vec2::new(1000.0, 600.0)),
                tee: Vec2::new(100.0, 500.0),
                cup: Vec2::new(880.0, 120.0),
                cup_radius: CUP_RADIUS,
                zones: vec![
                    zone_rect(40.0, 380.0, 700.0, 560.0, SurfaceType::Fairway),
                    zone_rect(600.0, 60.0, 960.0, 440.0, SurfaceType::Fairway),
                    zone_circle(880.0, 120.0, 60.0, SurfaceType::Green),
                ],
                obstacles: vec![wall(560.0, 200.0, 600.0, 480.0)],
            },
            // 8: island green
            HoleDef {
                par: 3,
                bounds: Rect::from_size(Vec2::ZERO, Vec2::new(800.0, 500.0)),
                tee: Vec2::new(100.0, 250.0),
                cup: Vec2::new(650.0, 250.0),
                cup_radius: CUP_RADIUS,
                zones: vec![
                    // Water flanks a narrow land channel from tee to green.
                    // Hazards outrank other zones, so the channel is left as
                    // a gap in the water rather than layered on top of it.
                    zone_rect(40.0, 60.0, 760.0, 200.0, SurfaceType::Water),
                    zone_rect(40.0, 300.0, 760.0, 440.0, SurfaceType::Water),
                    zone_rect(40.0, 200.0, 300.0, 300.0, SurfaceType::Fairway),
                    zone_circle(650.0, 250.0, 70.0, SurfaceType::Green),
                ],
                obstacles: vec![],
            },
            // 9: everything at once
            HoleDef {
                par: 4,
                bounds: Rect::from_size(Vec2::ZERO, Vec2::new(1000.0, 600.0)),
                tee: Vec2::new(100.0, 300.0),
                cup: Vec2::new(900.0, 300.0),
                cup_radius: CUP_RADIUS,
                zones: vec![
                    zone_rect(40.0, 100.0, 960.0, 500.0, SurfaceType::Fairway),
                    zone_circle(430.0, 180.0, 50.0, SurfaceType::Sand),
                    zone_rect(560.0, 360.0, 720.0, 500.0, SurfaceType::Water),
                    zone_circle(900.0, 300.0, 65.0, SurfaceType::Green),
                ],
                obstacles: vec![
                    wall(300.0, 100.0, 330.0, 280.0),
                    tree(620.0, 220.0, 24.0),
                    ramp(740.0, 100.0, 840.0, 500.0, Vec2::new(1.0, 0.0)),
                ],
            },
        ];

        // Builtin layouts are validated by tests; construction cannot fail
        Self { holes }
    }
}

fn zone_rect(x0: f32, y0: f32, x1: f32, y1: f32, surface: SurfaceType) -> TerrainZone {
    TerrainZone {
        shape: Shape::Rect(Rect::new(Vec2::new(x0, y0), Vec2::new(x1, y1))),
        surface,
    }
}

fn zone_circle(x: f32, y: f32, radius: f32, surface: SurfaceType) -> TerrainZone {
    TerrainZone {
        shape: Shape::Circle {
            center: Vec2::new(x, y),
            radius,
        },
        surface,
    }
}

fn wall(x0: f32, y0: f32, x1: f32, y1: f32) -> Obstacle {
    Obstacle {
        shape: Shape::Rect(Rect::new(Vec2::new(x0, y0), Vec2::new(x1, y1))),
        kind: ObstacleKind::Wall,
    }
}

fn tree(x: f32, y: f32, radius: f32) -> Obstacle {
    Obstacle {
        shape: Shape::Circle {
            center: Vec2::new(x, y),
            radius,
        },
        kind: ObstacleKind::Tree,
    }
}

fn ramp(x0: f32, y0: f32, x1: f32, y1: f32, downhill: Vec2) -> Obstacle {
    Obstacle {
        shape: Shape::Rect(Rect::new(Vec2::new(x0, y0), Vec2::new(x1, y1))),
        kind: ObstacleKind::Ramp { downhill },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_hole() -> HoleDef {
        HoleDef {
            par: 3,
            bounds: Rect::from_size(Vec2::ZERO, Vec2::new(800.0, 400.0)),
            tee: Vec2::new(100.0, 200.0),
            cup: Vec2::new(700.0, 200.0),
            cup_radius: CUP_RADIUS,
            zones: vec![
                zone_rect(0.0, 0.0, 800.0, 400.0, SurfaceType::Fairway),
                zone_circle(700.0, 200.0, 60.0, SurfaceType::Green),
                zone_circle(650.0, 200.0, 40.0, SurfaceType::Sand),
            ],
            obstacles: vec![wall(300.0, 100.0, 340.0, 300.0), tree(500.0, 200.0, 20.0)],
        }
    }

    #[test]
    fn test_surface_priority() {
        let hole = flat_hole();
        // Fairway only
        assert_eq!(hole.surface_at(Vec2::new(100.0, 100.0)), SurfaceType::Fairway);
        // Green overlaps fairway
        assert_eq!(hole.surface_at(Vec2::new(720.0, 200.0)), SurfaceType::Green);
        // Sand overlaps both green and fairway; hazard wins
        assert_eq!(hole.surface_at(Vec2::new(650.0, 200.0)), SurfaceType::Sand);
        // Outside every zone: default rough
        let bare = HoleDef {
            zones: vec![],
            ..flat_hole()
        };
        assert_eq!(bare.surface_at(Vec2::new(100.0, 100.0)), SurfaceType::Rough);
    }

    #[test]
    fn test_wall_contact_normal() {
        let hole = flat_hole();
        // Ball approaching the left face of the wall at x=300
        let contact = hole
            .collide_obstacle(Vec2::new(295.0, 200.0), BALL_RADIUS)
            .expect("should overlap wall");
        assert_eq!(contact.kind, ObstacleKind::Wall);
        assert!(contact.normal.x < -0.99);
        assert!(contact.penetration > 0.0);
    }

    #[test]
    fn test_tree_contact_normal() {
        let hole = flat_hole();
        let contact = hole
            .collide_obstacle(Vec2::new(525.0, 200.0), BALL_RADIUS)
            .expect("should overlap tree");
        assert_eq!(contact.kind, ObstacleKind::Tree);
        // Normal points from the trunk toward the ball
        assert!(contact.normal.x > 0.99);
    }

    #[test]
    fn test_no_contact_when_clear() {
        let hole = flat_hole();
        assert!(hole.collide_obstacle(Vec2::new(100.0, 100.0), BALL_RADIUS).is_none());
    }

    #[test]
    fn test_ramp_slope_and_no_contact() {
        let hole = HoleDef {
            obstacles: vec![ramp(200.0, 100.0, 400.0, 300.0, Vec2::new(0.0, 2.0))],
            ..flat_hole()
        };
        let slope = hole.slope_at(Vec2::new(300.0, 200.0));
        // Downhill vector is normalized before scaling
        assert!((slope.y - crate::consts::RAMP_ACCEL).abs() < 1e-3);
        assert!(slope.x.abs() < 1e-3);
        assert_eq!(hole.slope_at(Vec2::new(100.0, 100.0)), Vec2::ZERO);
        // Ramps are not solid
        assert!(hole.collide_obstacle(Vec2::new(300.0, 200.0), BALL_RADIUS).is_none());
    }

    #[test]
    fn test_validation_errors() {
        let mut bad = flat_hole();
        bad.par = 0;
        assert!(matches!(
            Course::new(vec![bad]),
            Err(CourseError::BadPar { hole: 0 })
        ));

        let mut bad = flat_hole();
        bad.cup = Vec2::new(-50.0, 200.0);
        assert!(matches!(
            Course::new(vec![bad]),
            Err(CourseError::CupOutOfBounds { hole: 0 })
        ));

        assert!(matches!(Course::new(vec![]), Err(CourseError::Empty)));
    }

    #[test]
    fn test_standard_course_is_valid() {
        let course = Course::standard();
        assert_eq!(course.len(), 9);
        assert!(Course::new(course.holes.clone()).is_ok());
        // Every cup sits on its green
        for hole in &course.holes {
            assert_eq!(hole.surface_at(hole.cup), SurfaceType::Green);
        }
    }

    #[test]
    fn test_json_round_trip() {
        let course = Course::standard();
        let json = serde_json::to_string(&course).expect("serialize");
        let parsed = Course::from_json(&json).expect("parse");
        assert_eq!(parsed.len(), course.len());
        assert_eq!(parsed.total_par(), course.total_par());
    }

    #[test]
    fn test_json_rejects_invalid() {
        assert!(matches!(
            Course::from_json("{not json"),
            Err(CourseError::Parse(_))
        ));
        assert!(matches!(
            Course::from_json(r#"{"holes": []}"#),
            Err(CourseError::Empty)
        ));
    }
}
