//! Cursor-zone classification for rectangular windows.
//!
//! A window exposes four corner squares and four edge strips that start a
//! resize, plus its title bar which starts a drag. Everything here is pure:
//! callers take a geometry snapshot from the host and ask which zone a
//! cursor position falls into.

use crossterm::event::MouseEvent;

/// Signed rectangle origin with signed size.
///
/// Sizes stay signed so zone strips computed for windows smaller than two
/// corner squares come out empty instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Inclusive on both bounds: `x` in `[self.x, self.x + width]`.
    pub fn contains(&self, point: CursorPoint) -> bool {
        if self.width < 0 || self.height < 0 {
            return false;
        }
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }

    pub fn translate(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            ..*self
        }
    }
}

impl From<ratatui::layout::Rect> for Rect {
    fn from(r: ratatui::layout::Rect) -> Self {
        Self {
            x: r.x as i32,
            y: r.y as i32,
            width: r.width as i32,
            height: r.height as i32,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CursorPoint {
    pub x: i32,
    pub y: i32,
}

impl CursorPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Largest per-axis distance to `other`.
    pub fn chebyshev(&self, other: CursorPoint) -> i32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y)) as i32
    }
}

impl From<&MouseEvent> for CursorPoint {
    fn from(mouse: &MouseEvent) -> Self {
        Self {
            x: mouse.column as i32,
            y: mouse.row as i32,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    NorthWest,
    NorthEast,
    SouthEast,
    SouthWest,
}

impl Corner {
    /// Fixed test order.
    pub const ALL: [Corner; 4] = [
        Corner::NorthWest,
        Corner::NorthEast,
        Corner::SouthEast,
        Corner::SouthWest,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Corner::NorthWest => "nw",
            Corner::NorthEast => "ne",
            Corner::SouthEast => "se",
            Corner::SouthWest => "sw",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    North,
    East,
    South,
    West,
}

impl Edge {
    /// Fixed test order.
    pub const ALL: [Edge; 4] = [Edge::West, Edge::North, Edge::East, Edge::South];

    pub fn tag(self) -> &'static str {
        match self {
            Edge::North => "n",
            Edge::East => "e",
            Edge::South => "s",
            Edge::West => "w",
        }
    }

    pub fn is_horizontal_axis(self) -> bool {
        matches!(self, Edge::West | Edge::East)
    }
}

/// A resize grip: either a corner (two axes) or an edge (one axis).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeDirection {
    Corner(Corner),
    Edge(Edge),
}

impl ResizeDirection {
    pub fn tag(self) -> &'static str {
        match self {
            ResizeDirection::Corner(c) => c.tag(),
            ResizeDirection::Edge(e) => e.tag(),
        }
    }

    pub fn moves_left(self) -> bool {
        matches!(
            self,
            ResizeDirection::Edge(Edge::West)
                | ResizeDirection::Corner(Corner::NorthWest | Corner::SouthWest)
        )
    }

    pub fn moves_right(self) -> bool {
        matches!(
            self,
            ResizeDirection::Edge(Edge::East)
                | ResizeDirection::Corner(Corner::NorthEast | Corner::SouthEast)
        )
    }

    pub fn moves_top(self) -> bool {
        matches!(
            self,
            ResizeDirection::Edge(Edge::North)
                | ResizeDirection::Corner(Corner::NorthWest | Corner::NorthEast)
        )
    }

    pub fn moves_bottom(self) -> bool {
        matches!(
            self,
            ResizeDirection::Edge(Edge::South)
                | ResizeDirection::Corner(Corner::SouthEast | Corner::SouthWest)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ZoneHit {
    pub corner: Option<Corner>,
    pub edge: Option<Edge>,
    pub in_drag_zone: bool,
}

impl ZoneHit {
    pub fn resize_direction(&self) -> Option<ResizeDirection> {
        self.corner
            .map(ResizeDirection::Corner)
            .or(self.edge.map(ResizeDirection::Edge))
    }

    pub fn is_none(&self) -> bool {
        self.corner.is_none() && self.edge.is_none() && !self.in_drag_zone
    }
}

/// Which zone families a hit-test considers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ZoneChecks {
    pub edges_x: bool,
    pub edges_y: bool,
    pub corners: bool,
}

impl ZoneChecks {
    pub const ALL: ZoneChecks = ZoneChecks {
        edges_x: true,
        edges_y: true,
        corners: true,
    };

    pub const NONE: ZoneChecks = ZoneChecks {
        edges_x: false,
        edges_y: false,
        corners: false,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneSizes {
    pub corner: i32,
    pub edge: i32,
}

/// Zone rectangles derived from one window snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneLayout {
    window: Rect,
    sizes: ZoneSizes,
}

impl ZoneLayout {
    pub fn new(window: Rect, sizes: ZoneSizes) -> Self {
        Self { window, sizes }
    }

    pub fn corner_rect(&self, corner: Corner) -> Rect {
        let Rect {
            x,
            y,
            width: w,
            height: h,
        } = self.window;
        let c = self.sizes.corner;
        let east = x.saturating_add(w).saturating_sub(c);
        let south = y.saturating_add(h).saturating_sub(c);
        match corner {
            Corner::NorthWest => Rect::new(x, y, c, c),
            Corner::NorthEast => Rect::new(east, y, c, c),
            Corner::SouthEast => Rect::new(east, south, c, c),
            Corner::SouthWest => Rect::new(x, south, c, c),
        }
    }

    pub fn edge_rect(&self, edge: Edge) -> Rect {
        let Rect {
            x,
            y,
            width: w,
            height: h,
        } = self.window;
        let ZoneSizes { corner: c, edge: e } = self.sizes;
        // Zone sizes are only bounded below, so stay in saturating math.
        let inner_w = w.saturating_sub(c.saturating_mul(2));
        let inner_h = h.saturating_sub(c.saturating_mul(2));
        let inner_x = x.saturating_add(c);
        let inner_y = y.saturating_add(c);
        match edge {
            Edge::West => Rect::new(x, inner_y, e, inner_h),
            Edge::North => Rect::new(inner_x, y, inner_w, e),
            Edge::East => Rect::new(x.saturating_add(w).saturating_sub(e), inner_y, e, inner_h),
            Edge::South => Rect::new(inner_x, y.saturating_add(h).saturating_sub(e), inner_w, e),
        }
    }

    pub fn corner_at(&self, point: CursorPoint) -> Option<Corner> {
        Corner::ALL
            .into_iter()
            .find(|corner| self.corner_rect(*corner).contains(point))
    }

    pub fn edge_at(&self, point: CursorPoint, edges_x: bool, edges_y: bool) -> Option<Edge> {
        Edge::ALL.into_iter().find(|edge| {
            let enabled = if edge.is_horizontal_axis() {
                edges_x
            } else {
                edges_y
            };
            enabled && self.edge_rect(*edge).contains(point)
        })
    }
}

/// Classify `point` against the resize zones of `window` and the drag zone
/// `title`. Corners short-circuit edges.
pub fn classify(
    window: Rect,
    title: Option<Rect>,
    point: CursorPoint,
    checks: ZoneChecks,
    sizes: ZoneSizes,
) -> ZoneHit {
    let layout = ZoneLayout::new(window, sizes);
    let corner = if checks.corners {
        layout.corner_at(point)
    } else {
        None
    };
    let edge = if corner.is_none() {
        layout.edge_at(point, checks.edges_x, checks.edges_y)
    } else {
        None
    };
    let in_drag_zone = title.is_some_and(|t| t.contains(point));
    ZoneHit {
        corner,
        edge,
        in_drag_zone,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZES: ZoneSizes = ZoneSizes {
        corner: 12,
        edge: 8,
    };

    fn window() -> Rect {
        Rect::new(0, 0, 200, 100)
    }

    #[test]
    fn documented_example_points() {
        let hit = classify(window(), None, CursorPoint::new(6, 6), ZoneChecks::ALL, SIZES);
        assert_eq!(hit.corner, Some(Corner::NorthWest));
        assert_eq!(hit.edge, None);

        let hit = classify(window(), None, CursorPoint::new(100, 0), ZoneChecks::ALL, SIZES);
        assert_eq!(hit.corner, None);
        assert_eq!(hit.edge, Some(Edge::North));

        let hit = classify(window(), None, CursorPoint::new(100, 50), ZoneChecks::ALL, SIZES);
        assert!(hit.is_none());
    }

    #[test]
    fn corner_coordinates_never_classify_as_edges() {
        let w = window();
        let cases = [
            (CursorPoint::new(w.x, w.y), Corner::NorthWest),
            (CursorPoint::new(w.right(), w.y), Corner::NorthEast),
            (CursorPoint::new(w.right(), w.bottom()), Corner::SouthEast),
            (CursorPoint::new(w.x, w.bottom()), Corner::SouthWest),
        ];
        for (point, expected) in cases {
            let hit = classify(w, None, point, ZoneChecks::ALL, SIZES);
            assert_eq!(hit.corner, Some(expected), "point {point:?}");
            assert_eq!(hit.edge, None);
        }
    }

    #[test]
    fn north_strip_spans_width_minus_two_corners() {
        let layout = ZoneLayout::new(window(), SIZES);
        let north = layout.edge_rect(Edge::North);
        assert_eq!(north.width, 200 - 2 * 12);
        assert!(north.contains(CursorPoint::new(12, 0)));
        assert!(north.contains(CursorPoint::new(188, 0)));
        assert!(!north.contains(CursorPoint::new(11, 0)));
        assert!(!north.contains(CursorPoint::new(189, 0)));
    }

    #[test]
    fn edge_order_prefers_west_over_north() {
        // With zero-sized corners the W and N strips overlap near the origin.
        let sizes = ZoneSizes { corner: 0, edge: 8 };
        let hit = classify(window(), None, CursorPoint::new(2, 2), ZoneChecks::ALL, sizes);
        assert_eq!(hit.corner, None);
        assert_eq!(hit.edge, Some(Edge::West));

        let checks = ZoneChecks {
            edges_x: false,
            ..ZoneChecks::ALL
        };
        let hit = classify(window(), None, CursorPoint::new(2, 2), checks, sizes);
        assert_eq!(hit.edge, Some(Edge::North));
    }

    #[test]
    fn disabled_axes_skip_their_edges() {
        let checks = ZoneChecks {
            edges_x: false,
            edges_y: true,
            corners: false,
        };
        let hit = classify(window(), None, CursorPoint::new(2, 50), checks, SIZES);
        assert_eq!(hit.edge, None);
        let hit = classify(window(), None, CursorPoint::new(100, 98), checks, SIZES);
        assert_eq!(hit.edge, Some(Edge::South));

        let hit = classify(window(), None, CursorPoint::new(0, 0), ZoneChecks::NONE, SIZES);
        assert!(hit.is_none());
    }

    #[test]
    fn outside_points_hit_nothing() {
        let title = Rect::new(0, 0, 200, 10);
        for point in [
            CursorPoint::new(-1, 50),
            CursorPoint::new(201, 50),
            CursorPoint::new(100, -1),
            CursorPoint::new(100, 101),
            CursorPoint::new(-40, -40),
        ] {
            let hit = classify(window(), Some(title), point, ZoneChecks::ALL, SIZES);
            assert!(hit.is_none(), "point {point:?} => {hit:?}");
        }
    }

    #[test]
    fn drag_zone_is_independent_of_resize_priority() {
        let title = Rect::new(0, 0, 200, 10);
        let hit = classify(window(), Some(title), CursorPoint::new(4, 4), ZoneChecks::ALL, SIZES);
        assert_eq!(hit.corner, Some(Corner::NorthWest));
        assert!(hit.in_drag_zone);
        assert_eq!(
            hit.resize_direction(),
            Some(ResizeDirection::Corner(Corner::NorthWest))
        );
    }

    #[test]
    fn narrow_window_has_no_horizontal_strips() {
        let layout = ZoneLayout::new(Rect::new(0, 0, 20, 100), SIZES);
        assert!(layout.edge_rect(Edge::North).width < 0);
        assert_eq!(layout.edge_at(CursorPoint::new(10, 0), true, true), None);
    }

    #[test]
    fn oversized_zones_saturate_instead_of_overflowing() {
        let sizes = ZoneSizes {
            corner: 1_500_000_000,
            edge: 8,
        };
        let window = Rect::new(0, 0, 200, 100);
        let far = classify(
            window,
            None,
            CursorPoint::new(-5, 2_000_000_000),
            ZoneChecks::ALL,
            sizes,
        );
        assert!(far.is_none());
        let near = classify(window, None, CursorPoint::new(10, 10), ZoneChecks::ALL, sizes);
        assert_eq!(near.corner, Some(Corner::NorthWest));
        let layout = ZoneLayout::new(Rect::new(i32::MAX - 10, i32::MAX - 10, 5, 5), sizes);
        assert!(layout.edge_rect(Edge::South).width < 0);
    }
}
