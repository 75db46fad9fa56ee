use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Axis-aligned integer bounding box in image pixels (y grows downward).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl BoundingBox {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Smallest box containing every point. Empty input yields the zero box.
    pub fn from_points(points: &[Point2<i32>]) -> Self {
        let Some(first) = points.first() else {
            return Self::default();
        };
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in &points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Self::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    /// Integer centre, truncated the same way on both axes.
    #[inline]
    pub fn center(&self) -> Point2<i32> {
        Point2::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// `height / width`; infinite or NaN for a zero-width box.
    #[inline]
    pub fn aspect_ratio(&self) -> f32 {
        self.height as f32 / self.width as f32
    }

    /// Corner points, clockwise from top-left.
    pub fn corners(&self) -> [Point2<i32>; 4] {
        [
            Point2::new(self.x, self.y),
            Point2::new(self.right(), self.y),
            Point2::new(self.right(), self.bottom()),
            Point2::new(self.x, self.bottom()),
        ]
    }
}

/// One polygon produced by approximating a traced contour.
///
/// Candidates are created once per frame by the image-processing stage and
/// are never mutated by the selection passes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CandidatePolygon {
    /// Bounding box of the approximated polygon.
    pub bbox: BoundingBox,
    /// Polygon vertices in image pixels.
    pub vertices: Vec<Point2<i32>>,
    pub convex: bool,
    pub area: f32,
    /// `height / width` of the source contour's bounding box.
    pub aspect_ratio: f32,
}

impl CandidatePolygon {
    /// Build a candidate from approximated vertices.
    ///
    /// `contour` is the bounding box of the traced contour the polygon was
    /// approximated from; the aspect ratio gate uses it rather than the
    /// polygon box. When absent the polygon box is used.
    pub fn from_vertices(vertices: Vec<Point2<i32>>, contour: Option<BoundingBox>) -> Self {
        let bbox = BoundingBox::from_points(&vertices);
        let aspect_ratio = contour.unwrap_or(bbox).aspect_ratio();
        Self {
            bbox,
            convex: is_convex(&vertices),
            area: shoelace_area(&vertices),
            vertices,
            aspect_ratio,
        }
    }

    /// Axis-aligned rectangular candidate covering `bbox`.
    pub fn rectangle(bbox: BoundingBox) -> Self {
        Self {
            bbox,
            vertices: bbox.corners().to_vec(),
            convex: true,
            area: (bbox.width as f32) * (bbox.height as f32),
            aspect_ratio: bbox.aspect_ratio(),
        }
    }

    /// Replace the area, e.g. with the value reported by the contour stage.
    pub fn with_area(mut self, area: f32) -> Self {
        self.area = area;
        self
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn center(&self) -> Point2<i32> {
        self.bbox.center()
    }
}

fn shoelace_area(vertices: &[Point2<i32>]) -> f32 {
    if vertices.len() < 3 {
        return 0.0;
    }
    let n = vertices.len();
    let twice: i64 = (0..n)
        .map(|i| {
            let a = vertices[i];
            let b = vertices[(i + 1) % n];
            a.x as i64 * b.y as i64 - b.x as i64 * a.y as i64
        })
        .sum();
    (twice.abs() as f32) * 0.5
}

fn is_convex(vertices: &[Point2<i32>]) -> bool {
    let n = vertices.len();
    if n < 3 {
        return false;
    }
    let mut sign = 0i64;
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        let c = vertices[(i + 2) % n];
        let cross = (b.x - a.x) as i64 * (c.y - b.y) as i64 - (b.y - a.y) as i64 * (c.x - b.x) as i64;
        if cross == 0 {
            continue;
        }
        if sign == 0 {
            sign = cross.signum();
        } else if cross.signum() != sign {
            return false;
        }
    }
    sign != 0
}
