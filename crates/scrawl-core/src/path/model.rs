use glam::Vec2;

/// Result of a point-to-path proximity query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityResult {
    /// Arc-length position of the closest point, measured from the path start.
    pub accumulated_distance: f32,
    /// Distance from the sample to the closest point on the path.
    pub perpendicular_distance: f32,
    /// Whether the sample is within the path's tolerance.
    pub is_on_path: bool,
}

/// A stroke's guide path: an ordered polyline with a precomputed
/// cumulative arc-length table.
///
/// Built once from authored points and immutable afterwards. A path with
/// fewer than 2 points is degenerate: zero length, every query reports
/// off-path, and progress is always 0.
pub struct PathModel {
    /// Guide points in world coordinates.
    points: Vec<Vec2>,
    /// cum_len[i] = arc length from points[0] to points[i]. Empty when degenerate.
    cum_len: Vec<f32>,
    /// Max perpendicular distance for a sample to count as on-path (world units).
    tolerance: f32,
}

impl PathModel {
    /// Build a path from authored points.
    ///
    /// - `points`: Guide points in world coordinates (tens, not thousands)
    /// - `tolerance`: Max distance from the path in world units (~30-40 for touchscreen)
    pub fn new(points: Vec<Vec2>, tolerance: f32) -> Self {
        let cum_len = if points.len() < 2 {
            Vec::new()
        } else {
            let mut table = Vec::with_capacity(points.len());
            table.push(0.0);
            for i in 1..points.len() {
                let prev = table[i - 1];
                table.push(prev + points[i - 1].distance(points[i]));
            }
            table
        };
        Self {
            points,
            cum_len,
            tolerance,
        }
    }

    /// Whether this path has too few points to be traced.
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 2
    }

    /// The first guide point, or the zero vector for an empty path.
    pub fn start_point(&self) -> Vec2 {
        self.points.first().copied().unwrap_or(Vec2::ZERO)
    }

    /// Total arc length of the path. 0 for a degenerate path.
    pub fn total_length(&self) -> f32 {
        self.cum_len.last().copied().unwrap_or(0.0)
    }

    /// The path's on-path tolerance in world units.
    pub fn tolerance(&self) -> f32 {
        self.tolerance
    }

    /// The guide points.
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Closest point to `p` on the segment from `a` to `b`, with the
    /// segment parameter `t` clamped to [0, 1]. A degenerate segment
    /// (`a == b`) yields `(a, 0.0)`.
    pub fn closest_point_on_segment(a: Vec2, b: Vec2, p: Vec2) -> (Vec2, f32) {
        let ab = b - a;
        let len_sq = ab.length_squared();
        if len_sq <= f32::EPSILON {
            return (a, 0.0);
        }
        let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
        (a + ab * t, t)
    }

    /// Find the nearest point on the path to `sample`.
    ///
    /// Scans every segment and keeps the strictly nearest one, so ties
    /// between equidistant segments resolve to the lowest segment index.
    /// The accumulated distance is the arc length from the path start to
    /// the projection on the winning segment.
    pub fn query_proximity(&self, sample: Vec2) -> ProximityResult {
        if self.is_degenerate() {
            return ProximityResult {
                accumulated_distance: 0.0,
                perpendicular_distance: f32::INFINITY,
                is_on_path: false,
            };
        }

        let mut best_dist = f32::INFINITY;
        let mut best_seg = 0;
        let mut best_proj = self.points[0];
        for i in 0..self.points.len() - 1 {
            let (proj, _t) =
                Self::closest_point_on_segment(self.points[i], self.points[i + 1], sample);
            let dist = sample.distance(proj);
            if dist < best_dist {
                best_dist = dist;
                best_seg = i;
                best_proj = proj;
            }
        }

        ProximityResult {
            accumulated_distance: self.cum_len[best_seg] + self.points[best_seg].distance(best_proj),
            perpendicular_distance: best_dist,
            is_on_path: best_dist <= self.tolerance,
        }
    }

    /// Fraction of the path covered by an accumulated-distance value,
    /// clamped to [0, 1]. 0 for a ~zero-length path.
    pub fn progress_ratio(&self, max_progress: f32) -> f32 {
        let total = self.total_length();
        if total <= f32::EPSILON {
            return 0.0;
        }
        (max_progress / total).clamp(0.0, 1.0)
    }
}
