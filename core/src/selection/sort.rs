use crate::geometry::Point;

/// Sorts sensors by ascending x. The sort is stable, so sensors sharing an
/// x coordinate keep their input order.
pub fn sort_by_x(points: &mut [Point]) {
    points.sort_by(|p, q| p.cmp_x(q));
}
