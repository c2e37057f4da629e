//! Bounding shapes for point sets.

use super::point::Point2D;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Aabb {
    /// Lower-left corner
    pub min: Point2D,
    /// Upper-right corner
    pub max: Point2D,
}

/// A circle given by center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Circle {
    /// Center of the circle
    pub center: Point2D,
    /// Radius of the circle
    pub radius: f64,
}

/// Smallest axis-aligned box containing every point.
///
/// Returns the degenerate box at the origin for an empty slice.
#[must_use]
pub fn bounding_box(points: &[Point2D]) -> Aabb {
    let Some(&first) = points.first() else {
        return Aabb::default();
    };
    points.iter().skip(1).fold(
        Aabb {
            min: first,
            max: first,
        },
        |bounds, p| Aabb {
            min: Point2D::new(bounds.min.x.min(p.x), bounds.min.y.min(p.y)),
            max: Point2D::new(bounds.max.x.max(p.x), bounds.max.y.max(p.y)),
        },
    )
}

/// Circle circumscribing the box.
#[must_use]
pub fn bounding_circle(bounds: &Aabb) -> Circle {
    let center = Point2D::new(
        0.5 * (bounds.min.x + bounds.max.x),
        0.5 * (bounds.min.y + bounds.max.y),
    );
    let half = Point2D::new(
        0.5 * (bounds.max.x - bounds.min.x),
        0.5 * (bounds.max.y - bounds.min.y),
    );
    Circle {
        center,
        radius: half.norm_squared().sqrt(),
    }
}

/// Equilateral triangle, counterclockwise, whose incircle has `scale` times
/// the radius of `circle` and the same center.
///
/// A zero radius is widened to 1 so coincident inputs still get a proper
/// enclosing triangle.
#[must_use]
pub fn bounding_triangle(circle: &Circle, scale: f64) -> [Point2D; 3] {
    let radius = if circle.radius > 0.0 {
        circle.radius
    } else {
        1.0
    };
    let sqrt3 = 3.0_f64.sqrt();
    // Unit-side triangle centered on its incenter; inradius is sqrt(3) / 6.
    let unit = [
        Point2D::new(-0.5, -sqrt3 / 6.0),
        Point2D::new(0.5, -sqrt3 / 6.0),
        Point2D::new(0.0, sqrt3 / 3.0),
    ];
    let k = 2.0 * sqrt3 * radius * scale;
    unit.map(|p| Point2D::new(k * p.x + circle.center.x, k * p.y + circle.center.y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::predicates::orientation;
    use approx::assert_relative_eq;

    #[test]
    fn test_bounding_box() {
        let points = [
            Point2D::new(1.0, -2.0),
            Point2D::new(-3.0, 4.0),
            Point2D::new(0.0, 0.0),
        ];
        let bounds = bounding_box(&points);
        assert_eq!(bounds.min, Point2D::new(-3.0, -2.0));
        assert_eq!(bounds.max, Point2D::new(1.0, 4.0));
        assert_eq!(bounding_box(&[]), Aabb::default());
    }

    #[test]
    fn test_bounding_circle() {
        let bounds = Aabb {
            min: Point2D::new(0.0, 0.0),
            max: Point2D::new(6.0, 8.0),
        };
        let circle = bounding_circle(&bounds);
        assert_eq!(circle.center, Point2D::new(3.0, 4.0));
        assert_relative_eq!(circle.radius, 5.0);
    }

    #[test]
    fn test_bounding_triangle_encloses_circle() {
        let circle = Circle {
            center: Point2D::new(1.0, 1.0),
            radius: 2.0,
        };
        let [a, b, c] = bounding_triangle(&circle, 1.0);
        assert!(orientation(a, b, c));

        // Distance from the center to every side equals the scaled radius.
        for (p, q) in [(a, b), (b, c), (c, a)] {
            let side = q - p;
            let distance = side.cross(circle.center - p) / side.norm_squared().sqrt();
            assert_relative_eq!(distance, 2.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_bounding_triangle_zero_radius() {
        let circle = Circle {
            center: Point2D::new(5.0, 5.0),
            radius: 0.0,
        };
        let [a, b, c] = bounding_triangle(&circle, 10.0);
        assert!(orientation(a, b, c));
        assert!(orientation(a, b, circle.center));
    }
}
