use nalgebra::Vector2;

pub trait Coords2D {
    fn x(&self) -> f64;
    fn y(&self) -> f64;

    fn as_vec(&self) -> Vector2<f64> {
        Vector2::new(self.x(), self.y())
    }
}

/// Euclidean distance in the plane.
pub fn distance(c0: &impl Coords2D, c1: &impl Coords2D) -> f64 {
    (c0.as_vec() - c1.as_vec()).norm()
}

#[cfg(test)]
mod tests {
    use super::distance;
    use crate::dto::Point;

    #[test]
    fn test_distance_is_symmetric() {
        let pairs = [
            (Point::new(0.0, 0.0), Point::new(3.0, 4.0)),
            (Point::new(-2.0, 7.0), Point::new(5.0, -1.0)),
            (Point::new(1.5, 1.5), Point::new(1.5, -8.25)),
        ];
        for (a, b) in pairs {
            assert_eq!(distance(&a, &b), distance(&b, &a));
        }
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let p = Point::new(12.0, -3.0);
        assert_eq!(distance(&p, &p), 0.0);
    }

    #[test]
    fn test_distance_values() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((distance(&a, &b) - 5.0).abs() < 1e-12);
        assert!(distance(&a, &Point::new(0.0, 1e-9)) > 0.0);
    }
}
