use crate::icosahedron::Point;

// Fraction of each vertex's distance from the centroid that survives a shrink.
pub const SHRINK_FACTOR: f64 = 0.9;

pub fn centroid(v1: &Point, v2: &Point, v3: &Point) -> Point {
    (v1 + v2 + v3) / 3.
}

// Moves a single vertex toward `c`, keeping `factor` of its distance.
pub fn shrink_toward(v: &Point, c: &Point, factor: f64) -> Point {
    c + (v - c) * factor
}

// Shrinks a triangle uniformly toward its centroid. Vertex order is preserved,
// and the result does not depend on which order the vertices come in.
pub fn scale_by(v1: &Point, v2: &Point, v3: &Point, factor: f64) -> (Point, Point, Point) {
    let c = centroid(v1, v2, v3);
    (
        shrink_toward(v1, &c, factor),
        shrink_toward(v2, &c, factor),
        shrink_toward(v3, &c, factor),
    )
}

pub fn scale(v1: &Point, v2: &Point, v3: &Point) -> (Point, Point, Point) {
    scale_by(v1, v2, v3, SHRINK_FACTOR)
}

// Linear interpolation from p1 (t = 0) to p2 (t = 1); extrapolates outside [0, 1].
// p1 + t(p2 - p1) can be off by an ulp at t = 1, so that endpoint is returned as is.
pub fn lerp(p1: &Point, p2: &Point, t: f64) -> Point {
    if t == 1. {
        return *p2;
    }
    p1 + (p2 - p1) * t
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point {
        Point::new(x, y, z)
    }

    #[test]
    fn centroid_of_triangle() {
        let c = centroid(&p(0., 0., 0.), &p(3., 0., 0.), &p(0., 6., 9.));
        assert_eq!(c, p(1., 2., 3.));
    }

    #[test]
    fn scale_moves_vertices_ten_percent_inward() {
        let (a, b, c) = scale(&p(3., 0., 0.), &p(-3., 0., 0.), &p(0., 9., 0.));
        // centroid is (0, 3, 0)
        assert_relative_eq!(a, p(2.7, 0.3, 0.), epsilon = 1e-12);
        assert_relative_eq!(b, p(-2.7, 0.3, 0.), epsilon = 1e-12);
        assert_relative_eq!(c, p(0., 8.4, 0.), epsilon = 1e-12);
    }

    #[test]
    fn scale_is_symmetric_in_vertex_order() {
        let v1 = p(1., 5., -2.);
        let v2 = p(-4., 0.5, 3.);
        let v3 = p(7., -1., 0.25);
        let (a, b, c) = scale(&v1, &v2, &v3);
        let (c2, a2, b2) = scale(&v3, &v1, &v2);
        assert_relative_eq!(a, a2, epsilon = 1e-12);
        assert_relative_eq!(b, b2, epsilon = 1e-12);
        assert_relative_eq!(c, c2, epsilon = 1e-12);
    }

    #[test]
    fn degenerate_triangle_is_unchanged() {
        let v = p(-102.337, 267.923, -177.254);
        let (a, b, c) = scale(&v, &v, &v);
        assert_relative_eq!(a, v, epsilon = 1e-12);
        assert_relative_eq!(b, v, epsilon = 1e-12);
        assert_relative_eq!(c, v, epsilon = 1e-12);
    }

    #[test]
    fn scale_by_one_is_identity() {
        let v1 = p(1., 2., 3.);
        let v2 = p(4., 5., 6.);
        let v3 = p(-7., 8., 0.);
        let (a, b, c) = scale_by(&v1, &v2, &v3, 1.);
        assert_relative_eq!(a, v1, epsilon = 1e-12);
        assert_relative_eq!(b, v2, epsilon = 1e-12);
        assert_relative_eq!(c, v3, epsilon = 1e-12);
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = p(0.1, -0.7, 3.3);
        let b = p(9.9, 2.2, -1.1);
        assert_eq!(lerp(&a, &b, 0.), a);
        assert_eq!(lerp(&a, &b, 1.), b);
        assert_relative_eq!(lerp(&a, &b, 0.5), p(5., 0.75, 1.1), epsilon = 1e-12);
    }

    #[test]
    fn lerp_extrapolates() {
        let a = p(0., 0., 0.);
        let b = p(1., 2., 4.);
        assert_relative_eq!(lerp(&a, &b, 2.), p(2., 4., 8.), epsilon = 1e-12);
        assert_relative_eq!(lerp(&a, &b, -1.), p(-1., -2., -4.), epsilon = 1e-12);
    }
}
