use nalgebra::Vector2;

/// Dot product of two displacement vectors.
#[inline]
pub fn dot(u: Vector2<f64>, v: Vector2<f64>) -> f64 {
    u.x * v.x + u.y * v.y
}

/// Signed area of the parallelogram spanned by `u` and `v` (2D cross product).
/// Positive for u→v counterclockwise, negative otherwise.
#[inline]
pub fn cross(u: Vector2<f64>, v: Vector2<f64>) -> f64 {
    u.x * v.y - u.y * v.x
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{vector, Matrix2};
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn cross_axis_aligned() {
        let u = vector![1.0, 0.0];
        let v = vector![0.0, 2.5];
        assert!((cross(u, v) - 2.5).abs() < 1e-12);
        assert!((cross(v, u) + 2.5).abs() < 1e-12);
        assert_eq!(dot(u, v), 0.0);
    }

    #[test]
    fn cross_and_dot_randomized_seeded() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..64 {
            let u = Vector2::new(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0));
            let v = Vector2::new(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0));
            // cross equals det [u v]
            let det = Matrix2::from_columns(&[u, v]).determinant();
            assert!((cross(u, v) - det).abs() < 1e-12);
            assert!((dot(u, v) - u.dot(&v)).abs() < 1e-12);
        }
    }
}
