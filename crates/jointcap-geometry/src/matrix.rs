use glam::{DMat3, DMat4};

/// Convert a 3x3 matrix into nested rows.
///
/// glam stores matrices column-major; the result is indexed as `rows[row][col]`.
pub fn mat3_to_rows(m: &DMat3) -> [[f64; 3]; 3] {
    [0, 1, 2].map(|i| m.row(i).to_array().map(positive_zero))
}

/// Convert a 4x4 matrix into nested rows, indexed as `rows[row][col]`.
pub fn mat4_to_rows(m: &DMat4) -> [[f64; 4]; 4] {
    [0, 1, 2, 3].map(|i| m.row(i).to_array().map(positive_zero))
}

/// Collapse `-0.0` into `0.0` so exported values never print as a negative zero.
#[inline]
pub fn positive_zero(v: f64) -> f64 {
    v + 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{DVec3, DVec4};

    #[test]
    fn test_mat3_rows_are_rows() {
        let m = DMat3::from_cols(
            DVec3::new(1.0, 4.0, 7.0),
            DVec3::new(2.0, 5.0, 8.0),
            DVec3::new(3.0, 6.0, 9.0),
        );
        let rows = mat3_to_rows(&m);
        assert_eq!(rows, [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
    }

    #[test]
    fn test_mat4_translation_in_last_column() {
        let m = DMat4::from_translation(DVec3::new(10.0, 20.0, 30.0));
        let rows = mat4_to_rows(&m);
        assert_eq!(rows[0][3], 10.0);
        assert_eq!(rows[1][3], 20.0);
        assert_eq!(rows[2][3], 30.0);
        assert_eq!(rows[3], DVec4::new(0.0, 0.0, 0.0, 1.0).to_array());
    }

    #[test]
    fn test_negative_zero_is_collapsed() {
        let m = DMat3::from_diagonal(DVec3::new(-0.0, 1.0, 1.0));
        let rows = mat3_to_rows(&m);
        assert!(rows[0][0].is_sign_positive());
        assert_eq!(format!("{:.6}", rows[0][0]), "0.000000");
    }
}
