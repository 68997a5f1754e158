use approx::assert_abs_diff_eq;
use geometry_core::tolerance;
use geometry_core::{
    Angle, Convertor2, Convertor3, GeometryError, Matrix2x2, Matrix3x3, Rotation3, Vector2,
    Vector3,
};

#[test]
fn test_angle_degree_round_trip() {
    for i in -72..=72 {
        let degrees = i as f64 * 10.0 + 0.25;
        let angle = Angle::from_degrees(degrees);
        assert_abs_diff_eq!(angle.degrees(), degrees, epsilon = 1e-12);

        let radians = Angle::degrees_to_radians(degrees);
        assert_abs_diff_eq!(Angle::radians_to_degrees(radians), degrees, epsilon = 1e-12);
    }
}

#[test]
fn test_angle_gradian_round_trip() {
    for gradians in [-400.0, -100.0, 0.0, 50.0, 133.5, 400.0] {
        let angle = Angle::from_gradians(gradians);
        assert_abs_diff_eq!(angle.gradians(), gradians, epsilon = 1e-12);
        assert_abs_diff_eq!(
            Angle::gradians_to_degrees(gradians),
            gradians * 0.9,
            epsilon = 1e-12
        );
    }
}

#[test]
fn test_normalized_vectors_have_unit_module() {
    let samples2 = [
        (3.0, 4.0),
        (-1e-6, 2e-6),
        (1e8, -3e8),
        (0.5, 0.0),
        (1e200, 1e200),
    ];
    for (x, y) in samples2 {
        let mut v = Vector2::new(x, y);
        assert!(v.normalize());
        assert_abs_diff_eq!(v.module(), 1.0, epsilon = 1e-9);
    }

    let samples3 = [
        (1.0, 2.0, 2.0),
        (-7.0, 0.1, 1e3),
        (0.0, 0.0, -2.5),
        (1e160, 0.0, 0.0),
        (-3e200, 4e200, 1e199),
    ];
    for (x, y, z) in samples3 {
        let v = Vector3::new(x, y, z).normalized();
        assert_abs_diff_eq!(v.module(), 1.0, epsilon = 1e-9);
    }
}

#[test]
fn test_normalizing_zero_fails_and_stays_zero() {
    let mut v2 = Vector2::zero();
    assert!(!v2.normalize());
    assert!(v2.is_zero());

    let mut v3 = Vector3::new(1e-16, 0.0, -1e-16);
    assert!(!v3.normalize());
    assert_eq!(v3.to_array(), [0.0, 0.0, 0.0]);
}

#[test]
fn test_identity_is_neutral_for_products() {
    let m2 = Matrix2x2::new(1.5, -2.0, 0.25, 8.0);
    assert_eq!(m2.multiply_by_matrix(&Matrix2x2::identity()), m2);
    assert_eq!(Matrix2x2::identity().multiply_by_matrix(&m2), m2);

    let m3 = Matrix3x3::new(1.0, 2.0, 3.0, -4.0, 5.0, -6.0, 0.5, 0.0, 9.0);
    assert_eq!(m3.multiply_by_matrix(&Matrix3x3::identity()), m3);
    assert_eq!(Matrix3x3::identity().multiply_by_matrix(&m3), m3);
}

#[test]
fn test_diagonal_matrix_scales_components() {
    let diag = Matrix2x2::new(2.0, 0.0, 0.0, 3.0);
    let v = diag.multiply_by_vector(&Vector2::new(1.0, 1.0));
    assert_eq!(v.to_array(), [2.0, 3.0]);

    let diag3 = Matrix3x3::new(2.0, 0.0, 0.0, 0.0, 3.0, 0.0, 0.0, 0.0, 4.0);
    let v3 = diag3.multiply_by_vector(&Vector3::new(1.0, 1.0, 1.0));
    assert_eq!(v3.to_array(), [2.0, 3.0, 4.0]);
}

#[test]
fn test_determinants_of_identity_and_zero() {
    assert_eq!(Matrix2x2::identity().determinant(), 1.0);
    assert_eq!(Matrix2x2::zero().determinant(), 0.0);
    assert_eq!(Matrix3x3::identity().determinant(), 1.0);
    assert_eq!(Matrix3x3::zero().determinant(), 0.0);
}

#[test]
fn test_determinant_is_multiplicative() {
    let a = Matrix3x3::new(2.0, 1.0, 0.0, 0.0, 1.0, 3.0, 1.0, 0.0, 1.0);
    let b = Matrix3x3::new(1.0, 0.0, 2.0, 1.0, 1.0, 0.0, 0.0, 4.0, 1.0);
    let ab = a.multiply_by_matrix(&b);
    assert_abs_diff_eq!(
        ab.determinant(),
        a.determinant() * b.determinant(),
        epsilon = 1e-9
    );
}

#[test]
fn test_convertor_translates() {
    let mut c2 = Convertor2::identity();
    c2.shift_mut().set_values(5.0, 5.0);
    assert_eq!(c2.convert_vector(&Vector2::new(1.0, 1.0)).to_array(), [6.0, 6.0]);

    let c3 = Convertor3::new(Matrix3x3::identity(), Vector3::new(5.0, 5.0, 5.0));
    assert_eq!(
        c3.convert_vector(&Vector3::new(1.0, 1.0, 1.0)).to_array(),
        [6.0, 6.0, 6.0]
    );
}

#[test]
fn test_copy_forms_match_in_place_forms() {
    let a = Vector3::new(1.0, -2.0, 0.5);
    let b = Vector3::new(4.0, 0.0, -3.0);

    let copied = a.add(&b);
    let mut assigned = a;
    assigned.add_in_place(&b);
    assert_eq!(copied, assigned);
    assert_eq!(a.to_array(), [1.0, -2.0, 0.5]);

    let crossed = a.vector_multiply(&b);
    let mut assigned = a;
    assigned.vector_multiply_in_place(&b);
    assert_eq!(crossed, assigned);

    let reverted = a.reverted();
    let mut assigned = a;
    assigned.revert();
    assert_eq!(reverted, assigned);

    let m = Matrix2x2::new(1.0, 2.0, 3.0, 4.0);
    let n = Matrix2x2::new(0.0, 1.0, 1.0, 0.0);
    let product = m.multiply_by_matrix(&n);
    let mut assigned = m;
    assigned.multiply_by_matrix_in_place(&n);
    assert_eq!(product, assigned);
    assert_eq!(m, Matrix2x2::new(1.0, 2.0, 3.0, 4.0));

    let angle = Angle::from_degrees(10.0);
    let doubled = angle.multiply(2.0);
    let mut assigned = angle;
    assigned.multiply_in_place(2.0);
    assert_eq!(doubled, assigned);
    assert_abs_diff_eq!(angle.degrees(), 10.0, epsilon = 1e-12);
}

#[test]
fn test_cross_product_is_orthogonal() {
    let a = Vector3::new(0.3, -1.2, 2.0);
    let b = Vector3::new(-4.0, 0.5, 1.5);
    let c = a.vector_multiply(&b);
    assert_abs_diff_eq!(c.scalar(&a), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(c.scalar(&b), 0.0, epsilon = 1e-12);
}

#[test]
fn test_invalid_indices_are_rejected() {
    let m2 = Matrix2x2::identity();
    assert!(matches!(
        m2.get_item(0, 1),
        Err(GeometryError::InvalidIndex { row: 0, col: 1, size: 2, .. })
    ));
    assert!(matches!(
        m2.get_item(3, 1),
        Err(GeometryError::InvalidIndex { row: 3, .. })
    ));

    let mut m3 = Matrix3x3::identity();
    assert!(matches!(
        m3.set_item(4, 1, 7.0),
        Err(GeometryError::InvalidIndex { row: 4, size: 3, .. })
    ));
    assert!(m3.get_item(1, 0).is_err());
    assert_eq!(m3, Matrix3x3::identity());
}

#[test]
fn test_division_by_zero_results_compare_equal_to_themselves() {
    let v2 = Vector2::new(1.0, -1.0).divide(0.0);
    assert_eq!(v2, v2);

    let v3 = Vector3::new(2.0, 5.0, -3.0).divide(0.0);
    assert_eq!(
        v3,
        Vector3::new(f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY)
    );

    // 0 / 0 cells are NaN, which never compare equal
    let m = Matrix2x2::identity().divide(0.0);
    assert_eq!(m.get_item(1, 1).unwrap(), f64::INFINITY);
    assert!(m.get_item(1, 2).unwrap().is_nan());
    assert_ne!(m, m);
}

#[test]
fn test_tolerance_predicates() {
    assert!(tolerance::is_zero(0.0));
    assert!(tolerance::is_zero(tolerance::POSITIVE_SQUARE_EPSILON));
    assert!(!tolerance::is_zero(1e-20));
    assert!(tolerance::is_unit(1.0));
    assert!(!tolerance::are_equal(f64::NAN, f64::NAN));
    assert!(Vector3::z_axis().is_unit());
}

#[test]
fn test_rotation_holds_axis_and_angle() {
    let mut r = Rotation3::new(Vector3::y_axis(), Angle::PI);
    r.angle_mut().revert();
    assert_eq!(r.axis(), &Vector3::y_axis());
    assert_eq!(r.angle().radians(), -std::f64::consts::PI);
}
