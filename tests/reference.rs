//! Checks against reference values and against `nalgebra` as an
//! independent implementation.

use approx::assert_abs_diff_eq;
use impact_linalg::{
    Matrix3, Matrix4, NearlyEqual, Quaternion, UnitVector3, Vector3, deg, rad, random,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn to_nalgebra(m: &Matrix4<f64>) -> nalgebra::Matrix4<f64> {
    nalgebra::Matrix4::from_row_slice(m.as_elements())
}

#[test]
fn product_with_inverse_is_identity_for_many_random_matrices() {
    init_logging();
    let mut rng = random::seeded_rng(0xdecaf);
    let mut inverted = 0;

    for _ in 0..10_000 {
        let m = Matrix4::<f64>::random_in(&mut rng, 0.1, 100.0);
        if let Some(inverse) = m.inverse() {
            assert!(
                (m * inverse).is_nearly_equal_within(&Matrix4::identity(), 1e-6),
                "M * M^-1 is not identity for\n{m}"
            );
            inverted += 1;
        }
    }
    assert!(inverted > 9_900);
}

#[test]
fn determinant_and_inverse_match_nalgebra() {
    init_logging();
    let mut rng = random::seeded_rng(17);

    for _ in 0..500 {
        let m = Matrix4::<f64>::random_in(&mut rng, -10.0, 10.0);
        let reference = to_nalgebra(&m);

        let determinant = m.determinant();
        assert_abs_diff_eq!(
            determinant,
            reference.determinant(),
            epsilon = 1e-9 * determinant.abs().max(1.0)
        );

        match (m.inverse(), reference.try_inverse()) {
            (Some(inverse), Some(reference_inverse)) => {
                let scale = reference_inverse.amax().max(1.0);
                assert_abs_diff_eq!(
                    to_nalgebra(&inverse),
                    reference_inverse,
                    epsilon = 1e-8 * scale
                );
            }
            (None, _) => assert!(determinant.abs() <= 1e-6),
            (Some(_), None) => panic!("nalgebra failed to invert\n{m}"),
        }
    }
}

#[test]
fn reference_determinant_is_reproduced() {
    let m = Matrix4::from_elements([
        2.0, -1.0, 3.0, 0.0, -3.0, 1.0, 0.0, 4.0, -2.0, 1.0, 4.0, 1.0, -1.0, 3.0, 0.0, -2.0,
    ]);
    assert_abs_diff_eq!(m.determinant(), -102.0_f64, epsilon = 1e-9);
    assert_abs_diff_eq!(to_nalgebra(&m).determinant(), -102.0, epsilon = 1e-9);
}

#[test]
fn rotations_match_nalgebra() {
    let mut rng = random::seeded_rng(23);

    for _ in 0..500 {
        let axis = UnitVector3::<f64>::random(&mut rng);
        let angle = random::random_range(&mut rng, -6.0, 6.0);
        let q = Quaternion::from_axis_angle(&axis, rad(angle));

        let reference = nalgebra::UnitQuaternion::from_axis_angle(
            &nalgebra::Unit::new_normalize(nalgebra::Vector3::new(axis[0], axis[1], axis[2])),
            angle,
        );
        assert_abs_diff_eq!(q.x(), reference.i, epsilon = 1e-12);
        assert_abs_diff_eq!(q.y(), reference.j, epsilon = 1e-12);
        assert_abs_diff_eq!(q.z(), reference.k, epsilon = 1e-12);
        assert_abs_diff_eq!(q.w(), reference.w, epsilon = 1e-12);

        let v = Vector3::random_in(&mut rng, -10.0, 10.0);
        let rotated = q.rotate_vector(&v);
        let reference_rotated = reference * nalgebra::Vector3::new(v[0], v[1], v[2]);
        assert_abs_diff_eq!(rotated[0], reference_rotated.x, epsilon = 1e-9);
        assert_abs_diff_eq!(rotated[1], reference_rotated.y, epsilon = 1e-9);
        assert_abs_diff_eq!(rotated[2], reference_rotated.z, epsilon = 1e-9);

        // Row-vector convention gives the transpose of nalgebra's matrix.
        let m = Matrix3::rotation(&q);
        let reference_m = reference.to_rotation_matrix().into_inner().transpose();
        for i in 0..3 {
            for j in 0..3 {
                assert_abs_diff_eq!(m.element(i, j), reference_m[(i, j)], epsilon = 1e-12);
            }
        }
    }
}

#[test]
fn look_at_matches_nalgebra_left_handed_view() {
    let eye = Vector3::new(3.0_f64, -2.0, 5.0);
    let target = Vector3::new(-1.0, 4.0, 0.5);
    let up = Vector3::up();
    let view = Matrix4::look_at(&eye, &target, &up).unwrap();

    let reference = nalgebra::Matrix4::look_at_lh(
        &nalgebra::Point3::new(eye[0], eye[1], eye[2]),
        &nalgebra::Point3::new(target[0], target[1], target[2]),
        &nalgebra::Vector3::new(up[0], up[1], up[2]),
    );
    assert_abs_diff_eq!(to_nalgebra(&view).transpose(), reference, epsilon = 1e-12);
}

#[test]
fn reference_rotations_are_reproduced() {
    let axis = Vector3::new(0.369242_f64, -0.596525, -0.712614)
        .unit()
        .unwrap();
    let q = Quaternion::from_axis_angle(&axis, rad(0.622533));
    assert_abs_diff_eq!(q.x(), 0.1130857, epsilon = 1e-5);
    assert_abs_diff_eq!(q.y(), -0.1826944, epsilon = 1e-5);
    assert_abs_diff_eq!(q.z(), -0.2182483, epsilon = 1e-5);
    assert_abs_diff_eq!(q.w(), 0.9519464, epsilon = 1e-5);

    let about_right = Quaternion::from_axis_angle(&UnitVector3::right(), deg(90.0_f32));
    assert!(
        UnitVector3::forward()
            .rotated_by(&about_right)
            .is_nearly_equal(&UnitVector3::down())
    );
}
