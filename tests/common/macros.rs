/// Asserts that two floats differ by at most `eps`.
#[macro_export]
macro_rules! assert_close {
    ($left:expr, $right:expr, $eps:expr) => {
        let (left, right) = ($left as f32, $right as f32);
        assert!(
            (left - right).abs() <= $eps,
            "{} = {} is not within {} of {} = {}",
            stringify!($left),
            left,
            $eps,
            stringify!($right),
            right
        );
    };
}

/// Asserts that a vector is (nearly) unit length.
#[macro_export]
macro_rules! assert_unit {
    ($v:expr) => {
        let v: glam::Vec3 = $v;
        assert!(
            (v.length() - 1.0).abs() < 1e-4,
            "{} = {:?} is not a unit vector",
            stringify!($v),
            v
        );
    };
}
