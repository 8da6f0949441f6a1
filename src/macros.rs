//! Utility macros.

/// Asserts that two values are equal within a tolerance, using
/// [`NearlyEqual`](crate::tolerance::NearlyEqual).
///
/// The tolerance defaults to the value's
/// [`default_tolerance`](crate::tolerance::NearlyEqual::default_tolerance) and
/// can be overridden with `tolerance = ...`.
#[macro_export]
macro_rules! assert_nearly_equal {
    ($left:expr, $right:expr $(,)?) => {{
        let (left, right) = (&$left, &$right);
        if !$crate::tolerance::NearlyEqual::is_nearly_equal(left, right) {
            panic!(
                "assertion `left ≈ right` failed\n  left: {:?}\n right: {:?}",
                left, right
            );
        }
    }};
    ($left:expr, $right:expr, tolerance = $tolerance:expr $(,)?) => {{
        let (left, right) = (&$left, &$right);
        if !$crate::tolerance::NearlyEqual::is_nearly_equal_within(left, right, $tolerance) {
            panic!(
                "assertion `left ≈ right` failed (tolerance = {:?})\n  left: {:?}\n right: {:?}",
                $tolerance, left, right
            );
        }
    }};
}

macro_rules! impl_binop {
    (
        $op:ident, $method:ident, [$($generics:tt)*],
        $tl:ty, $tr:ty, $to:ty,
        |$lhs:ident, $rhs:ident| $body:block
    ) => {
        impl<'a, $($generics)*> ::std::ops::$op<&'a $tr> for &'a $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl<$($generics)*> ::std::ops::$op<$tr> for &$tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                self.$method(&rhs)
            }
        }

        impl<'a, $($generics)*> ::std::ops::$op<&'a $tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                (&self).$method(rhs)
            }
        }

        impl<$($generics)*> ::std::ops::$op<$tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                (&self).$method(&rhs)
            }
        }
    };
}

macro_rules! impl_unary_op {
    (
        $op:ident, $method:ident, [$($generics:tt)*],
        $t:ty, $to:ty,
        |$this:ident| $body:block
    ) => {
        impl<$($generics)*> ::std::ops::$op for &$t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                let $this = self;
                $body
            }
        }

        impl<$($generics)*> ::std::ops::$op for $t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                (&self).$method()
            }
        }
    };
}

macro_rules! impl_binop_assign {
    (
        $op:ident, $method:ident, [$($generics:tt)*],
        $tl:ty, $tr:ty,
        |$lhs:ident, $rhs:ident| $body:block
    ) => {
        impl<$($generics)*> ::std::ops::$op<&$tr> for $tl {
            #[inline]
            fn $method(&mut self, rhs: &$tr) {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl<$($generics)*> ::std::ops::$op<$tr> for $tl {
            #[inline]
            fn $method(&mut self, rhs: $tr) {
                self.$method(&rhs);
            }
        }
    };
}

/// Implements `scalar * value` for each listed primitive scalar type,
/// delegating to `value * scalar`. A blanket impl over the scalar type is
/// ruled out by the orphan rules.
macro_rules! impl_left_scalar_mul {
    ([$($generics:tt)*], $t:ident<_ $(, $rest:ident)*>, []) => {};
    ([$($generics:tt)*], $t:ident<_ $(, $rest:ident)*>, [$scalar:ty $(, $others:ty)*]) => {
        impl_binop!(Mul, mul, [$($generics)*], $scalar, $t<$scalar $(, $rest)*>, $t<$scalar $(, $rest)*>, |a, b| {
            b * *a
        });
        impl_left_scalar_mul!([$($generics)*], $t<_ $(, $rest)*>, [$($others),*]);
    };
}

macro_rules! impl_nearly_equal {
    ([$($generics:tt)*], $t:ty, $tol:ty, |$arg1:ident, $arg2:ident, $arg3:ident| $body:block) => {
        impl<$($generics)*> $crate::tolerance::NearlyEqual for $t {
            type Tolerance = $tol;

            #[inline]
            fn default_tolerance() -> Self::Tolerance {
                <$tol as $crate::num::Float>::SMALL_NUMBER
            }

            #[inline]
            fn is_nearly_equal_within(&self, other: &Self, tolerance: Self::Tolerance) -> bool {
                let $arg1 = self;
                let $arg2 = other;
                let $arg3 = tolerance;
                $body
            }
        }
    };
}

macro_rules! impl_abs_diff_eq {
    ([$($generics:tt)*], $t:ty, $rhs:ty, |$arg1:ident, $arg2:ident, $arg3:ident| $body:block) => {
        impl<$($generics)*> ::approx::AbsDiffEq<$rhs> for $t {
            type Epsilon = T;

            fn default_epsilon() -> Self::Epsilon {
                <T as ::approx::AbsDiffEq>::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &$rhs, epsilon: Self::Epsilon) -> bool {
                let $arg1 = self;
                let $arg2 = other;
                let $arg3 = epsilon;
                $body
            }
        }
    };
}

macro_rules! impl_relative_eq {
    ([$($generics:tt)*], $t:ty, $rhs:ty, |$arg1:ident, $arg2:ident, $arg3:ident, $arg4:ident| $body:block) => {
        impl<$($generics)*> ::approx::RelativeEq<$rhs> for $t {
            fn default_max_relative() -> Self::Epsilon {
                <T as ::approx::RelativeEq>::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &$rhs,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                let $arg1 = self;
                let $arg2 = other;
                let $arg3 = epsilon;
                let $arg4 = max_relative;
                $body
            }
        }
    };
}
