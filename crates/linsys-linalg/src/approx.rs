//! Approximate equality.
//!
//! Row reduction and projections divide by values that are not powers of ten, so even exact
//! decimal arithmetic has to round somewhere. Comparisons of computed results therefore go
//! through [`ApproxEq`] rather than [`PartialEq`].

mod impls;

use std::{fmt, panic::Location};

/// Comparison of two values up to a tolerance.
///
/// Composite values (slices, vectors) match when every pair of elements matches.
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// Scalar in which both kinds of tolerance are expressed.
    type Tolerance: DefaultTolerances + Copy;

    /// Whether `|self - other| <= abs_tolerance`.
    fn abs_diff_eq(&self, other: &Rhs, abs_tolerance: Self::Tolerance) -> bool;

    /// Whether `|self - other| <= max(|self|, |other|) * rel_tolerance`.
    fn rel_diff_eq(&self, other: &Rhs, rel_tolerance: Self::Tolerance) -> bool;
}

/// Tolerances used by [`assert_approx_eq!`][crate::assert_approx_eq] and
/// [`assert_approx_ne!`][crate::assert_approx_ne] when the caller picks none.
pub trait DefaultTolerances {
    const DEFAULT_ABS_TOLERANCE: Self;
    const DEFAULT_REL_TOLERANCE: Self;
}

impl DefaultTolerances for rust_decimal::Decimal {
    const DEFAULT_ABS_TOLERANCE: Self = crate::NEAR_ZERO;
    const DEFAULT_REL_TOLERANCE: Self = crate::NEAR_ZERO;
}

/// The f64 tolerances are used when checking results against floating-point reference solvers.
impl DefaultTolerances for f64 {
    const DEFAULT_ABS_TOLERANCE: Self = f64::EPSILON;
    const DEFAULT_REL_TOLERANCE: Self = f64::EPSILON;
}

/// Pending approximate assertion, created by [`assert_approx_eq!`][crate::assert_approx_eq] and
/// [`assert_approx_ne!`][crate::assert_approx_ne].
///
/// Nothing is checked until the value goes out of scope at the end of the statement, which
/// leaves room to pick tolerances first:
///
/// ```
/// # use linsys_linalg::*;
/// assert_approx_eq!(Decimal::new(1001, 3), Decimal::ONE).abs(Decimal::new(1, 3));
/// ```
///
/// Picking both [`abs`][Self::abs] and [`rel`][Self::rel] accepts values that pass either
/// check. Picking neither uses the type's [`DefaultTolerances`] for both.
pub struct Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    left: &'a T,
    right: &'a T,
    expect_equal: bool,
    location: &'static Location<'static>,
    msg: Option<fmt::Arguments<'a>>,
    tolerances: Tolerances<T::Tolerance>,
}

struct Tolerances<U> {
    abs: Option<U>,
    rel: Option<U>,
}

impl<U: DefaultTolerances + Copy> Tolerances<U> {
    fn accept<T>(&self, left: &T, right: &T) -> bool
    where
        T: ApproxEq<Tolerance = U>,
    {
        let (abs, rel) = match (self.abs, self.rel) {
            (None, None) => (
                Some(U::DEFAULT_ABS_TOLERANCE),
                Some(U::DEFAULT_REL_TOLERANCE),
            ),
            picked => picked,
        };
        abs.map_or(false, |tol| left.abs_diff_eq(right, tol))
            || rel.map_or(false, |tol| left.rel_diff_eq(right, tol))
    }
}

impl<'a, T> Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    #[doc(hidden)]
    #[track_caller]
    pub fn new(
        left: &'a T,
        right: &'a T,
        expect_equal: bool,
        msg: Option<fmt::Arguments<'a>>,
    ) -> Self {
        Self {
            left,
            right,
            expect_equal,
            location: Location::caller(),
            msg,
            tolerances: Tolerances {
                abs: None,
                rel: None,
            },
        }
    }

    /// Compares the absolute difference against `abs`.
    ///
    /// Use this for values near zero, such as eliminated coefficients.
    pub fn abs(&mut self, abs: T::Tolerance) -> &mut Self {
        self.tolerances.abs = Some(abs);
        self
    }

    /// Compares the absolute difference against `rel` times the larger magnitude.
    ///
    /// A nonzero value never matches zero unless `rel` is at least 1.
    pub fn rel(&mut self, rel: T::Tolerance) -> &mut Self {
        self.tolerances.rel = Some(rel);
        self
    }
}

impl<'a, T> Drop for Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    fn drop(&mut self) {
        let equal = self.tolerances.accept(self.left, self.right);
        if equal != self.expect_equal {
            fail(self.left, self.right, self.expect_equal, self.location, self.msg);
        }
    }
}

#[cold]
fn fail(
    left: &dyn fmt::Debug,
    right: &dyn fmt::Debug,
    expect_equal: bool,
    location: &Location<'_>,
    msg: Option<fmt::Arguments<'_>>,
) -> ! {
    let op = if expect_equal { "==" } else { "!=" };
    let detail = msg.map(|args| format!(": {args}")).unwrap_or_default();
    panic!("assertion `left {op} right` failed at {location}{detail}\n  left: {left:?}\n right: {right:?}")
}

#[doc(hidden)]
#[macro_export]
macro_rules! __approx_assertion {
    ($expect_equal:literal, $lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, $expect_equal, ::core::option::Option::None)
    };
    ($expect_equal:literal, $lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $expect_equal,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

/// Like [`assert_eq!`], but compares with [`ApproxEq`].
///
/// Evaluates to an [`Asserter`], so a tolerance can be chained onto the call.
///
/// # Examples
///
/// ```
/// # use linsys_linalg::*;
/// let third = Decimal::ONE / Decimal::from(3);
/// assert_approx_eq!(third * Decimal::from(3), Decimal::ONE);
/// assert_approx_eq!(Decimal::from(100), Decimal::from(99)).abs(Decimal::ONE);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($($args:tt)+) => {
        $crate::__approx_assertion!(true, $($args)+)
    };
}

/// Like [`assert_ne!`], but compares with [`ApproxEq`].
///
/// ```
/// # use linsys_linalg::*;
/// assert_approx_ne!(Decimal::from(100), Decimal::from(99)).abs(Decimal::new(5, 1));
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($($args:tt)+) => {
        $crate::__approx_assertion!(false, $($args)+)
    };
}
