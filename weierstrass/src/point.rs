use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Add, Neg};

use num_bigint::BigUint;
use num_traits::Zero;

use crate::{CurveError, Group};

/// Coordinates of a point: either the identity or an affine pair.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum Coords {
    Infinity,
    Finite { x: BigUint, y: BigUint },
}

/// Affine point on a [`Group`], or the point at infinity.
///
/// Points are immutable values. Every operation returns a new point that
/// borrows the same group.
#[derive(Clone)]
pub struct Point<'g> {
    group: &'g Group,
    coords: Coords,
}

impl<'g> Point<'g> {
    pub(crate) fn infinity(group: &'g Group) -> Self {
        Point {
            group,
            coords: Coords::Infinity,
        }
    }

    /// Callers guarantee that `(x, y)` is canonical and on the curve.
    pub(crate) fn finite(group: &'g Group, x: BigUint, y: BigUint) -> Self {
        Point {
            group,
            coords: Coords::Finite { x, y },
        }
    }

    #[inline]
    pub fn group(&self) -> &'g Group {
        self.group
    }

    #[inline]
    pub fn is_infinity(&self) -> bool {
        matches!(self.coords, Coords::Infinity)
    }

    /// `(None, None)` for infinity, otherwise `(Some(x), Some(y))`.
    pub fn coords(&self) -> (Option<&BigUint>, Option<&BigUint>) {
        match &self.coords {
            Coords::Infinity => (None, None),
            Coords::Finite { x, y } => (Some(x), Some(y)),
        }
    }

    #[inline]
    pub fn x(&self) -> Option<&BigUint> {
        self.coords().0
    }

    #[inline]
    pub fn y(&self) -> Option<&BigUint> {
        self.coords().1
    }

    pub(crate) fn belongs_to(&self, group: &Group) -> bool {
        core::ptr::eq(self.group, group) || self.group == group
    }

    fn same_group(&self, other: &Point<'_>) -> bool {
        self.belongs_to(other.group)
    }

    /// Reflect the point over the x-axis.
    pub fn negate(&self) -> Self {
        match &self.coords {
            Coords::Infinity => self.clone(),
            Coords::Finite { x, y } => {
                Point::finite(self.group, x.clone(), self.group.field().neg(y))
            }
        }
    }

    /// Point doubling: 2*P.
    ///
    /// Only fails with [`CurveError::DivisionByZero`], which cannot happen
    /// for a point that satisfies the curve invariant.
    pub fn double(&self) -> Result<Self, CurveError> {
        let (x, y) = match &self.coords {
            Coords::Infinity => return Ok(self.clone()),
            // Vertical tangent: 2P = O
            Coords::Finite { y, .. } if y.is_zero() => {
                return Ok(Point::infinity(self.group));
            }
            Coords::Finite { x, y } => (x, y),
        };
        let field = self.group.field();

        // λ = (3x^2 + a) / (2y)
        let x2 = field.square(x);
        let numerator = field.add(&field.add(&field.add(&x2, &x2), &x2), self.group.a());
        let denominator = field.add(y, y);
        let lambda = field.div(&numerator, &denominator)?;

        // x_r = λ^2 - 2x
        let x_r = field.sub(&field.square(&lambda), &field.add(x, x));

        // y_r = λ(x - x_r) - y
        let y_r = field.sub(&field.mul(&lambda, &field.sub(x, &x_r)), y);

        Ok(Point::finite(self.group, x_r, y_r))
    }

    /// Group law: P + Q.
    ///
    /// Fails with [`CurveError::GroupMismatch`] when the points come from
    /// different groups.
    pub fn add_to_point(&self, other: &Point<'g>) -> Result<Self, CurveError> {
        if !self.same_group(other) {
            return Err(CurveError::GroupMismatch);
        }

        // The arms are mutually exclusive and must stay in this order: the
        // chord formula is only reached once x1 != x2 is established.
        match (&self.coords, &other.coords) {
            (Coords::Infinity, _) => Ok(other.clone()),
            (_, Coords::Infinity) => Ok(self.clone()),
            (Coords::Finite { x: x1, y: y1 }, Coords::Finite { x: x2, y: y2 })
                if x1 == x2 && y1 == y2 =>
            {
                self.double()
            }
            (Coords::Finite { x: x1, .. }, Coords::Finite { x: x2, .. }) if x1 == x2 => {
                // Q = -P
                Ok(Point::infinity(self.group))
            }
            (Coords::Finite { x: x1, y: y1 }, Coords::Finite { x: x2, y: y2 }) => {
                let field = self.group.field();

                // λ = (y2 - y1) / (x2 - x1)
                let lambda = field.div(&field.sub(y2, y1), &field.sub(x2, x1))?;

                // x_r = λ^2 - x1 - x2
                let x_r = field.sub(&field.sub(&field.square(&lambda), x1), x2);

                // y_r = λ(x1 - x_r) - y1
                let y_r = field.sub(&field.mul(&lambda, &field.sub(x1, &x_r)), y1);

                Ok(Point::finite(self.group, x_r, y_r))
            }
        }
    }

    /// Same text as `Display`: `<curve>, 0x<x>, 0x<y>` or `<curve>, infinity`.
    pub fn to_debug_string(&self) -> String {
        self.to_string()
    }
}

impl PartialEq for Point<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.same_group(other) && self.coords == other.coords
    }
}

impl Eq for Point<'_> {}

// Equal points have equal groups, so hashing the name keeps Hash and Eq in
// agreement.
impl Hash for Point<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.group.name().hash(state);
        self.coords.hash(state);
    }
}

impl fmt::Display for Point<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.coords {
            Coords::Infinity => write!(f, "{}, infinity", self.group.name()),
            Coords::Finite { x, y } => write!(f, "{}, {:#x}, {:#x}", self.group.name(), x, y),
        }
    }
}

impl fmt::Debug for Point<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl<'g> Neg for Point<'g> {
    type Output = Point<'g>;

    fn neg(self) -> Point<'g> {
        self.negate()
    }
}

impl<'g> Neg for &Point<'g> {
    type Output = Point<'g>;

    fn neg(self) -> Point<'g> {
        self.negate()
    }
}

impl<'g> Add<&Point<'g>> for &Point<'g> {
    type Output = Result<Point<'g>, CurveError>;

    fn add(self, other: &Point<'g>) -> Self::Output {
        self.add_to_point(other)
    }
}
