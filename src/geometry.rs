//! Point and vector types for mesh geometry
//!
//! Points and vectors share one representation, [`VectorN`]. Whether a value is a position or a
//! direction is decided by the context it is used in.

use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};
use thiserror::Error;

/// Trait for supported number types
/// Implementation provided for `f32` and `f64`
pub trait GeometryNumber:
    Copy
    + Neg<Output=Self>
    + Add<Self, Output=Self>
    + AddAssign<Self>
    + Sub<Self, Output=Self>
    + SubAssign<Self>
    + Mul<Self, Output=Self>
    + MulAssign<Self>
    + Div<Self, Output=Self>
    + PartialOrd
    + PartialEq
    + Sum
{
    /// Convert an integer value to this Number type
    /// Primarily used for constructing constant values
    fn from_int(int: i32) -> Self;
    /// Square root, equivalent to [`f64::sqrt`]
    fn sqrt(self) -> Self;
    /// Equivalent to [`f64::is_nan`]
    fn is_nan(self) -> bool;
}

impl GeometryNumber for f32 {
    fn from_int(int: i32) -> Self {
        int as f32
    }

    fn sqrt(self) -> Self {
        self.sqrt()
    }

    fn is_nan(self) -> bool {
        self.is_nan()
    }
}

impl GeometryNumber for f64 {
    fn from_int(int: i32) -> Self {
        int as f64
    }

    fn sqrt(self) -> Self {
        self.sqrt()
    }

    fn is_nan(self) -> bool {
        self.is_nan()
    }
}

/// Errors raised by geometric conversions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// Homogeneous point with a zero `w` component
    #[error("cannot convert homogeneous point with w = 0 to a 3D point")]
    DivisionByZero,
}

/// N-dimensional vector
///
/// Type aliases for 2D, 3D and homogeneous 4D ([`Vector2D`], [`Vector3D`], [`Vector4D`]) are provided by this module
///
/// Besides the operator traits, vectors provide named in-place operations ([`VectorN::add_set`], [`VectorN::negate`],
/// [`VectorN::scale`], [`VectorN::scale_add`], [`VectorN::interpolate`]) that overwrite the receiver.
/// Arguments are taken by value, so the receiver may safely be passed as one of its own operands.
#[repr(transparent)]
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct VectorN<T, const N: usize> {
    array: [T; N],
}

impl<T, const N: usize> VectorN<T, N> {
    /// Create a new vector from an array of components
    ///
    /// Vectors retain the order in which components were passed in.
    pub const fn new(array: [T; N]) -> Self { VectorN { array } }

    /// Convert to a borrowed array
    pub fn as_array(&self) -> &[T; N] { &self.array }

    /// Unwrap to array
    pub fn to_array(self) -> [T; N] { self.array }

    /// Performs an element-wise operation on each component of this vector
    #[inline]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> VectorN<U, N> {
        VectorN { array: self.array.map(f) }
    }
}

impl<T: Copy, const N: usize> VectorN<T, N> {
    /// Performs a pair-wise operation on each component of this, and another, vector
    ///
    /// # Examples
    ///
    /// ```
    /// use objnormals::geometry::Vector3D;
    /// let sum = Vector3D::new([1, 2, 3]).map_pairwise(Vector3D::new([4, 5, 6]), |l, r| l + r);
    /// assert_eq!(sum.to_array(), [5, 7, 9]);
    /// ```
    #[inline]
    pub fn map_pairwise<U: Copy, V>(self, rhs: VectorN<U, N>, f: impl Fn(T, U) -> V) -> VectorN<V, N> {
        VectorN::new(std::array::from_fn(|index| f(self.array[index], rhs.array[index])))
    }
}

impl<T: Neg, const N: usize> Neg for VectorN<T, N> {
    type Output = VectorN<<T as Neg>::Output, N>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

impl<T: Add<Output=T> + Copy, const N: usize> Add for VectorN<T, N> {
    type Output = VectorN<T, N>;

    fn add(self, rhs: Self) -> Self::Output {
        self.map_pairwise(rhs, |l, r| l + r)
    }
}

impl<T: AddAssign, const N: usize> AddAssign for VectorN<T, N> {
    fn add_assign(&mut self, rhs: Self) {
        self.array.iter_mut()
            .zip(rhs.array)
            .for_each(|(lhs, rhs)| lhs.add_assign(rhs));
    }
}

impl<T: Sub<Output=T> + Copy, const N: usize> Sub for VectorN<T, N> {
    type Output = VectorN<T, N>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.map_pairwise(rhs, |l, r| l - r)
    }
}

impl<T: SubAssign, const N: usize> SubAssign for VectorN<T, N> {
    fn sub_assign(&mut self, rhs: Self) {
        self.array.iter_mut()
            .zip(rhs.array)
            .for_each(|(lhs, rhs)| lhs.sub_assign(rhs));
    }
}

// Scalar multiplication is element-wise, so we need N copies of T
impl<T: Mul<Output=T> + Copy, const N: usize> Mul<T> for VectorN<T, N> {
    type Output = VectorN<T, N>;

    fn mul(self, rhs: T) -> Self::Output {
        self.map(|n| n * rhs)
    }
}

impl<T: MulAssign<T> + Copy, const N: usize> MulAssign<T> for VectorN<T, N> {
    fn mul_assign(&mut self, rhs: T) {
        self.array.iter_mut().for_each(|n| n.mul_assign(rhs))
    }
}

impl<T: Div<Output=T> + Copy, const N: usize> Div<T> for VectorN<T, N> {
    type Output = VectorN<T, N>;

    fn div(self, rhs: T) -> Self::Output {
        self.map(|n| n / rhs)
    }
}

impl<T, const N: usize, Idx> Index<Idx> for VectorN<T, N> where [T; N]: Index<Idx> {
    type Output = <[T; N] as Index<Idx>>::Output;

    fn index(&self, index: Idx) -> &Self::Output {
        &self.array[index]
    }
}

impl<T, const N: usize, Idx> IndexMut<Idx> for VectorN<T, N> where [T; N]: IndexMut<Idx> {
    fn index_mut(&mut self, index: Idx) -> &mut Self::Output {
        &mut self.array[index]
    }
}

impl<T, const N: usize> IntoIterator for VectorN<T, N> {
    type Item = <[T; N] as IntoIterator>::Item;
    type IntoIter = <[T; N] as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.array.into_iter()
    }
}

impl<T: GeometryNumber, const N: usize> VectorN<T, N> {
    /// The all-zero vector
    pub fn zero() -> Self {
        VectorN::new([T::from_int(0); N])
    }

    /// Sets this vector to `a + b`
    pub fn add_set(&mut self, a: Self, b: Self) {
        *self = a + b;
    }

    /// Negates every component of this vector in place
    pub fn negate(&mut self) {
        *self = -*self;
    }

    /// Multiplies every component of this vector by `factor` in place
    pub fn scale(&mut self, factor: T) {
        *self *= factor;
    }

    /// Sets this vector to `factor * other + base`
    pub fn scale_add(&mut self, factor: T, other: Self, base: Self) {
        *self = other * factor + base;
    }

    /// Sets this vector to the linear interpolation `a + alpha * (b - a)`
    ///
    /// `alpha = 0` yields `a`, `alpha = 1` yields `b`
    pub fn interpolate(&mut self, a: Self, b: Self, alpha: T) {
        *self = a + (b - a) * alpha;
    }

    /// Calculates the "scalar" dot product between this and another equally-sized vector
    pub fn dot(self, rhs: Self) -> T {
        self.into_iter()
            .zip(rhs)
            .map(|(lhs, rhs)| lhs * rhs)
            .sum::<T>()
    }

    /// Calculates the magnitude (euclidean length) of this vector
    pub fn magnitude(self) -> T {
        self.dot(self).sqrt()
    }

    /// Returns this vector scaled to unit length
    ///
    /// The division is not guarded; a zero-length vector yields NaN components.
    pub fn normalized(self) -> Self {
        self * (T::from_int(1) / self.magnitude())
    }

    /// Whether any component is NaN
    pub fn has_nan(self) -> bool {
        self.into_iter().any(T::is_nan)
    }

    /// Whether every component equals zero
    pub fn is_zero(self) -> bool {
        self.into_iter().all(|n| n == T::from_int(0))
    }
}

/// Type alias for 2 dimensional [`VectorN`]
pub type Vector2D<T> = VectorN<T, 2>;

/// Type alias for 3 dimensional [`VectorN`]
pub type Vector3D<T> = VectorN<T, 3>;

/// Type alias for 4 dimensional [`VectorN`], used for homogeneous coordinates
pub type Vector4D<T> = VectorN<T, 4>;

impl<T: Copy + Mul<Output=T> + Sub<Output=T>> Vector3D<T> {
    /// Calculates vector cross product `self × rhs`
    ///
    /// Follows the right-hand rule: for the edges `b - a` and `c - a` of a counter-clockwise triangle `a, b, c`,
    /// the result points out of the triangle's front side.
    pub fn cross_product(self, rhs: Self) -> Self {
        let [l_1, l_2, l_3] = self.array;
        let [r_1, r_2, r_3] = rhs.array;
        Vector3D::new([
            (l_2 * r_3) - (l_3 * r_2),
            (l_3 * r_1) - (l_1 * r_3),
            (l_1 * r_2) - (l_2 * r_1)
        ])
    }
}

impl<T: GeometryNumber> Vector4D<T> {
    /// Converts a homogeneous point `(x, y, z, w)` to `(x / w, y / w, z / w)`
    ///
    /// Fails with [`GeometryError::DivisionByZero`] if `w` is exactly zero.
    pub fn to_euclidean(self) -> Result<Vector3D<T>, GeometryError> {
        let [x, y, z, w] = self.array;
        if w == T::from_int(0) {
            Err(GeometryError::DivisionByZero)
        } else {
            Ok(Vector3D::new([x / w, y / w, z / w]))
        }
    }
}
