use crate::utils::{clamp_unit, coordinates_approx_eq, radians_to_degrees};
use crate::{InvalidArgument, Result, VectorError, ZeroVectorContext};
use log::{debug, trace};
use ndarray::Array1;
use std::fmt;
use std::ops::{Mul, Neg};

/// Tolerance suggested for `Vector::approx_eq` on results of float arithmetic.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

/// An immutable point or direction in n-dimensional real space.
///
/// A `Vector` always has at least one coordinate. None of its methods take
/// `&mut self`: arithmetic hands back a fresh vector and leaves the operands
/// untouched. Equality compares coordinates element for element.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    coordinates: Array1<f64>,
}

impl Vector {
    pub fn new<I>(coordinates: I) -> Result<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        Self::from_array(coordinates.into_iter().collect())
    }

    pub fn from_array(coordinates: Array1<f64>) -> Result<Self> {
        if coordinates.is_empty() {
            debug!("rejected vector construction with no coordinates");
            return Err(VectorError::InvalidArgument(
                InvalidArgument::EmptyCoordinates,
            ));
        }
        let coordinates = if coordinates.is_standard_layout() {
            coordinates
        } else {
            coordinates.as_standard_layout().into_owned()
        };
        Ok(Self { coordinates })
    }

    pub fn zero(dimension: usize) -> Result<Self> {
        Self::from_array(Array1::zeros(dimension))
    }

    pub fn dimension(&self) -> usize {
        self.coordinates.len()
    }

    pub fn coordinates(&self) -> &Array1<f64> {
        &self.coordinates
    }

    pub fn as_slice(&self) -> &[f64] {
        // from_array keeps every stored array in standard layout
        self.coordinates.as_slice().unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.coordinates.iter()
    }

    pub fn into_inner(self) -> Array1<f64> {
        self.coordinates
    }

    pub fn plus(&self, other: &Vector) -> Result<Vector> {
        self.check_dimension(other)?;
        Ok(Self {
            coordinates: &self.coordinates + &other.coordinates,
        })
    }

    pub fn minus(&self, other: &Vector) -> Result<Vector> {
        self.check_dimension(other)?;
        Ok(Self {
            coordinates: &self.coordinates - &other.coordinates,
        })
    }

    pub fn times_scalar(&self, c: f64) -> Vector {
        Self {
            coordinates: &self.coordinates * c,
        }
    }

    /// Euclidean norm: the square root of the sum of squared coordinates.
    ///
    /// Coordinates are divided by the largest absolute coordinate before
    /// squaring, so the result neither overflows nor underflows for finite
    /// input whose norm is representable.
    pub fn magnitude(&self) -> f64 {
        let scale = self.max_abs_coordinate();
        if scale == 0.0 || scale.is_infinite() {
            return scale;
        }
        let scaled = &self.coordinates / scale;
        scale * scaled.dot(&scaled).sqrt()
    }

    pub fn is_zero(&self) -> bool {
        self.max_abs_coordinate() == 0.0
    }

    /// Scales the vector to unit magnitude.
    ///
    /// Fails with `ZeroVectorContext::Normalization` when every coordinate
    /// is zero.
    pub fn normalized(&self) -> Result<Vector> {
        let scale = self.max_abs_coordinate();
        if scale == 0.0 {
            debug!("cannot normalize zero vector of dimension {}", self.dimension());
            return Err(VectorError::ZeroVector(ZeroVectorContext::Normalization));
        }
        // the scaled vector has norm in [1, sqrt(dimension)]
        let scaled = &self.coordinates / scale;
        let norm = scaled.dot(&scaled).sqrt();
        Ok(Self {
            coordinates: scaled / norm,
        })
    }

    pub fn dot(&self, other: &Vector) -> Result<f64> {
        self.check_dimension(other)?;
        Ok(self.coordinates.dot(&other.coordinates))
    }

    /// Angle between `self` and `other`, in `[0, π]` radians or `[0, 180]`
    /// degrees depending on `unit`.
    ///
    /// Both operands are normalized first, so a zero operand fails with
    /// `ZeroVectorContext::AngleComputation`.
    pub fn angle_with(&self, other: &Vector, unit: AngleUnit) -> Result<f64> {
        self.check_dimension(other)?;

        let u1 = self.normalized().map_err(relabel_for_angle)?;
        let u2 = other.normalized().map_err(relabel_for_angle)?;

        let cosine = u1.coordinates.dot(&u2.coordinates);
        let clamped = clamp_unit(cosine);
        if clamped != cosine {
            trace!("clamped cosine {} into [-1, 1]", cosine);
        }

        let radians = clamped.acos();
        Ok(match unit {
            AngleUnit::Radians => radians,
            AngleUnit::Degrees => radians_to_degrees(radians),
        })
    }

    pub fn angle_with_degrees(&self, other: &Vector) -> Result<f64> {
        self.angle_with(other, AngleUnit::Degrees)
    }

    /// True when both vectors have the same dimension and every pair of
    /// coordinates differs by at most `tolerance`.
    pub fn approx_eq(&self, other: &Vector, tolerance: f64) -> bool {
        coordinates_approx_eq(&self.coordinates, &other.coordinates, tolerance)
    }

    /// Largest absolute coordinate, NaN if any coordinate is NaN.
    fn max_abs_coordinate(&self) -> f64 {
        self.coordinates.fold(0.0_f64, |max, x| {
            if x.is_nan() || x.abs() > max {
                x.abs()
            } else {
                max
            }
        })
    }

    fn check_dimension(&self, other: &Vector) -> Result<()> {
        if self.dimension() != other.dimension() {
            debug!(
                "dimension mismatch: {} vs {}",
                self.dimension(),
                other.dimension()
            );
            return Err(VectorError::DimensionMismatch {
                expected: self.dimension(),
                found: other.dimension(),
            });
        }
        Ok(())
    }
}

fn relabel_for_angle(err: VectorError) -> VectorError {
    match err {
        VectorError::ZeroVector(ZeroVectorContext::Normalization) => {
            VectorError::ZeroVector(ZeroVectorContext::AngleComputation)
        }
        other => other,
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector: (")?;
        for (i, x) in self.coordinates.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", x)?;
        }
        write!(f, ")")
    }
}

impl TryFrom<Vec<f64>> for Vector {
    type Error = VectorError;

    fn try_from(coordinates: Vec<f64>) -> Result<Self> {
        Self::from_array(Array1::from_vec(coordinates))
    }
}

impl TryFrom<&[f64]> for Vector {
    type Error = VectorError;

    fn try_from(coordinates: &[f64]) -> Result<Self> {
        Self::new(coordinates.iter().copied())
    }
}

impl TryFrom<Array1<f64>> for Vector {
    type Error = VectorError;

    fn try_from(coordinates: Array1<f64>) -> Result<Self> {
        Self::from_array(coordinates)
    }
}

impl Mul<f64> for &Vector {
    type Output = Vector;

    fn mul(self, c: f64) -> Vector {
        self.times_scalar(c)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, c: f64) -> Vector {
        self.times_scalar(c)
    }
}

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.times_scalar(-1.0)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.times_scalar(-1.0)
    }
}
