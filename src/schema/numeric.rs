//! Numeric validators with bounds.
//!
//! This module provides [`IntegerSchema`] for fixed-width whole numbers and
//! [`NumberRangeSchema`] for half-open ranges over any number.

use std::fmt;
use std::marker::PhantomData;

use crate::path::AccessPath;
use crate::validation::ValidationContext;
use crate::value::Value;

use super::traits::Validator;

/// A fixed-width integer type a number can be checked against.
pub trait IntegerWidth: Copy + Send + Sync + 'static {
    /// Smallest representable value, inclusive.
    const LOWER: f64;
    /// One past the largest representable value, exclusive.
    const UPPER: f64;

    /// Converts a number already known to be whole and in range.
    fn from_whole(n: f64) -> Self;
}

macro_rules! integer_width {
    ($($ty:ty),+) => {
        $(
            impl IntegerWidth for $ty {
                const LOWER: f64 = <$ty>::MIN as f64;
                const UPPER: f64 = <$ty>::MAX as f64 + 1.0;

                fn from_whole(n: f64) -> Self {
                    n as $ty
                }
            }
        )+
    };
}

integer_width!(i8, u8, i16, u16, i32, u32);

/// Accepts whole numbers representable in the integer type `T`.
///
/// # Example
///
/// ```rust
/// use shapecheck::{Schema, Validator, Value};
///
/// let schema = Schema::u8();
///
/// assert!(schema.is_valid(&Value::from(255)));
/// assert!(!schema.is_valid(&Value::from(256)));
/// assert!(!schema.is_valid(&Value::from(-1)));
/// assert!(!schema.is_valid(&Value::from(1.5)));
/// ```
pub struct IntegerSchema<T> {
    _width: PhantomData<fn() -> T>,
}

impl<T: IntegerWidth> IntegerSchema<T> {
    pub fn new() -> Self {
        Self {
            _width: PhantomData,
        }
    }

    fn whole(input: &Value) -> Option<f64> {
        input
            .as_f64()
            .filter(|n| n.fract() == 0.0 && T::LOWER <= *n && *n < T::UPPER)
    }
}

impl<T: IntegerWidth> Default for IntegerSchema<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for IntegerSchema<T> {
    fn clone(&self) -> Self {
        Self {
            _width: PhantomData,
        }
    }
}

impl<T> fmt::Debug for IntegerSchema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IntegerSchema<{}>", std::any::type_name::<T>())
    }
}

impl<T: IntegerWidth> Validator for IntegerSchema<T> {
    type Output = T;

    fn check(
        &self,
        input: &Value,
        _ctx: Option<&mut ValidationContext>,
        _path: &AccessPath,
    ) -> bool {
        Self::whole(input).is_some()
    }

    fn project(&self, input: &Value) -> Option<T> {
        Self::whole(input).map(T::from_whole)
    }
}

/// Accepts numbers within `[min, max)`; an absent bound is unbounded.
///
/// # Example
///
/// ```rust
/// use shapecheck::{Schema, Validator, Value};
///
/// let schema = Schema::number_range(Some(0.0), Some(1.0));
///
/// assert!(schema.is_valid(&Value::from(0.0)));
/// assert!(schema.is_valid(&Value::from(0.5)));
/// assert!(!schema.is_valid(&Value::from(1.0)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NumberRangeSchema {
    min: Option<f64>,
    max: Option<f64>,
}

impl NumberRangeSchema {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// Sets the inclusive lower bound.
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Sets the exclusive upper bound.
    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    fn in_range(&self, input: &Value) -> Option<f64> {
        input.as_f64().filter(|n| {
            self.min.map_or(true, |min| min <= *n) && self.max.map_or(true, |max| *n < max)
        })
    }
}

impl Validator for NumberRangeSchema {
    type Output = f64;

    fn check(
        &self,
        input: &Value,
        _ctx: Option<&mut ValidationContext>,
        _path: &AccessPath,
    ) -> bool {
        self.in_range(input).is_some()
    }

    fn project(&self, input: &Value) -> Option<f64> {
        self.in_range(input)
    }
}
