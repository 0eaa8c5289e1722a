//! Logical combinators and validator lists.
//!
//! This module provides:
//! - [`UnionSchema`]: at least one member must accept (short-circuits on the
//!   first acceptance)
//! - [`IntersectionSchema`]: every member must accept (short-circuits on the
//!   first rejection)
//! - [`ValidatorList`]: the ordered member lists both combinators (and
//!   [`crate::TupleSchema`]) are built from
//!
//! # Example
//!
//! ```rust
//! use shapecheck::{Schema, Union2, Validator, Value};
//!
//! let id = Schema::union((Schema::string(), Schema::number()));
//!
//! assert!(id.is_valid(&Value::from("abc")));
//! assert!(id.is_valid(&Value::from(42)));
//! assert!(!id.is_valid(&Value::Bool(true)));
//!
//! let parsed = id.parse(&Value::from(42)).into_result().unwrap();
//! assert_eq!(parsed, Union2::Second(42.0));
//! ```

use std::convert::Infallible;

use crate::path::AccessPath;
use crate::validation::ValidationContext;
use crate::value::{Value, UNDEFINED};

use super::traits::Validator;

/// An ordered list of validators with possibly different outputs.
///
/// Implemented for tuples of up to eight validators, for the empty tuple and
/// for `Vec<V>`. The tuple implementations keep every member's output type,
/// which is how unions, intersections and tuples carry their accepted shape.
pub trait ValidatorList: Send + Sync {
    /// Every member's output, in order.
    type Each;
    /// The output of whichever member accepted first.
    type First;

    /// Number of members.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Runs the member at `index`, or returns `None` if there is none.
    fn check_at(
        &self,
        index: usize,
        input: &Value,
        ctx: Option<&mut ValidationContext>,
        path: &AccessPath,
    ) -> Option<bool>;

    /// Projects the same input through every member.
    fn project_all(&self, input: &Value) -> Option<Self::Each>;

    /// Projects `items[i]` through member `i`; missing items read as
    /// `undefined`.
    fn project_items(&self, items: &[Value]) -> Option<Self::Each>;

    /// Projects the input through the first member that accepts it.
    fn project_first(&self, input: &Value) -> Option<Self::First>;
}

impl ValidatorList for () {
    type Each = ();
    type First = Infallible;

    fn len(&self) -> usize {
        0
    }

    fn check_at(
        &self,
        _index: usize,
        _input: &Value,
        _ctx: Option<&mut ValidationContext>,
        _path: &AccessPath,
    ) -> Option<bool> {
        None
    }

    fn project_all(&self, _input: &Value) -> Option<()> {
        Some(())
    }

    fn project_items(&self, _items: &[Value]) -> Option<()> {
        Some(())
    }

    fn project_first(&self, _input: &Value) -> Option<Infallible> {
        None
    }
}

impl<V: Validator> ValidatorList for Vec<V> {
    type Each = Vec<V::Output>;
    type First = V::Output;

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn check_at(
        &self,
        index: usize,
        input: &Value,
        ctx: Option<&mut ValidationContext>,
        path: &AccessPath,
    ) -> Option<bool> {
        self.get(index).map(|member| member.check(input, ctx, path))
    }

    fn project_all(&self, input: &Value) -> Option<Self::Each> {
        self.iter().map(|member| member.project(input)).collect()
    }

    fn project_items(&self, items: &[Value]) -> Option<Self::Each> {
        self.iter()
            .enumerate()
            .map(|(i, member)| member.project(items.get(i).unwrap_or(&UNDEFINED)))
            .collect()
    }

    fn project_first(&self, input: &Value) -> Option<Self::First> {
        self.iter()
            .find(|member| member.is_valid(input))
            .and_then(|member| member.project(input))
    }
}

macro_rules! union_enum {
    ($name:ident { $($param:ident => $variant:ident),+ }) => {
        /// Output of a union: which member accepted, and its output.
        #[derive(Debug, Clone, PartialEq)]
        pub enum $name<$($param),+> {
            $($variant($param)),+
        }
    };
}

union_enum!(Union1 { A => First });
union_enum!(Union2 { A => First, B => Second });
union_enum!(Union3 { A => First, B => Second, C => Third });
union_enum!(Union4 { A => First, B => Second, C => Third, D => Fourth });
union_enum!(Union5 { A => First, B => Second, C => Third, D => Fourth, E => Fifth });
union_enum!(Union6 {
    A => First, B => Second, C => Third, D => Fourth, E => Fifth, F => Sixth
});
union_enum!(Union7 {
    A => First, B => Second, C => Third, D => Fourth, E => Fifth, F => Sixth, G => Seventh
});
union_enum!(Union8 {
    A => First, B => Second, C => Third, D => Fourth, E => Fifth, F => Sixth, G => Seventh,
    H => Eighth
});

macro_rules! validator_list_tuple {
    ($len:expr, $choice:ident; $($param:ident $idx:tt $variant:ident),+) => {
        impl<$($param: Validator),+> ValidatorList for ($($param,)+) {
            type Each = ($($param::Output,)+);
            type First = $choice<$($param::Output),+>;

            fn len(&self) -> usize {
                $len
            }

            fn check_at(
                &self,
                index: usize,
                input: &Value,
                ctx: Option<&mut ValidationContext>,
                path: &AccessPath,
            ) -> Option<bool> {
                match index {
                    $($idx => Some(self.$idx.check(input, ctx, path)),)+
                    _ => None,
                }
            }

            fn project_all(&self, input: &Value) -> Option<Self::Each> {
                Some(($(self.$idx.project(input)?,)+))
            }

            fn project_items(&self, items: &[Value]) -> Option<Self::Each> {
                Some(($(self.$idx.project(items.get($idx).unwrap_or(&UNDEFINED))?,)+))
            }

            fn project_first(&self, input: &Value) -> Option<Self::First> {
                $(
                    if self.$idx.is_valid(input) {
                        return self.$idx.project(input).map($choice::$variant);
                    }
                )+
                None
            }
        }
    };
}

validator_list_tuple!(1, Union1; A 0 First);
validator_list_tuple!(2, Union2; A 0 First, B 1 Second);
validator_list_tuple!(3, Union3; A 0 First, B 1 Second, C 2 Third);
validator_list_tuple!(4, Union4; A 0 First, B 1 Second, C 2 Third, D 3 Fourth);
validator_list_tuple!(5, Union5; A 0 First, B 1 Second, C 2 Third, D 3 Fourth, E 4 Fifth);
validator_list_tuple!(
    6, Union6;
    A 0 First, B 1 Second, C 2 Third, D 3 Fourth, E 4 Fifth, F 5 Sixth
);
validator_list_tuple!(
    7, Union7;
    A 0 First, B 1 Second, C 2 Third, D 3 Fourth, E 4 Fifth, F 5 Sixth, G 6 Seventh
);
validator_list_tuple!(
    8, Union8;
    A 0 First, B 1 Second, C 2 Third, D 3 Fourth, E 4 Fifth, F 5 Sixth, G 6 Seventh,
    H 7 Eighth
);

/// Accepts input that at least one member accepts.
///
/// Members are tried in order with the same context and path; the first
/// acceptance ends the search. The union records nothing itself, but paths
/// recorded by members tried before the accepting one (or by every member,
/// when none accepts) stay in the context.
#[derive(Debug, Clone)]
pub struct UnionSchema<L> {
    members: L,
}

impl<L: ValidatorList> UnionSchema<L> {
    pub fn new(members: L) -> Self {
        Self { members }
    }

    /// Returns the member list.
    pub fn members(&self) -> &L {
        &self.members
    }
}

impl<L: ValidatorList> Validator for UnionSchema<L> {
    type Output = L::First;

    fn check(
        &self,
        input: &Value,
        mut ctx: Option<&mut ValidationContext>,
        path: &AccessPath,
    ) -> bool {
        (0..self.members.len())
            .any(|i| self.members.check_at(i, input, ctx.as_deref_mut(), path) == Some(true))
    }

    fn project(&self, input: &Value) -> Option<Self::Output> {
        self.members.project_first(input)
    }
}

/// Accepts input that every member accepts.
///
/// Members run against the identical input and path; the first rejection
/// ends the check, so later members are never tried. An empty member list
/// accepts everything.
///
/// # Example
///
/// ```rust
/// use shapecheck::{Schema, Validator, Value};
///
/// let schema = Schema::intersection((Schema::string(), Schema::const_("x")));
///
/// assert!(schema.is_valid(&Value::from("x")));
/// assert!(!schema.is_valid(&Value::from("yyy")));
/// assert!(Schema::intersection(()).is_valid(&Value::from("yyy")));
/// ```
#[derive(Debug, Clone)]
pub struct IntersectionSchema<L> {
    members: L,
}

impl<L: ValidatorList> IntersectionSchema<L> {
    pub fn new(members: L) -> Self {
        Self { members }
    }

    /// Returns the member list.
    pub fn members(&self) -> &L {
        &self.members
    }
}

impl<L: ValidatorList> Validator for IntersectionSchema<L> {
    type Output = L::Each;

    fn check(
        &self,
        input: &Value,
        mut ctx: Option<&mut ValidationContext>,
        path: &AccessPath,
    ) -> bool {
        (0..self.members.len())
            .all(|i| self.members.check_at(i, input, ctx.as_deref_mut(), path) == Some(true))
    }

    fn project(&self, input: &Value) -> Option<Self::Output> {
        self.members.project_all(input)
    }
}
