//! Opaque host object handles and their introspection primitives.

/// Runtime classification of a [`HostObject`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    /// Legacy fixed-width integer object (narrow representation).
    SmallInt,
    /// Unified arbitrary-precision integer object.
    BigInt,
    /// Double-precision floating-point object.
    Float,
    /// Boolean truth-value object. The host implements booleans as a subtype
    /// of its integer types, so the raw integer checks answer true for these.
    Bool,
    /// Text object. Not numeric; present so type-mismatch paths have a
    /// realistic non-numeric input.
    Str,
}

impl ObjectKind {
    /// Host-visible name of the kind, as used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            ObjectKind::SmallInt => "int",
            ObjectKind::BigInt => "long",
            ObjectKind::Float => "float",
            ObjectKind::Bool => "bool",
            ObjectKind::Str => "str",
        }
    }
}

/// An opaque, caller-owned handle to a host runtime object.
///
/// A marshaller borrows a handle for the duration of one conversion call and
/// never retains it; constructors return new caller-owned handles. Handles
/// carry no interior mutability and no shared state.
#[derive(Debug, Clone, PartialEq)]
pub struct HostObject {
    repr: Repr,
}

#[derive(Debug, Clone, PartialEq)]
enum Repr {
    SmallInt(i64),
    BigInt(i128),
    Float(f64),
    Bool(bool),
    Str(String),
}

impl HostObject {
    /// Creates a legacy small-integer object.
    pub fn small_int(value: i64) -> Self {
        Self {
            repr: Repr::SmallInt(value),
        }
    }

    /// Creates a unified arbitrary-precision integer object.
    pub fn big_int(value: i128) -> Self {
        Self {
            repr: Repr::BigInt(value),
        }
    }

    /// Creates a floating-point object.
    pub fn float(value: f64) -> Self {
        Self {
            repr: Repr::Float(value),
        }
    }

    /// Creates a boolean truth-value object.
    pub fn boolean(value: bool) -> Self {
        Self {
            repr: Repr::Bool(value),
        }
    }

    /// Creates a text object.
    pub fn text(value: &str) -> Self {
        Self {
            repr: Repr::Str(value.to_owned()),
        }
    }

    /// Runtime classification of this handle.
    pub fn kind(&self) -> ObjectKind {
        match self.repr {
            Repr::SmallInt(_) => ObjectKind::SmallInt,
            Repr::BigInt(_) => ObjectKind::BigInt,
            Repr::Float(_) => ObjectKind::Float,
            Repr::Bool(_) => ObjectKind::Bool,
            Repr::Str(_) => ObjectKind::Str,
        }
    }

    /// Host-visible name of this handle's kind.
    pub fn kind_name(&self) -> &'static str {
        self.kind().name()
    }

    /// Raw type check for the unified integer type.
    ///
    /// Answers true for booleans as well: the host implements its boolean
    /// type as a subtype of the integer type.
    pub fn is_big_int(&self) -> bool {
        matches!(self.repr, Repr::BigInt(_) | Repr::Bool(_))
    }

    /// Raw type check for the legacy small-integer type.
    ///
    /// Booleans pass this check too, for the same subtype reason as
    /// [`is_big_int`](Self::is_big_int).
    pub fn is_small_int(&self) -> bool {
        matches!(self.repr, Repr::SmallInt(_) | Repr::Bool(_))
    }

    /// Raw type check for the boolean type.
    pub fn is_bool(&self) -> bool {
        matches!(self.repr, Repr::Bool(_))
    }

    /// Raw type check for the floating-point type.
    pub fn is_float(&self) -> bool {
        matches!(self.repr, Repr::Float(_))
    }

    /// Exact integer value of any integer-valued object, booleans included
    /// (as 0 or 1). `None` for floats and non-numeric objects.
    ///
    /// The result is exact, never wrapped or saturated; callers narrow it
    /// with `TryFrom` so overflow is reported instead of silently lost.
    pub fn int_value(&self) -> Option<i128> {
        match self.repr {
            Repr::SmallInt(v) => Some(v as i128),
            Repr::BigInt(v) => Some(v),
            Repr::Bool(b) => Some(b as i128),
            Repr::Float(_) | Repr::Str(_) => None,
        }
    }

    /// Stored double of a floating-point object. `None` for every other
    /// kind; promoting integers to doubles is the marshaller's job because
    /// it carries a precision check.
    pub fn float_value(&self) -> Option<f64> {
        match self.repr {
            Repr::Float(v) => Some(v),
            _ => None,
        }
    }

    /// Truth value of a boolean object. `None` for every other kind.
    pub fn bool_value(&self) -> Option<bool> {
        match self.repr {
            Repr::Bool(b) => Some(b),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_and_names() {
        assert_eq!(HostObject::small_int(7).kind(), ObjectKind::SmallInt);
        assert_eq!(HostObject::big_int(7).kind(), ObjectKind::BigInt);
        assert_eq!(HostObject::float(7.0).kind(), ObjectKind::Float);
        assert_eq!(HostObject::boolean(true).kind(), ObjectKind::Bool);
        assert_eq!(HostObject::text("seven").kind(), ObjectKind::Str);
        assert_eq!(HostObject::big_int(7).kind_name(), "long");
        assert_eq!(HostObject::text("seven").kind_name(), "str");
    }

    #[test]
    fn booleans_pass_raw_integer_checks() {
        let t = HostObject::boolean(true);
        assert!(t.is_big_int());
        assert!(t.is_small_int());
        assert!(t.is_bool());
        assert!(!t.is_float());
    }

    #[test]
    fn integer_objects_fail_bool_and_float_checks() {
        let n = HostObject::big_int(1);
        assert!(n.is_big_int());
        assert!(!n.is_small_int());
        assert!(!n.is_bool());
        assert!(!n.is_float());
    }

    #[test]
    fn int_value_is_exact_across_kinds() {
        assert_eq!(HostObject::small_int(-5).int_value(), Some(-5));
        assert_eq!(
            HostObject::big_int(i64::MAX as i128 + 1).int_value(),
            Some(i64::MAX as i128 + 1)
        );
        assert_eq!(HostObject::boolean(true).int_value(), Some(1));
        assert_eq!(HostObject::boolean(false).int_value(), Some(0));
        assert_eq!(HostObject::float(3.5).int_value(), None);
        assert_eq!(HostObject::text("3").int_value(), None);
    }

    #[test]
    fn float_value_only_for_floats() {
        assert_eq!(HostObject::float(3.5).float_value(), Some(3.5));
        assert_eq!(HostObject::big_int(3).float_value(), None);
        assert_eq!(HostObject::boolean(true).float_value(), None);
    }

    #[test]
    fn bool_value_only_for_booleans() {
        assert_eq!(HostObject::boolean(false).bool_value(), Some(false));
        assert_eq!(HostObject::small_int(0).bool_value(), None);
    }
}
