//! Pack and unpack operations for 64-bit integers, doubles, and booleans.

use numbridge_host_object::HostObject;

use crate::api::{ActiveApi, IntObjectApi};
use crate::MarshalError;

/// Largest integer that can be represented consecutively in a double.
///
/// Above this magnitude (2^53) consecutive integers are no longer all
/// representable in IEEE-754 double precision, so converting one to a double
/// would silently change its value.
pub const DOUBLE_INT_MAX: i64 = 9_007_199_254_740_992;

/// Numeric classification of a host object, resolved once per conversion so
/// the host is not re-queried on every branch.
enum Numeric {
    Int(i128),
    Float(f64),
}

fn classify<A: IntObjectApi>(obj: &HostObject) -> Option<Numeric> {
    if let Some(v) = obj.float_value() {
        return Some(Numeric::Float(v));
    }
    if A::check_int(obj) && !obj.is_bool() {
        return obj.int_value().map(Numeric::Int);
    }
    None
}

fn mismatch(expected: &'static str, obj: &HostObject) -> MarshalError {
    MarshalError::TypeMismatch {
        expected,
        found: obj.kind_name(),
    }
}

/// Creates an integer object holding exactly `value`. Infallible: the whole
/// signed 64-bit range is representable.
pub fn pack_i64(value: i64) -> HostObject {
    pack_i64_with::<ActiveApi>(value)
}

/// [`pack_i64`] against an explicit API generation.
pub fn pack_i64_with<A: IntObjectApi>(value: i64) -> HostObject {
    A::pack_i64(value)
}

/// Creates an integer object holding exactly `value`. Infallible for the
/// whole unsigned 64-bit range.
pub fn pack_u64(value: u64) -> HostObject {
    pack_u64_with::<ActiveApi>(value)
}

/// [`pack_u64`] against an explicit API generation.
pub fn pack_u64_with<A: IntObjectApi>(value: u64) -> HostObject {
    A::pack_u64(value)
}

/// Creates a floating-point object holding exactly `value`.
pub fn pack_f64(value: f64) -> HostObject {
    HostObject::float(value)
}

/// Creates a boolean object.
pub fn pack_bool(value: bool) -> HostObject {
    HostObject::boolean(value)
}

/// True when `obj` is integer-like: an integer object that is not a boolean.
///
/// The host implements booleans as an integer subtype, so the raw type check
/// would let `true`/`false` through as 1/0; numeric contexts must not.
pub fn is_int(obj: &HostObject) -> bool {
    is_int_with::<ActiveApi>(obj)
}

/// [`is_int`] against an explicit API generation.
pub fn is_int_with<A: IntObjectApi>(obj: &HostObject) -> bool {
    A::check_int(obj) && !obj.is_bool()
}

/// True when `obj` is float-like: a floating-point object, or an integer-like
/// object (integers are accepted wherever a double is expected).
pub fn is_float(obj: &HostObject) -> bool {
    is_float_with::<ActiveApi>(obj)
}

/// [`is_float`] against an explicit API generation.
pub fn is_float_with<A: IntObjectApi>(obj: &HostObject) -> bool {
    classify::<A>(obj).is_some()
}

/// True when `obj` is a boolean object.
pub fn is_bool(obj: &HostObject) -> bool {
    obj.is_bool()
}

/// Unpacks an integer-like object as `i64`.
///
/// Fails with [`MarshalError::TypeMismatch`] when `obj` is not integer-like
/// (booleans are rejected) and with [`MarshalError::IntOverflow`] when the
/// value exceeds the signed 64-bit range. Narrowing goes through `TryFrom`
/// on the exact value, never a wrapping cast.
pub fn unpack_i64(obj: &HostObject) -> Result<i64, MarshalError> {
    unpack_i64_with::<ActiveApi>(obj)
}

/// [`unpack_i64`] against an explicit API generation.
pub fn unpack_i64_with<A: IntObjectApi>(obj: &HostObject) -> Result<i64, MarshalError> {
    match classify::<A>(obj) {
        Some(Numeric::Int(wide)) => {
            i64::try_from(wide).map_err(|_| MarshalError::IntOverflow("i64"))
        }
        _ => Err(mismatch("an integer object", obj)),
    }
}

/// Unpacks an integer-like object as `u64`.
///
/// Same contract as [`unpack_i64`] against the unsigned 64-bit range;
/// negative values fail with [`MarshalError::IntOverflow`].
pub fn unpack_u64(obj: &HostObject) -> Result<u64, MarshalError> {
    unpack_u64_with::<ActiveApi>(obj)
}

/// [`unpack_u64`] against an explicit API generation.
pub fn unpack_u64_with<A: IntObjectApi>(obj: &HostObject) -> Result<u64, MarshalError> {
    match classify::<A>(obj) {
        Some(Numeric::Int(wide)) => {
            u64::try_from(wide).map_err(|_| MarshalError::IntOverflow("u64"))
        }
        _ => Err(mismatch("an integer object", obj)),
    }
}

/// Unpacks a float-like object as `f64`.
///
/// Floating-point objects come back unchanged. Integer-like objects are
/// decoded as `i64` first (propagating [`MarshalError::IntOverflow`]) and
/// then fail with [`MarshalError::PrecisionLoss`] when their magnitude
/// exceeds [`DOUBLE_INT_MAX`]; exactly ±2^53 succeeds. Everything else is a
/// [`MarshalError::TypeMismatch`].
pub fn unpack_f64(obj: &HostObject) -> Result<f64, MarshalError> {
    unpack_f64_with::<ActiveApi>(obj)
}

/// [`unpack_f64`] against an explicit API generation.
pub fn unpack_f64_with<A: IntObjectApi>(obj: &HostObject) -> Result<f64, MarshalError> {
    match classify::<A>(obj) {
        Some(Numeric::Float(v)) => Ok(v),
        Some(Numeric::Int(wide)) => {
            let value = i64::try_from(wide).map_err(|_| MarshalError::IntOverflow("i64"))?;
            if value > DOUBLE_INT_MAX || value < -DOUBLE_INT_MAX {
                return Err(MarshalError::PrecisionLoss(value));
            }
            Ok(value as f64)
        }
        None => Err(mismatch("a float object", obj)),
    }
}

/// Unpacks a boolean object.
///
/// Fails with [`MarshalError::TypeMismatch`] for every non-boolean kind;
/// integers are not coerced to truth values here.
pub fn unpack_bool(obj: &HostObject) -> Result<bool, MarshalError> {
    obj.bool_value().ok_or_else(|| mismatch("a bool object", obj))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Split, Unified};

    #[test]
    fn classification_excludes_booleans() {
        let truth = HostObject::boolean(true);
        assert!(!is_int_with::<Unified>(&truth));
        assert!(!is_int_with::<Split>(&truth));
        assert!(!is_float_with::<Unified>(&truth));
    }

    #[test]
    fn classification_accepts_integers_as_floats() {
        let n = HostObject::big_int(12);
        assert!(is_int_with::<Unified>(&n));
        assert!(is_float_with::<Unified>(&n));
        let f = HostObject::float(12.0);
        assert!(!is_int_with::<Unified>(&f));
        assert!(is_float_with::<Unified>(&f));
    }

    #[test]
    fn small_int_classification_is_generation_specific() {
        let small = HostObject::small_int(12);
        assert!(is_int_with::<Split>(&small));
        assert!(!is_int_with::<Unified>(&small));
    }

    #[test]
    fn unpack_i64_reports_overflow_not_wraparound() {
        let over = HostObject::big_int(i64::MAX as i128 + 1);
        assert_eq!(
            unpack_i64_with::<Unified>(&over),
            Err(MarshalError::IntOverflow("i64"))
        );
        let under = HostObject::big_int(i64::MIN as i128 - 1);
        assert_eq!(
            unpack_i64_with::<Unified>(&under),
            Err(MarshalError::IntOverflow("i64"))
        );
    }

    #[test]
    fn unpack_u64_rejects_negative_values_as_overflow() {
        let neg = HostObject::big_int(-1);
        assert_eq!(
            unpack_u64_with::<Unified>(&neg),
            Err(MarshalError::IntOverflow("u64"))
        );
        assert_eq!(
            unpack_u64_with::<Unified>(&HostObject::big_int(u64::MAX as i128)),
            Ok(u64::MAX)
        );
    }

    #[test]
    fn unpack_f64_precision_boundary() {
        let at_max = HostObject::big_int(DOUBLE_INT_MAX as i128);
        assert_eq!(unpack_f64_with::<Unified>(&at_max), Ok(9007199254740992.0));
        let at_min = HostObject::big_int(-(DOUBLE_INT_MAX as i128));
        assert_eq!(unpack_f64_with::<Unified>(&at_min), Ok(-9007199254740992.0));
        let past = HostObject::big_int(DOUBLE_INT_MAX as i128 + 1);
        assert_eq!(
            unpack_f64_with::<Unified>(&past),
            Err(MarshalError::PrecisionLoss(DOUBLE_INT_MAX + 1))
        );
    }

    #[test]
    fn unpack_f64_propagates_integer_overflow() {
        let huge = HostObject::big_int(i64::MAX as i128 + 1);
        assert_eq!(
            unpack_f64_with::<Unified>(&huge),
            Err(MarshalError::IntOverflow("i64"))
        );
    }

    #[test]
    fn unpack_bool_rejects_numeric_kinds() {
        assert_eq!(unpack_bool(&HostObject::boolean(true)), Ok(true));
        assert_eq!(
            unpack_bool(&HostObject::big_int(1)),
            Err(MarshalError::TypeMismatch {
                expected: "a bool object",
                found: "long",
            })
        );
    }

    #[test]
    fn error_display_names_the_offending_kind() {
        let err = unpack_i64_with::<Unified>(&HostObject::text("12")).unwrap_err();
        assert_eq!(err.to_string(), "expected an integer object, got `str` object");
    }
}
