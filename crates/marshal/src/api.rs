//! Host integer API generations.
//!
//! The host runtime went through two generations of its integer object API:
//! an older one with a narrow fixed-width integer object next to the big
//! integer object, and the current one with a single unified
//! arbitrary-precision type. The marshaller is written once against
//! [`IntObjectApi`]; the `legacy-host-api` cargo feature selects which
//! implementation backs the public free functions. Caller-observable
//! behaviour is identical under either generation.

use numbridge_host_object::HostObject;

/// The generation-specific slice of the host's integer object API.
///
/// Only representation choice and the raw integer type check differ between
/// generations; everything else in the marshaller is generation-independent.
pub trait IntObjectApi {
    /// Creates an integer object holding exactly `value`.
    fn pack_i64(value: i64) -> HostObject;

    /// Creates an integer object holding exactly `value`.
    fn pack_u64(value: u64) -> HostObject;

    /// Raw integer type check. Booleans pass, because the host implements
    /// them as an integer subtype; callers wanting numeric semantics must
    /// exclude them separately.
    fn check_int(obj: &HostObject) -> bool;
}

/// Current host API generation: one unified arbitrary-precision integer type.
pub struct Unified;

impl IntObjectApi for Unified {
    fn pack_i64(value: i64) -> HostObject {
        HostObject::big_int(value as i128)
    }

    fn pack_u64(value: u64) -> HostObject {
        HostObject::big_int(value as i128)
    }

    fn check_int(obj: &HostObject) -> bool {
        obj.is_big_int()
    }
}

/// Legacy host API generation: a narrow small-integer object for values the
/// older runtime kept unboxed, the big integer object for the rest.
pub struct Split;

impl IntObjectApi for Split {
    fn pack_i64(value: i64) -> HostObject {
        if (i32::MIN as i64..=i32::MAX as i64).contains(&value) {
            HostObject::small_int(value)
        } else {
            HostObject::big_int(value as i128)
        }
    }

    fn pack_u64(value: u64) -> HostObject {
        // Compatibility shim: the unsigned path compares against the legacy
        // type's maximum, not a 32-bit width like the signed path. Values at
        // or below it keep the small representation.
        if value <= i64::MAX as u64 {
            HostObject::small_int(value as i64)
        } else {
            HostObject::big_int(value as i128)
        }
    }

    fn check_int(obj: &HostObject) -> bool {
        obj.is_big_int() || obj.is_small_int()
    }
}

/// The generation backing the public free functions, selected at build time.
#[cfg(feature = "legacy-host-api")]
pub type ActiveApi = Split;

/// The generation backing the public free functions, selected at build time.
#[cfg(not(feature = "legacy-host-api"))]
pub type ActiveApi = Unified;
