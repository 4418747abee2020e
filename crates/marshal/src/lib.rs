//! Numeric marshalling between host runtime number objects and native values.
//!
//! Conversion helpers for a native-extension binding layer: pack native
//! `i64`/`u64`/`f64`/`bool` values into host number objects, and unpack host
//! objects back into native values. Every conversion is lossless or rejects:
//! an unpack never truncates, wraps, or rounds — it returns a
//! [`MarshalError`] instead.
//!
//! All operations are pure one-shot functions with no state. Handles are
//! borrowed for the duration of a single call; pack functions return new
//! caller-owned handles.
//!
//! The host's integer object API exists in two generations (see
//! [`IntObjectApi`]); the `legacy-host-api` cargo feature selects which one
//! backs the free functions, with identical caller-observable behaviour.
//!
//! # Example
//!
//! ```
//! use numbridge_marshal::{pack_i64, unpack_f64, unpack_i64, MarshalError};
//!
//! let obj = pack_i64(42);
//! assert_eq!(unpack_i64(&obj), Ok(42));
//! assert_eq!(unpack_f64(&obj), Ok(42.0));
//!
//! // 2^53 + 1 has no exact double representation, so unpacking it as a
//! // double is an error rather than a silently rounded value.
//! let big = pack_i64(9_007_199_254_740_993);
//! assert_eq!(
//!     unpack_f64(&big),
//!     Err(MarshalError::PrecisionLoss(9_007_199_254_740_993))
//! );
//! ```

mod api;
mod error;
mod num;

pub use api::{ActiveApi, IntObjectApi, Split, Unified};
pub use error::MarshalError;
pub use num::{
    is_bool, is_float, is_float_with, is_int, is_int_with, pack_bool, pack_f64, pack_i64,
    pack_i64_with, pack_u64, pack_u64_with, unpack_bool, unpack_f64, unpack_f64_with, unpack_i64,
    unpack_i64_with, unpack_u64, unpack_u64_with, DOUBLE_INT_MAX,
};

pub use numbridge_host_object::{HostObject, ObjectKind};
