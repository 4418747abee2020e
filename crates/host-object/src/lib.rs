//! In-process model of the embedding host's numeric object handles.
//!
//! This crate provides the object surface a binding layer sees when it talks
//! to the host scripting runtime's number objects: an opaque handle type,
//! kind introspection, and exact value accessors.
//!
//! # Overview
//!
//! - [`HostObject`] - An opaque, caller-owned handle to a host runtime object
//! - [`ObjectKind`] - The runtime classification of a handle
//!
//! Arbitrary-precision host integers are backed by `i128`, which is wide
//! enough to hold every overflow boundary a 64-bit marshaller has to detect.
//!
//! # Example
//!
//! ```
//! use numbridge_host_object::{HostObject, ObjectKind};
//!
//! let obj = HostObject::big_int(1 << 40);
//! assert_eq!(obj.kind(), ObjectKind::BigInt);
//! assert_eq!(obj.int_value(), Some(1 << 40));
//! assert_eq!(obj.float_value(), None);
//! ```

mod object;

pub use object::HostObject;
pub use object::ObjectKind;
