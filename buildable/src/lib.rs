//! Runtime interfaces for records deriving [`GenBuildable`]
//!
//! The derive generates, for a record `MyData`:
//! - `PartialMyData`, the record with every field optional, implementing [`Semigroup`] and
//!   [`Partial`]
//! - `impl Buildable for MyData`, the per-type entry point to the partial and a [`Builder`]
//! - `MyData::arg1()`, a [`Field`] per record field, usable on the record and its partial
//!
//! ```
//! use buildable::Buildable;
//! use buildable::GenBuildable;
//!
//! #[derive(Clone, Debug, PartialEq, GenBuildable)]
//! pub struct MyData {
//!     pub arg1: String,
//!     pub arg2: i32,
//! }
//!
//! let data = MyData::builder()
//!     .set(MyData::arg1(), "test".to_string())
//!     .set(MyData::arg2(), 42)
//!     .build();
//! assert_eq!(
//!     data,
//!     Some(MyData {
//!         arg1: "test".to_string(),
//!         arg2: 42,
//!     })
//! );
//!
//! let incomplete = MyData::builder().set(MyData::arg2(), 42).build();
//! assert_eq!(incomplete, None);
//! ```

mod builder;
mod field;
mod lens;
mod partial;
mod semigroup;

#[cfg(test)]
mod fixtures;

pub use buildable_codegen_macros::GenBuildable;

pub use self::builder::Builder;
pub use self::field::Field;
pub use self::lens::Lens;
pub use self::partial::Buildable;
pub use self::partial::Partial;
pub use self::partial::combine_all;
pub use self::partial::combine_two;
pub use self::semigroup::Semigroup;
