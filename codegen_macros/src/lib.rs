//! Procedural macros for buildable

mod attributes;
mod candidate;
mod expand;
mod logging;
mod token_sink;

use proc_macro::TokenStream;
use syn::DeriveInput;
use syn::parse_macro_input;

/// Generates a partial type, its combine and build operations, a `Buildable`
/// implementation, and one field accessor per field.
///
/// # Example
///
/// ```ignore
/// #[derive(Clone, Debug, PartialEq, GenBuildable)]
/// pub struct MyData {
///     pub arg1: String,
///     pub arg2: i32,
/// }
/// ```
///
/// This will generate:
///
/// ```ignore
/// pub struct PartialMyData {
///     pub arg1: Option<String>,
///     pub arg2: Option<i32>,
/// }
///
/// impl buildable::Semigroup for PartialMyData { /* field-wise, `self` wins */ }
/// impl buildable::Partial for PartialMyData { type Target = MyData; /* ... */ }
/// impl buildable::Buildable for MyData { type Partial = PartialMyData; /* ... */ }
///
/// impl MyData {
///     pub fn arg1() -> buildable::Field<MyData, String, PartialMyData> { /* ... */ }
///     pub fn arg2() -> buildable::Field<MyData, i32, PartialMyData> { /* ... */ }
/// }
/// ```
///
/// Field types are written in the accessor grammar `Name<Args, ...>`, with `Option<T>`
/// standing for a nullable `T`. Paths such as `std::string::String` are rejected; bring
/// the type into scope instead.
///
/// # Field requirements
///
/// The partial derives `Clone`, `Debug`, `Default`, and `PartialEq`, and the generated
/// accessors and `build` clone field values. Every field type must therefore implement
/// `Clone`, `Debug`, and `PartialEq`; a field type missing one of them fails to compile
/// at the derive. `Default` is not required since every partial field is an `Option`.
///
/// Partial fields and accessors take the visibility of the record field they mirror.
///
/// Enums, unions, tuple structs, and generic types are skipped with a warning.
///
/// Generated code refers to the runtime as `::buildable`; override it with
/// `#[buildable(crate = "path::to::buildable")]`.
#[proc_macro_derive(GenBuildable, attributes(buildable))]
pub fn derive_gen_buildable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand::derive_gen_buildable(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
