//! Records deriving `GenBuildable`, exercised by the integration tests

use std::collections::HashMap;

use buildable::GenBuildable;

/// Two required fields
#[derive(Clone, Debug, PartialEq, Eq, GenBuildable)]
pub struct MyData {
    /// A name
    pub arg1: String,
    /// A count
    pub arg2: i32,
}

/// A record with a nullable field
#[derive(Clone, Debug, PartialEq, GenBuildable)]
pub struct Test1 {
    /// Required
    pub arg1: String,
    /// Required
    pub arg2: i32,
    /// Nullable; must still be set, possibly to `None`, before building
    pub arg3: Option<f64>,
}

/// Fields with generic arguments
#[derive(Clone, Debug, PartialEq, Eq, GenBuildable)]
pub struct Test2 {
    /// Tags
    pub arg1: Vec<String>,
    /// Readings per sensor, some missing
    pub arg2: HashMap<String, Vec<Option<i32>>>,
}

/// A record without fields
#[derive(Clone, Debug, PartialEq, Eq, GenBuildable)]
pub struct Empty;

/// A field named with a keyword
#[derive(Clone, Debug, PartialEq, Eq, GenBuildable)]
pub struct Tagged {
    /// Kind of the value
    pub r#type: String,
    /// The value
    pub value:  u64,
}

/// Records declared inside modules
pub mod scope1 {
    use buildable::GenBuildable;

    /// A record one module deep
    #[derive(Clone, Debug, PartialEq, Eq, GenBuildable)]
    pub struct Nested {
        /// A label
        pub arg1: String,
    }

    /// Records two modules deep
    pub mod scope2 {
        use buildable::GenBuildable;

        /// A record two modules deep
        #[derive(Clone, Debug, PartialEq, Eq, GenBuildable)]
        pub struct Nested {
            /// A pair of values
            pub arg2: Vec<u8>,
        }
    }
}
