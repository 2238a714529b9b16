//! A hand-written record with the shape `#[derive(GenBuildable)]` generates

use crate::field::Field;
use crate::lens::Lens;
use crate::partial::Buildable;
use crate::partial::Partial;
use crate::semigroup::Semigroup;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Point {
    pub x:     i32,
    pub label: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PartialPoint {
    pub x:     Option<i32>,
    pub label: Option<String>,
}

impl Semigroup for PartialPoint {
    fn combine(self, other: Self) -> Self {
        Self {
            x:     self.x.or(other.x),
            label: self.label.or(other.label),
        }
    }
}

impl Partial for PartialPoint {
    type Target = Point;

    fn build(&self) -> Option<Point> {
        Some(Point {
            x:     self.x?,
            label: self.label.clone()?,
        })
    }

    fn is_complete(&self) -> bool { self.x.is_some() && self.label.is_some() }
}

impl Buildable for Point {
    type Partial = PartialPoint;

    fn as_partial(&self) -> PartialPoint {
        PartialPoint {
            x:     Some(self.x),
            label: Some(self.label.clone()),
        }
    }
}

impl Point {
    pub fn x() -> Field<Self, i32, PartialPoint> {
        Field::new(
            "x",
            Lens::new(
                |source: &Self| source.x,
                |source: Self, x: i32| Self { x, ..source },
            ),
            Lens::new(
                |source: &PartialPoint| source.x,
                |source: PartialPoint, x: Option<i32>| PartialPoint { x, ..source },
            ),
            Some,
        )
    }

    pub fn label() -> Field<Self, String, PartialPoint> {
        Field::new(
            "label",
            Lens::new(
                |source: &Self| source.label.clone(),
                |source: Self, label: String| Self { label, ..source },
            ),
            Lens::new(
                |source: &PartialPoint| source.label.clone(),
                |source: PartialPoint, label: Option<String>| PartialPoint { label, ..source },
            ),
            Some,
        )
    }
}
