//! Catalog domain types, free of store and service concerns.

pub mod product;

pub use product::*;

use std::fmt;

/// Marks which kind of entity a lookup was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Product,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Product => f.write_str("Product"),
        }
    }
}
