//! A library for topographic sheet grid calculations
//!
//! ## Sheet codes
//!
//! ```rust
//! use sheet_grid::{sheet_for_point, Extent, Scale};
//!
//! let sheet = sheet_for_point(37.62, 55.75, Scale::M1M);
//! assert_eq!(sheet.code, "N-37");
//! assert_eq!(
//!     sheet.extent,
//!     Extent {
//!         minx: 36.0,
//!         miny: 52.0,
//!         maxx: 42.0,
//!         maxy: 56.0,
//!     }
//! );
//! ```
//!
//! ## Grid iteration
//!
//! ```rust
//! use sheet_grid::{Extent, GridIterator, Scale};
//!
//! let extent = Extent {
//!     minx: 36.0,
//!     miny: 52.0,
//!     maxx: 42.0,
//!     maxy: 56.0,
//! };
//! let cells: Vec<_> = GridIterator::new(&extent, Scale::M1M).collect();
//! assert_eq!(cells.len(), 1);
//! assert_eq!(cells[0].center(), (39.0, 54.0));
//! ```

mod grid;
mod grid_iterator;
mod sheet;

pub use crate::grid::{Extent, Scale, SheetRect, UnsupportedScale};
pub use crate::grid_iterator::GridIterator;
pub use crate::sheet::{sheet_for_point, Sheet};

#[cfg(test)]
mod sheet_test;
