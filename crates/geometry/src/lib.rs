//! # almanac-geometry
//!
//! Axis-aligned page regions expressed relative to a parent region.
//!
//! A page is described top-down: the page itself is a root [`Region`], the
//! printable canvas is a child of the page, and every cell is a child of the
//! canvas. Absolute edges are derived once at construction and never change,
//! so a region can be handed around by value.
//!
//! ```
//! use almanac_geometry::Region;
//!
//! let page = Region::root(297.0, 210.0);
//! let canvas = Region::within(&page, 10.0, 20.0, page.width() - 20.0, page.height() - 30.0);
//! assert_eq!(canvas.left(), 10.0);
//! assert_eq!(canvas.bottom(), 200.0);
//! ```

mod region;

pub use region::Region;
