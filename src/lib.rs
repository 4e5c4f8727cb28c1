//! A 2D affine transform between raster pixel indices and georeferenced coordinates.
//!
//! ```
//! use geoaffine::Affine;
//!
//! let transform = Affine::from_gdal([-237481.5, 425.0, 0.0, 237536.4, 0.0, -425.0]);
//! assert_eq!(transform.xy(0, 100), (-237481.5, 195036.4));
//! assert_eq!(transform.col_row(-237481.5, 195036.4), (0, 100));
//! ```

mod affine;
mod angle;
pub mod error;
mod mapping;

pub use affine::Affine;
pub use error::{AffineError, Axis, Result};
pub use mapping::Mapping;
