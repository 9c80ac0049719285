//! Core domain entities
//!
//! Pure data structures and the closed set of field paths into them.
//! No I/O or external dependencies.

pub mod field_path;
mod post;
pub mod result;
mod user;

pub use field_path::{AddressField, CompanyField, FieldPath, GeoField, TopLevelField};
pub use post::Post;
pub use user::{Address, Company, Geo, User, UserData};
