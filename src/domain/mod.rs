//! Domain value objects for rating and shipping requests.
//!
//! These types hold validated data and are passed by reference into a single
//! API call; none of them outlives the call. Constructors validate eagerly
//! and return `Result`, so an instance is always well-formed.

pub mod address;
pub mod item;
pub mod parcel;

pub use address::{Address, Destination, Origin};
pub use item::{resolve_country_code, resolve_province_code, Item};
pub use parcel::Parcel;
