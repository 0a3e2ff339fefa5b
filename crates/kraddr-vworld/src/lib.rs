//! Client for the `VWorld` coordinate-lookup (geocoding) API.

pub mod client;
pub mod error;
pub mod types;

pub use client::VworldClient;
pub use error::GeocodeError;
pub use types::{
    AddressType, GeocodeOptions, GeocodeResponse, GeocodeResult, GeocodeStatus, PageInfo, Point,
    RecordInfo, Refined, RequestInput, ResponseBody, ServiceError, ServiceInfo,
};
