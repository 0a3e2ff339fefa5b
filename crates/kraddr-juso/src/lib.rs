//! Client for the Juso road-name address search API.

pub mod client;
pub mod error;
pub mod normalize;
pub mod types;

pub use client::JusoClient;
pub use error::JusoError;
pub use types::{
    AddressRecord, Common, RawCommon, RawSearchResponse, RawSearchResults, SearchOptions,
    SearchResponse, SearchResults, SummaryNumber,
};
