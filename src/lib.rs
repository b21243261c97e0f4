//! mapgaz: a static world-city gazetteer served over HTTP.
//!
//! Forward search, reverse lookup by planar nearest neighbour, straight-line
//! directions, a popular-locations listing, and a feedback sink.

pub mod feedback;
pub mod gazetteer;
pub mod server;

#[cfg(test)]
pub(crate) mod test_support;
