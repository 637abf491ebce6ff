/// Upstream API clients. Each external service gets its own file here
/// rather than sharing a grab-bag module.

pub mod nominatim;
pub mod purpleair;

#[cfg(test)]
pub(crate) mod fixtures;
