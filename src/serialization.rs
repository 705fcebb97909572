//! Byte encoding of fitted parameters.
//!
//! [`OneHotEncoderParams`](crate::preprocessing::OneHotEncoderParams) and
//! [`VarianceThresholdFilterParams`](crate::preprocessing::VarianceThresholdFilterParams)
//! are encoded with bincode, and
//! [`Stateful::save_to_file`](crate::preprocessing::Stateful::save_to_file)
//! writes these bytes unchanged.

use std::error::Error;

/// Encoding of a fitted transformer's params struct.
///
/// Every serde type gets this through the blanket impl, so a new params struct
/// only needs `#[derive(Serialize, Deserialize)]`.
pub trait SerializableParams: Sized {
    type Error: Error + Send + Sync + 'static;

    /// Encode the learned categories or column decisions.
    fn to_bytes(&self) -> Result<Vec<u8>, Self::Error>;

    /// Decode bytes produced by [`SerializableParams::to_bytes`]. The result is
    /// not validated here; `Stateful::from_params` does that.
    fn from_bytes(bytes: &[u8]) -> Result<Self, Self::Error>;
}

impl<T> SerializableParams for T
where
    T: serde::Serialize + for<'de> serde::Deserialize<'de>,
{
    type Error = bincode::Error;

    fn to_bytes(&self) -> Result<Vec<u8>, Self::Error> {
        bincode::serialize(self)
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, Self::Error> {
        bincode::deserialize(bytes)
    }
}
