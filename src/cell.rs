//! The contract every cell in the family shares.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::DecodeError;

/// An atomic cell holding one `Value`.
///
/// Every observable state transition is a single indivisible event: no
/// thread ever sees a partially written value.
pub trait Cell {
    /// The wrapped value type.
    type Value;

    /// Atomically loads the current value.
    fn load(&self) -> Self::Value;

    /// Atomically replaces the current value.
    fn store(&self, value: Self::Value);

    /// Encodes the loaded value as JSON.
    fn marshal_json(&self) -> Result<Vec<u8>, serde_json::Error>
    where
        Self: Serialize,
    {
        serde_json::to_vec(self)
    }

    /// Decodes `bytes` as JSON and stores the result.
    ///
    /// The input is decoded into a scratch cell first; on failure this cell
    /// keeps its previous value.
    fn unmarshal_json(&self, bytes: &[u8]) -> Result<(), DecodeError>
    where
        Self: DeserializeOwned + Sized,
    {
        let scratch: Self =
            serde_json::from_slice(bytes).map_err(DecodeError::new::<Self::Value>)?;
        self.store(scratch.load());
        Ok(())
    }
}
