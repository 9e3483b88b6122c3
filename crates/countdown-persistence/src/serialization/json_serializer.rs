use crate::traits::Serializer;
use countdown_core::{CountdownError, CountdownResult};

/// Compact JSON, the format the spreadsheet web app reads and writes
pub struct JsonSerializer;

impl<T: serde::Serialize + serde::de::DeserializeOwned + Send + Sync> Serializer<T>
    for JsonSerializer
{
    fn serialize(&self, data: &T) -> CountdownResult<Vec<u8>> {
        serde_json::to_vec(data).map_err(|e| CountdownError::Serialization(e.to_string()))
    }

    fn deserialize(&self, bytes: &[u8]) -> CountdownResult<T> {
        serde_json::from_slice(bytes).map_err(|e| CountdownError::Serialization(e.to_string()))
    }
}
