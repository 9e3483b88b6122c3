use async_trait::async_trait;
use countdown_core::CountdownResult;
use countdown_domain::CountdownEntry;

/// Remote mirror of the countdown list.
///
/// The store only knows how to hand back everything it holds and how to
/// replace everything it holds. Ordering of concurrent replaces is not
/// guaranteed by any implementation.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Fetch the full list
    async fn fetch_all(&self) -> CountdownResult<Vec<CountdownEntry>>;

    /// Replace the remote list with `entries`.
    ///
    /// Best-effort: `Ok` means the request went out, not that the store
    /// accepted it.
    async fn replace_all(&self, entries: &[CountdownEntry]) -> CountdownResult<()>;

    /// Where the list lives, for log messages
    fn endpoint(&self) -> &str;
}

/// Trait for serialization/deserialization strategies
pub trait Serializer<T: Send + Sync>: Send + Sync {
    /// Serialize data to bytes
    fn serialize(&self, data: &T) -> CountdownResult<Vec<u8>>;

    /// Deserialize data from bytes
    fn deserialize(&self, bytes: &[u8]) -> CountdownResult<T>;
}
