/// A state value that is replaced, never edited in place.
///
/// Readers may hold it on any thread while the next one is being reduced.
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}
