/// A requested change to some state value, consumed by a [`Reducer`].
///
/// [`Reducer`]: super::Reducer
pub trait Intent: Send + 'static {
    /// Short tag used in traces.
    fn name(&self) -> &'static str;
}
