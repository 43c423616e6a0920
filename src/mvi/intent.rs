/// Marker for inputs to a [`Reducer`](super::Reducer): a user gesture, a
/// lifecycle phase of a store operation, or a local reset.
pub trait Intent: Send + 'static {}
