/// Anything a reducer owns.
///
/// `Default` is the slice's initial and post-reset value. `Clone` lets a
/// view render from a snapshot taken under the store lock.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
