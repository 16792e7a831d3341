/// Everything a view needs to draw itself.
///
/// `Default` is the state before anything was loaded; `PartialEq` lets
/// tests compare whole states.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
