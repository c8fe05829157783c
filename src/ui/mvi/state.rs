/// Marker for screen state.
///
/// Everything the view needs must live in the state; `Default` is the state
/// before the screen has been shown.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
