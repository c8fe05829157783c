/// Marker for anything a reducer accepts: key presses, fetch results,
/// navigation.
pub trait Intent: Send + 'static {}
