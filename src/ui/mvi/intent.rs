/// Marker for values a reducer consumes: user input translated into
/// screen terms, or a settled network request.
pub trait Intent: Send + 'static {}
