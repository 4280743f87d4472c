/// Occupied tile counting across box sizes
pub mod box_counting;
/// Log-log regression producing the dimension estimate
pub mod estimator;
/// Validated box size sets
pub mod scales;
