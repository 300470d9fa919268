/// Alias to a scalar floating type.
///
/// NOTE: Currently, prefer to use `f64` as a default floating type: objective deltas accumulate
/// rounding noise and `f32` gets quickly out of the comparison tolerance used by consistency checks.
pub type Float = f64;

/// Returns a short name of a type.
pub fn short_type_name<T: ?Sized>() -> &'static str {
    let name = std::any::type_name::<T>();

    name.rsplit_once(':').map(|(_, name)| name).unwrap_or(name)
}
