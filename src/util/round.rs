/// Rounds `x` to `places` decimal places, halves away from zero.
/// Values too large to scale are already integral and come back unchanged.
pub fn round_to(x: f64, places: i32) -> f64 {
    let scale = 10_f64.powi(places);
    let scaled = x * scale;
    if !scaled.is_finite() {
        return x;
    }
    scaled.round() / scale
}
