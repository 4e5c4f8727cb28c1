/// Cosine and sine of an angle given in degrees.
///
/// Quarter turns return exact literals, so rotating by 90, 180 or 270 degrees leaves no
/// floating point residue in the matrix.
pub(crate) fn cos_sin_deg(deg: f64) -> (f64, f64) {
    let deg = deg.rem_euclid(360.0);
    if deg == 90.0 {
        (0.0, 1.0)
    } else if deg == 180.0 {
        (-1.0, 0.0)
    } else if deg == 270.0 {
        (0.0, -1.0)
    } else {
        let rad = deg.to_radians();
        (rad.cos(), rad.sin())
    }
}
