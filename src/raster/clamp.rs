//! Channel clamping and rounding shared by every transform

use crate::io::configuration::CHANNEL_MAX;
use ndarray::Array3;

/// Constrain a single channel value to 0-255
pub fn clamp_channel(value: i32) -> i32 {
    num_traits::clamp(value, 0, CHANNEL_MAX)
}

/// Clamp every element of an unclamped channel buffer in place
pub fn clamp_in_place(values: &mut Array3<i32>) {
    values.mapv_inplace(clamp_channel);
}

/// Return a clamped copy of an unclamped channel buffer
pub fn clamped(values: &Array3<i32>) -> Array3<i32> {
    values.mapv(clamp_channel)
}

/// Round a real-valued channel sum to the nearest integer, halves away from zero
pub fn round_channel(sum: f64) -> i32 {
    // `as` saturates, so non-finite or huge sums still land in range after clamping
    sum.round() as i32
}
