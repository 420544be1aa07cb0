//! Tests for error-diffusion dithering

#[cfg(test)]
mod tests {
    use ndarray::Array3;
    use rasterops::Raster;
    use rasterops::transform::dither::{diffuse_errors, error_share};
    use rasterops::transform::{ErrorDiffusionDither, RasterTransform};

    fn white_count(raster: &Raster) -> usize {
        raster
            .to_rows()
            .iter()
            .flatten()
            .filter(|pixel| **pixel == [255, 255, 255])
            .count()
    }

    // Tests every output channel is 0 or 255 and all three channels agree
    // Verified by skipping the greyscale pass
    #[test]
    fn test_output_is_binary_grey() {
        let input = Raster::from_fn(6, 9, |r, c| [(r * 40) as u8, (c * 25) as u8, 90])
            .expect("valid size");
        let output = ErrorDiffusionDither::new().apply(&input);

        assert_eq!(output.dimensions(), (6, 9));
        for pixel in output.to_rows().iter().flatten() {
            assert!(pixel[0] == 0 || pixel[0] == 255);
            assert_eq!(pixel[0], pixel[1]);
            assert_eq!(pixel[1], pixel[2]);
        }
    }

    // Tests saturated fields have zero error and stay unchanged
    // Verified by using >= for the threshold on black
    #[test]
    fn test_uniform_extremes_are_fixed_points() {
        let white = Raster::filled(4, 4, [255, 255, 255]).expect("valid size");
        let black = Raster::filled(4, 4, [0, 0, 0]).expect("valid size");
        let dither = ErrorDiffusionDither::new();

        assert_eq!(dither.apply(&white), white);
        assert_eq!(dither.apply(&black), black);
    }

    // Tests a uniform mid-bright field dithers to a mix dominated by white
    // Verified by dropping the bottom-left diffusion weight
    #[test]
    fn test_uniform_bright_field_pattern() {
        let input = Raster::filled(6, 6, [200, 200, 200]).expect("valid size");
        let output = ErrorDiffusionDither::new().apply(&input);

        assert_eq!(output.pixel(0, 0), Some([255, 255, 255]));
        assert_eq!(white_count(&output), 29);
    }

    // Tests a value exactly at the threshold becomes black
    // Verified by changing the comparison to >=
    #[test]
    fn test_threshold_is_exclusive() {
        let mut buffer = Array3::from_elem((1, 1, 1), 128);
        diffuse_errors(&mut buffer);
        assert_eq!(buffer[[0, 0, 0]], 0);

        let mut above = Array3::from_elem((1, 1, 1), 129);
        diffuse_errors(&mut above);
        assert_eq!(above[[0, 0, 0]], 255);
    }

    // Tests error accumulates into later cells in scan order
    // Verified by diffusing into the bottom-left of the first column
    #[test]
    fn test_error_carries_forward() {
        let mut buffer = Array3::from_elem((2, 2, 1), 100);
        diffuse_errors(&mut buffer);

        assert_eq!(buffer[[0, 0, 0]], 0);
        // 100 + 7/16 of 100 = 144 crosses the threshold
        assert_eq!(buffer[[0, 1, 0]], 255);
        assert_eq!(buffer[[1, 0, 0]], 0);
        assert_eq!(buffer[[1, 1, 0]], 0);
    }

    // Tests shares round halves toward positive infinity
    // Verified by using f64::round, which rounds -3.5 to -4
    #[test]
    fn test_error_share_rounding() {
        assert_eq!(error_share(-8, 7), -3);
        assert_eq!(error_share(8, 7), 4);
        assert_eq!(error_share(-55, 7), -24);
        assert_eq!(error_share(16, 1), 1);
        assert_eq!(error_share(0, 5), 0);
    }

    // Tests a cell pushed past 255 keeps its overshoot until it is visited
    // Verified by clamping neighbors as error is added
    #[test]
    fn test_unvisited_cells_stay_unclamped() {
        let mut buffer = Array3::from_shape_vec((1, 3, 1), vec![100, 250, 120]).expect("shape");
        diffuse_errors(&mut buffer);

        // 250 + 44 = 294 thresholds to 255 and passes +39 on, lifting 120 to 137
        assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), [0, 255, 255]);
    }

    // Tests a scrambled grey field against a fixed bit pattern
    // Verified by clamping neighbors as error is added, which changes rows 3 and 6-14
    #[test]
    fn test_scrambled_field_pattern() {
        let input = Raster::from_fn(16, 16, |r, c| {
            let v = ((r * 7919 + c * 104_729 + r * c * 31) % 256) as u8;
            [v, v, v]
        })
        .expect("valid size");
        let output = ErrorDiffusionDither::new().apply(&input);

        let expected = [
            "0000101111100010",
            "1010100011001110",
            "1011011001011011",
            "1010100011010101",
            "1010010101101010",
            "1001001101100110",
            "1000111000110001",
            "0110100000111111",
            "1011011100000100",
            "0101001110101100",
            "0110110010010011",
            "0101101010110101",
            "0101011010101110",
            "0100110100110100",
            "0111001010010011",
            "0110101000001111",
        ];
        let rows: Vec<String> = output
            .to_rows()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|pixel| if pixel[0] == 255 { '1' } else { '0' })
                    .collect()
            })
            .collect();
        assert_eq!(rows, expected);
    }
}
