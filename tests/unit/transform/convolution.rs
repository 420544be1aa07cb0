//! Tests for kernel validation and convolution edge behavior

#[cfg(test)]
mod tests {
    use rasterops::Raster;
    use rasterops::transform::{ConvolutionFilter, Kernel, RasterTransform};

    // Tests blur leaves the interior of a uniform field alone and dims clipped borders
    // Verified by renormalizing the kernel at the edges
    #[test]
    fn test_blur_darkens_borders_without_renormalizing() {
        let input = Raster::filled(3, 3, [100, 100, 100]).expect("valid size");
        let output = ConvolutionFilter::blur().apply(&input);

        assert_eq!(output.pixel(1, 1), Some([100, 100, 100]));
        // Corner keeps 9/16 of the kernel mass: 56.25
        assert_eq!(output.pixel(0, 0), Some([56, 56, 56]));
        assert_eq!(output.pixel(2, 2), Some([56, 56, 56]));
        // Edge keeps 12/16: 75
        assert_eq!(output.pixel(0, 1), Some([75, 75, 75]));
        assert_eq!(output.pixel(1, 2), Some([75, 75, 75]));
    }

    // Tests the sharpen kernel sums to one in the interior
    // Verified by changing the center weight
    #[test]
    fn test_sharpen_preserves_uniform_interior() {
        let input = Raster::filled(5, 5, [100, 50, 10]).expect("valid size");
        let output = ConvolutionFilter::sharpen().apply(&input);
        assert_eq!(output.pixel(2, 2), Some([100, 50, 10]));
    }

    // Tests a single bright pixel spreads by the kernel weights
    // Verified by flipping the kernel offset
    #[test]
    fn test_blur_spreads_impulse() {
        let input = Raster::from_fn(3, 3, |r, c| {
            if r == 1 && c == 1 { [160, 0, 0] } else { [0, 0, 0] }
        })
        .expect("valid size");
        let output = ConvolutionFilter::blur().apply(&input);

        assert_eq!(output.pixel(1, 1), Some([40, 0, 0]));
        assert_eq!(output.pixel(0, 1), Some([20, 0, 0]));
        assert_eq!(output.pixel(0, 0), Some([10, 0, 0]));
    }

    // Tests negative sums clamp to 0 and large sums clamp to 255
    // Verified by removing the clamp
    #[test]
    fn test_sharpen_clamps() {
        let input = Raster::from_fn(5, 5, |r, c| {
            if r == 2 && c == 2 { [255, 255, 255] } else { [0, 0, 0] }
        })
        .expect("valid size");
        let output = ConvolutionFilter::sharpen().apply(&input);
        assert_eq!(output.pixel(2, 2), Some([255, 255, 255]));
        // Outer ring gets -1/8 of the impulse
        assert_eq!(output.pixel(0, 0), Some([0, 0, 0]));
        // Inner ring gets 1/4: 63.75
        assert_eq!(output.pixel(1, 1), Some([64, 64, 64]));
    }

    // Tests even, empty, non-square and non-finite kernels are rejected
    // Verified by accepting any square matrix
    #[test]
    fn test_kernel_validation() {
        assert!(Kernel::new(&[]).is_err());
        assert!(Kernel::new(&[vec![1.0, 0.0], vec![0.0, 1.0]]).is_err());
        assert!(Kernel::new(&[vec![1.0, 0.0, 0.0], vec![0.0, 1.0, 0.0]]).is_err());
        assert!(Kernel::new(&[vec![f64::NAN]]).is_err());

        let identity = Kernel::new(&[vec![1.0]]).expect("1x1 is odd");
        assert_eq!(identity.side(), 1);
        assert_eq!(identity.offset(), 0);
        assert_eq!(Kernel::sharpen().offset(), 2);
    }

    // Tests a 1x1 identity kernel reproduces the input
    // Verified by offsetting the kernel center
    #[test]
    fn test_identity_kernel_is_noop() {
        let input = Raster::from_fn(4, 3, |r, c| [(r * 60) as u8, (c * 80) as u8, 7])
            .expect("valid size");
        let filter = ConvolutionFilter::new(Kernel::new(&[vec![1.0]]).expect("valid kernel"));
        assert_eq!(filter.apply(&input), input);
    }

    // Tests preset kernels keep unit mass
    // Verified by halving the blur center weight
    #[test]
    fn test_preset_kernels_sum_to_one() {
        let blur = ConvolutionFilter::blur();
        let sharpen = ConvolutionFilter::sharpen();
        assert!((blur.kernel().weights().sum() - 1.0).abs() < 1e-12);
        assert!((sharpen.kernel().weights().sum() - 1.0).abs() < 1e-12);
        assert_eq!(blur.kernel().side(), 3);
        assert_eq!(sharpen.kernel().side(), 5);
    }
}
