//! Tests for the end-to-end analysis pipeline

#[cfg(test)]
mod tests {
    use crackdim::analysis::analyze;
    use crackdim::spatial::BinaryRaster;
    use crackdim::{BoxSizeSet, DegeneratePolicy, FractalError};

    // Tests an area-filling raster has dimension two
    // Verified by fitting ln(size) instead of ln(1/size)
    #[test]
    fn test_full_raster_dimension_two() {
        let raster = BinaryRaster::from_fn(16, 16, |_, _| true).unwrap();
        let sizes = BoxSizeSet::new(vec![2, 4, 8, 16]).unwrap();

        let analysis = analyze(&raster, &sizes, DegeneratePolicy::Reject).unwrap();

        assert_eq!(analysis.dimensions, (16, 16));
        assert_eq!(analysis.foreground, 256);
        assert_eq!(
            analysis.samples.iter().map(|s| s.count).collect::<Vec<_>>(),
            vec![64, 16, 4, 1]
        );
        assert!((analysis.dimension() - 2.0).abs() < 1e-9);
    }

    // Tests an isolated point has dimension zero
    // Verified by counting with a one-pixel halo
    #[test]
    fn test_single_point_dimension_zero() {
        let mut raster = BinaryRaster::new(16, 16).unwrap();
        raster.set(0, 0, true).unwrap();
        let sizes = BoxSizeSet::new(vec![2, 4, 8, 16]).unwrap();

        let analysis = analyze(&raster, &sizes, DegeneratePolicy::Reject).unwrap();

        assert!(analysis.samples.iter().all(|s| s.count == 1));
        assert!(analysis.fit.points.iter().all(|p| p.y.abs() < 1e-12));
        assert!(analysis.dimension().abs() < 1e-9);
    }

    // Tests a straight line has dimension one
    // Verified by counting the line twice per tile row
    #[test]
    fn test_line_dimension_one() {
        let raster = BinaryRaster::from_fn(64, 64, |row, _| row == 17).unwrap();
        let sizes = BoxSizeSet::powers_of_two(0, 5).unwrap();

        let analysis = analyze(&raster, &sizes, DegeneratePolicy::Reject).unwrap();
        assert!((analysis.dimension() - 1.0).abs() < 1e-9);
    }

    // Tests blank rasters surface the degenerate sample error
    // Verified by defaulting the dimension to zero
    #[test]
    fn test_blank_raster_rejected() {
        let raster = BinaryRaster::new(8, 8).unwrap();
        let sizes = BoxSizeSet::new(vec![2, 4]).unwrap();

        assert!(matches!(
            analyze(&raster, &sizes, DegeneratePolicy::Reject),
            Err(FractalError::DegenerateSample { size: 2 })
        ));
        assert!(matches!(
            analyze(&raster, &sizes, DegeneratePolicy::Drop),
            Err(FractalError::InsufficientSamples { usable: 0, .. })
        ));
    }

    // Tests the analysis records the inputs it ran with
    // Verified by storing the default policy
    #[test]
    fn test_analysis_records_inputs() {
        let raster = BinaryRaster::from_fn(8, 8, |row, col| row == col).unwrap();
        let sizes = BoxSizeSet::new(vec![1, 2, 4]).unwrap();

        let analysis = analyze(&raster, &sizes, DegeneratePolicy::Drop).unwrap();
        assert_eq!(analysis.policy, DegeneratePolicy::Drop);
        assert_eq!(analysis.sizes, sizes);
        assert_eq!(analysis.samples.len(), 3);
    }
}
