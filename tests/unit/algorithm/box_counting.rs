//! Tests for occupied tile counting across box sizes

#[cfg(test)]
mod tests {
    use crackdim::BoxSizeSet;
    use crackdim::algorithm::box_counting::{Sample, count_boxes, count_occupied, occupancy_at};
    use crackdim::spatial::BinaryRaster;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn counts(samples: &[Sample]) -> Vec<usize> {
        samples.iter().map(|sample| sample.count).collect()
    }

    fn assert_non_increasing(raster: &BinaryRaster, sizes: &BoxSizeSet) {
        let samples = count_boxes(raster, sizes).unwrap();
        for pair in samples.windows(2) {
            if let [finer, coarser] = pair {
                assert!(
                    coarser.count <= finer.count,
                    "count rose from {} at size {} to {} at size {}",
                    finer.count,
                    finer.size,
                    coarser.count,
                    coarser.size
                );
            }
        }
    }

    // Tests an all-background raster yields zero at every scale
    // Verified by counting every tile as occupied
    #[test]
    fn test_all_background_counts_zero() {
        let raster = BinaryRaster::new(13, 9).unwrap();
        let sizes = BoxSizeSet::new(vec![1, 2, 3, 5, 64]).unwrap();

        let samples = count_boxes(&raster, &sizes).unwrap();
        assert_eq!(counts(&samples), vec![0, 0, 0, 0, 0]);
    }

    // Tests an all-foreground raster occupies every padded tile
    // Verified by omitting the padded remainder tiles
    #[test]
    fn test_all_foreground_counts_every_tile() {
        let (height, width) = (10, 7);
        let raster = BinaryRaster::from_fn(height, width, |_, _| true).unwrap();
        let sizes = BoxSizeSet::new(vec![1, 2, 3, 4, 20]).unwrap();

        let samples = count_boxes(&raster, &sizes).unwrap();
        for sample in &samples {
            let expected = height.div_ceil(sample.size) * width.div_ceil(sample.size);
            assert_eq!(sample.count, expected, "size {}", sample.size);
        }
    }

    // Tests a box larger than the raster produces one tile
    // Verified by returning zero tiles for oversize boxes
    #[test]
    fn test_oversize_box_single_tile() {
        let mut raster = BinaryRaster::new(5, 3).unwrap();
        assert_eq!(count_occupied(&raster, 32).unwrap(), 0);

        raster.set(4, 2, true).unwrap();
        assert_eq!(count_occupied(&raster, 32).unwrap(), 1);
    }

    // Tests duplicate sizes are counted twice and order is preserved
    // Verified by deduplicating the size set
    #[test]
    fn test_duplicates_and_order_preserved() {
        let raster = BinaryRaster::from_fn(16, 16, |_, _| true).unwrap();
        let sizes = BoxSizeSet::new(vec![8, 2, 8, 4]).unwrap();

        let samples = count_boxes(&raster, &sizes).unwrap();
        assert_eq!(
            samples,
            vec![
                Sample::new(8, 4),
                Sample::new(2, 64),
                Sample::new(8, 4),
                Sample::new(4, 16),
            ]
        );
    }

    // Tests single pixel counts are one at every scale
    // Verified by counting tiles touching the pixel's neighbours
    #[test]
    fn test_single_pixel() {
        let mut raster = BinaryRaster::new(16, 16).unwrap();
        raster.set(0, 0, true).unwrap();
        let sizes = BoxSizeSet::new(vec![2, 4, 8, 16]).unwrap();

        assert_eq!(counts(&count_boxes(&raster, &sizes).unwrap()), vec![1, 1, 1, 1]);
    }

    // Tests a diagonal line occupies one tile per tile row
    // Verified by counting only the first tile row
    #[test]
    fn test_diagonal_line() {
        let raster = BinaryRaster::from_fn(32, 32, |row, col| row == col).unwrap();
        let sizes = BoxSizeSet::powers_of_two(0, 5).unwrap();

        assert_eq!(
            counts(&count_boxes(&raster, &sizes).unwrap()),
            vec![32, 16, 8, 4, 2, 1]
        );
    }

    // Tests counts never rise as nested boxes grow
    // Verified by inverting the occupancy predicate
    #[test]
    fn test_counts_non_increasing() {
        let sizes = BoxSizeSet::powers_of_two(0, 6).unwrap();

        let mut single = BinaryRaster::new(50, 37).unwrap();
        single.set(23, 31, true).unwrap();
        assert_non_increasing(&single, &sizes);

        let diagonal = BinaryRaster::from_fn(45, 45, |row, col| row == col).unwrap();
        assert_non_increasing(&diagonal, &sizes);

        let mut rng = StdRng::seed_from_u64(7);
        for density in [0.01, 0.1, 0.5] {
            let random = BinaryRaster::from_fn(61, 83, |_, _| rng.random_bool(density)).unwrap();
            assert_non_increasing(&random, &sizes);
        }
    }

    // Tests counts stay within the padded tile count
    // Verified by dropping the ceiling on the tile grid size
    #[test]
    fn test_counts_bounded_by_tile_grid() {
        let mut rng = StdRng::seed_from_u64(11);
        let raster = BinaryRaster::from_fn(29, 41, |_, _| rng.random_bool(0.3)).unwrap();
        let sizes = BoxSizeSet::new(vec![1, 3, 7, 10, 50]).unwrap();

        for sample in count_boxes(&raster, &sizes).unwrap() {
            let bound = 29usize.div_ceil(sample.size) * 41usize.div_ceil(sample.size);
            assert!(sample.count <= bound);
        }
    }

    // Tests repeated counting is deterministic
    // Verified by mutating the raster during counting
    #[test]
    fn test_counting_is_deterministic() {
        let mut rng = StdRng::seed_from_u64(3);
        let raster = BinaryRaster::from_fn(40, 40, |_, _| rng.random_bool(0.2)).unwrap();
        let sizes = BoxSizeSet::powers_of_two(1, 5).unwrap();

        let first = count_boxes(&raster, &sizes).unwrap();
        let second = count_boxes(&raster, &sizes).unwrap();
        assert_eq!(first, second);
    }

    // Tests the bitmap and the direct count agree
    // Verified by counting unoccupied bits
    #[test]
    fn test_occupancy_matches_count() {
        let mut rng = StdRng::seed_from_u64(5);
        let raster = BinaryRaster::from_fn(33, 17, |_, _| rng.random_bool(0.05)).unwrap();

        for size in [1, 2, 4, 5, 9] {
            let occupancy = occupancy_at(&raster, size).unwrap();
            assert_eq!(occupancy.count(), count_occupied(&raster, size).unwrap());
        }
    }

    // Tests zero box size is rejected by the single-scale counters
    // Verified by treating zero as one
    #[test]
    fn test_zero_size_rejected() {
        let raster = BinaryRaster::new(4, 4).unwrap();
        assert!(count_occupied(&raster, 0).is_err());
        assert!(occupancy_at(&raster, 0).is_err());
    }
}
