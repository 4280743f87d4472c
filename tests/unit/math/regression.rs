//! Tests for closed-form least squares fitting

#[cfg(test)]
mod tests {
    use crackdim::math::regression::{LinearFit, least_squares, r_squared};

    // Tests points on a line are recovered exactly
    // Verified by swapping slope and intercept
    #[test]
    fn test_exact_line() {
        let xs = [-3.0, -1.0, 0.5, 2.0, 10.0];
        let ys: Vec<f64> = xs.iter().map(|x| 1.5f64.mul_add(*x, -4.0)).collect();

        let fit = least_squares(&xs, &ys).unwrap();
        assert!((fit.slope - 1.5).abs() < 1e-12);
        assert!((fit.intercept + 4.0).abs() < 1e-12);
        assert!((r_squared(&fit, &xs, &ys) - 1.0).abs() < 1e-12);
    }

    // Tests the fit of symmetric scatter around a known line
    // Verified by dropping the cross term from the slope
    #[test]
    fn test_symmetric_noise() {
        let xs: [f64; 6] = [0.0, 0.0, 1.0, 1.0, 2.0, 2.0];
        let ys = [1.0, 3.0, 3.0, 5.0, 5.0, 7.0];

        let fit = least_squares(&xs, &ys).unwrap();
        assert!((fit.slope - 2.0).abs() < 1e-12);
        assert!((fit.intercept - 2.0).abs() < 1e-12);

        let r2 = r_squared(&fit, &xs, &ys);
        assert!(r2 > 0.0 && r2 < 1.0);
    }

    // Tests degenerate inputs have no fit
    // Verified by removing the coincident x check
    #[test]
    fn test_degenerate_inputs() {
        assert!(least_squares::<f64>(&[], &[]).is_none());
        assert!(least_squares(&[1.0], &[2.0]).is_none());
        assert!(least_squares(&[1.0, 2.0], &[2.0]).is_none());
        assert!(least_squares(&[0.7, 0.7, 0.7], &[1.0, 2.0, 3.0]).is_none());
    }

    // Tests the fit is generic over float precision
    // Verified by hard-coding f64 accumulators
    #[test]
    fn test_single_precision() {
        let xs = [1.0f32, 2.0, 3.0];
        let ys = [2.0f32, 4.0, 6.0];

        let fit = least_squares(&xs, &ys).unwrap();
        assert!((fit.slope - 2.0).abs() < 1e-5);
        assert!(fit.intercept.abs() < 1e-5);
    }

    // Tests prediction along the line
    // Verified by subtracting the intercept
    #[test]
    fn test_predict() {
        let fit = LinearFit::<f64> {
            slope: -0.5,
            intercept: 3.0,
        };
        assert!((fit.predict(4.0) - 1.0).abs() < 1e-12);
    }

    // Tests flat data fitted exactly reports a perfect fit
    // Verified by returning zero for zero total variance
    #[test]
    fn test_r_squared_flat() {
        let xs: [f64; 3] = [-1.0, -2.0, -3.0];
        let ys = [0.0, 0.0, 0.0];

        let fit = least_squares(&xs, &ys).unwrap();
        assert!(fit.slope.abs() < 1e-12);
        assert!((r_squared(&fit, &xs, &ys) - 1.0).abs() < 1e-12);
    }
}
