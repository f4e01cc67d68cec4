/// `√3`, the ratio between an equilateral triangle's height and half its
/// side. Every lattice-to-Cartesian formula is built from fractions of this.
pub const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// The silver ratio, `1 + √2`. The handle grid sizes itself off the square
/// root of this, which lands the outermost handles exactly on the corners of
/// a chunk or region triangle.
pub const SILVER_RATIO: f64 = 1.0 + std::f64::consts::SQRT_2;

/// A macro to measure the evaluation time of an expression. Wraps an
/// expression, logs the elapsed time at the given level (debug by default),
/// and evaluates to the value of the expression.
#[macro_export]
macro_rules! timed {
    ($label:expr, $ex:expr) => {
        $crate::timed!($label, log::Level::Debug, $ex)
    };
    ($label:expr, $log_level:expr, $ex:expr) => {{
        let now = std::time::Instant::now();
        let value = $ex;
        let elapsed = now.elapsed();
        log::log!($log_level, "{} took {} ms", $label, elapsed.as_millis());
        value
    }};
}
