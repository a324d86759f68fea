//! Prints a few sample curves and their derivatives.
//!
//! ```text
//! curves [start] [end] [step]
//! ```
//!
//! The curves are tabulated for `x` from `start` (inclusive) to `end` (exclusive), in increments
//! of `step`. The defaults are `0 10 1`. At most [`MAX_POINTS`] points are printed per curve.
//! Log output is controlled with `RUST_LOG`.

use symal_compute::{
    custom_constant,
    symbolic::{derivative_n, simplify},
    Expr,
    Variable,
};
use tracing::{debug, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// The maximum number of points tabulated for each curve.
const MAX_POINTS: u32 = 10_000;

/// The range of `x` values to tabulate.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Sweep {
    start: f64,
    end: f64,
    step: f64,
}

impl Default for Sweep {
    fn default() -> Self {
        Self { start: 0.0, end: 10.0, step: 1.0 }
    }
}

impl Sweep {
    /// Reads the sweep from the positional arguments, falling back to the default for any
    /// argument that is missing or invalid.
    fn from_args(mut args: impl Iterator<Item = String>) -> Self {
        let default = Self::default();
        let mut next = |name: &str, fallback: f64| match args.next() {
            Some(arg) => match arg.parse::<f64>() {
                Ok(value) if value.is_finite() => value,
                Ok(_) => {
                    eprintln!("the {} must be finite, using {}", name, fallback);
                    fallback
                },
                Err(err) => {
                    eprintln!("invalid {} `{}` ({}), using {}", name, arg, err, fallback);
                    fallback
                },
            },
            None => fallback,
        };

        let start = next("start", default.start);
        let end = next("end", default.end);
        let mut step = next("step", default.step);
        if step <= 0.0 {
            eprintln!("the step must be positive, using {}", default.step);
            step = default.step;
        }

        Self { start, end, step }
    }

    /// Returns the `x` values in the sweep, stopping early after [`MAX_POINTS`] values.
    fn points(self) -> impl Iterator<Item = f64> {
        (0..MAX_POINTS)
            .map(move |i| self.start + f64::from(i) * self.step)
            .take_while(move |x| *x < self.end)
    }
}

/// Prints the rendering of the curve, then a table of its values over the sweep.
fn tabulate(label: &str, y: &Expr, x: &Variable, sweep: Sweep) {
    let rendered = y.render();
    println!("{}: {}", label, rendered);
    println!("X Y");
    for point in sweep.points() {
        x.set_value(point);
        match y.eval() {
            Ok(value) => println!("{} {}", point, value),
            Err(err) => {
                warn!(x = point, %err, "evaluation failed");
                if let Err(io_err) = err.report_to_stderr(label, &rendered) {
                    eprintln!("{}", io_err);
                }
            },
        }
    }
}

/// Prints the simplified form of the curve, or the reason it cannot be simplified.
fn print_simplified(label: &str, y: &Expr) {
    match simplify(y) {
        Ok(simplified) => println!("{} simplified: {}", label, simplified),
        Err(err) => {
            if let Err(io_err) = err.report_to_stderr(label, &y.render()) {
                eprintln!("{}", io_err);
            }
        },
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let mut args = std::env::args();
    args.next();
    let sweep = Sweep::from_args(args);
    debug!(?sweep, "tabulating");

    let x = Variable::new("x");

    // y = 4x - 1
    let y = Expr::sub(
        Expr::mul(custom_constant("4", 4.0), &x),
        custom_constant("1", 1.0),
    );
    tabulate("y", &y, &x, sweep);

    // y2 = 2x^2 - x + 3
    let y2 = Expr::add(
        Expr::sub(
            Expr::mul(custom_constant("2", 2.0), Expr::mul(&x, &x)),
            &x,
        ),
        custom_constant("3", 3.0),
    );
    println!("y2: {}", y2);

    let y2_ = derivative_n(&y2, &x, 1);
    tabulate("y2_", &y2_, &x, sweep);
    print_simplified("y2_", &y2_);

    let y2__ = derivative_n(&y2, &x, 2);
    tabulate("y2__", &y2__, &x, sweep);
    print_simplified("y2__", &y2__);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn args(args: &[&str]) -> impl Iterator<Item = String> {
        args.iter().map(|arg| arg.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn defaults() {
        assert_eq!(Sweep::from_args(args(&[])), Sweep::default());
        let points = Sweep::default().points().collect::<Vec<_>>();
        assert_eq!(points, (0..10).map(f64::from).collect::<Vec<_>>());
    }

    #[test]
    fn custom_range() {
        let sweep = Sweep::from_args(args(&["-1", "1", "0.5"]));
        assert_eq!(sweep, Sweep { start: -1.0, end: 1.0, step: 0.5 });
        assert_eq!(sweep.points().collect::<Vec<_>>(), vec![-1.0, -0.5, 0.0, 0.5]);
    }

    #[test]
    fn invalid_arguments_fall_back() {
        let sweep = Sweep::from_args(args(&["two", "5", "-1"]));
        assert_eq!(sweep, Sweep { start: 0.0, end: 5.0, step: 1.0 });
    }

    #[test]
    fn non_finite_arguments_fall_back() {
        let sweep = Sweep::from_args(args(&["-inf", "inf", "NaN"]));
        assert_eq!(sweep, Sweep::default());

        let sweep = Sweep::from_args(args(&["2", "infinity", "inf"]));
        assert_eq!(sweep, Sweep { start: 2.0, end: 10.0, step: 1.0 });
    }

    #[test]
    fn points_are_capped() {
        let sweep = Sweep::from_args(args(&["0", "1", "1e-300"]));
        assert_eq!(sweep.step, 1e-300);
        assert_eq!(sweep.points().count(), MAX_POINTS as usize);

        let sweep = Sweep { start: 0.0, end: 1e300, step: 1.0 };
        assert_eq!(sweep.points().last(), Some(f64::from(MAX_POINTS - 1)));
    }
}
