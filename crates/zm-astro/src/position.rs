//! Solar declination and the equation of time.
//!
//! Low-precision NOAA series, evaluated at a Julian century `t` (see
//! [`crate::julian`]).  The terms drift slowly enough that one evaluation
//! per day, taken near local solar noon, serves every event of that day.

use zm_core::{Degrees, Real};

/// Geometric mean longitude of the sun, in degrees.
fn mean_longitude(t: Real) -> Degrees {
    (280.466_46 + t * (36_000.769_83 + t * 0.000_303_2)).rem_euclid(360.0)
}

/// Geometric mean anomaly of the sun, in degrees.
fn mean_anomaly(t: Real) -> Degrees {
    357.529_11 + t * (35_999.050_29 - 0.000_153_7 * t)
}

/// Eccentricity of Earth's orbit (dimensionless).
fn eccentricity(t: Real) -> Real {
    0.016_708_634 - t * (0.000_042_037 + 0.000_000_126_7 * t)
}

/// Equation of center, in degrees.
fn equation_of_center(t: Real) -> Degrees {
    let m = mean_anomaly(t).to_radians();
    m.sin() * (1.914_602 - t * (0.004_817 + 0.000_014 * t))
        + (2.0 * m).sin() * (0.019_993 - 0.000_101 * t)
        + (3.0 * m).sin() * 0.000_289
}

/// Apparent longitude of the sun, in degrees.
///
/// True longitude corrected for nutation and aberration.
fn apparent_longitude(t: Real) -> Degrees {
    let true_longitude = mean_longitude(t) + equation_of_center(t);
    let omega = 125.04 - 1_934.136 * t;
    true_longitude - 0.005_69 - 0.004_78 * omega.to_radians().sin()
}

/// Obliquity of the ecliptic corrected for nutation, in degrees.
fn corrected_obliquity(t: Real) -> Degrees {
    let seconds = 21.448 - t * (46.815 + t * (0.000_59 - t * 0.001_813));
    let mean = 23.0 + (26.0 + seconds / 60.0) / 60.0;
    let omega = 125.04 - 1_934.136 * t;
    mean + 0.002_56 * omega.to_radians().cos()
}

/// Solar declination at Julian century `t`, in degrees.
///
/// Ranges over roughly ±23.44° through the year, positive when the sun
/// stands north of the equator.
pub fn declination(t: Real) -> Degrees {
    let epsilon = corrected_obliquity(t).to_radians();
    let lambda = apparent_longitude(t).to_radians();
    (epsilon.sin() * lambda.sin()).asin().to_degrees()
}

/// Equation of time at Julian century `t`, in minutes of clock time.
///
/// Positive when the sundial runs ahead of the mean clock.
pub fn equation_of_time(t: Real) -> Real {
    let epsilon = corrected_obliquity(t).to_radians();
    let l0 = mean_longitude(t).to_radians();
    let m = mean_anomaly(t).to_radians();
    let e = eccentricity(t);
    let y = (epsilon / 2.0).tan().powi(2);

    let radians = y * (2.0 * l0).sin() - 2.0 * e * m.sin()
        + 4.0 * e * y * m.sin() * (2.0 * l0).cos()
        - 0.5 * y * y * (4.0 * l0).sin()
        - 1.25 * e * e * (2.0 * m).sin();
    radians.to_degrees() * 4.0
}
