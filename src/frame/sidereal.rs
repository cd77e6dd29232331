//! Time scales and the equatorial <-> horizontal conversion.

use libm::{asin, atan2, cos, sin};

use crate::config::units::Degrees;
use crate::config::ObserverPosition;

use super::coordinates::{EquatorialCoordinates, HorizontalCoordinates};

/// Julian date of the Unix epoch.
pub const UNIX_EPOCH_JULIAN_DATE: f64 = 2_440_587.5;

/// Julian date of J2000.0.
pub const J2000: f64 = 2_451_545.0;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian date for a Unix timestamp in seconds.
#[inline]
pub fn julian_date_from_unix(unix_seconds: f64) -> f64 {
    unix_seconds / SECONDS_PER_DAY + UNIX_EPOCH_JULIAN_DATE
}

/// Greenwich mean sidereal time (Meeus, Astronomical Algorithms 12.4).
pub fn greenwich_mean_sidereal_time(julian_date: f64) -> Degrees {
    let d = julian_date - J2000;
    let t = d / 36_525.0;
    let gmst = 280.460_618_37 + 360.985_647_366_29 * d + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    Degrees(gmst).wrapped()
}

/// Local mean sidereal time for an east-positive longitude.
pub fn local_sidereal_time(julian_date: f64, longitude: Degrees) -> Degrees {
    (greenwich_mean_sidereal_time(julian_date) + longitude).wrapped()
}

/// Where an equatorial position appears in the observer's sky.
pub fn equatorial_to_horizontal(
    coords: EquatorialCoordinates,
    observer: &ObserverPosition,
    julian_date: f64,
) -> HorizontalCoordinates {
    let lst = local_sidereal_time(julian_date, observer.longitude);
    let hour_angle = (lst - coords.right_ascension.to_degrees()).to_radians();
    let dec = coords.declination.to_radians();
    let lat = observer.latitude.to_radians();

    let sin_alt = sin(lat) * sin(dec) + cos(lat) * cos(dec) * cos(hour_angle);
    let altitude = asin(sin_alt.clamp(-1.0, 1.0));
    let azimuth = atan2(
        -cos(dec) * sin(hour_angle),
        sin(dec) * cos(lat) - cos(dec) * sin(lat) * cos(hour_angle),
    );

    HorizontalCoordinates {
        altitude: Degrees::from_radians(altitude),
        azimuth: Degrees::from_radians(azimuth).wrapped(),
    }
}

/// Which equatorial position the observer sees at a horizontal position.
pub fn horizontal_to_equatorial(
    coords: HorizontalCoordinates,
    observer: &ObserverPosition,
    julian_date: f64,
) -> EquatorialCoordinates {
    let lst = local_sidereal_time(julian_date, observer.longitude);
    let alt = coords.altitude.to_radians();
    let az = coords.azimuth.to_radians();
    let lat = observer.latitude.to_radians();

    let declination = asin((sin(lat) * sin(alt) + cos(lat) * cos(alt) * cos(az)).clamp(-1.0, 1.0));
    let hour_angle = atan2(
        -sin(az) * cos(alt),
        cos(lat) * sin(alt) - sin(lat) * cos(alt) * cos(az),
    );

    let right_ascension = (lst - Degrees::from_radians(hour_angle)).wrapped().to_hours();
    EquatorialCoordinates {
        right_ascension: right_ascension.wrapped(),
        declination: Degrees::from_radians(declination),
    }
}
