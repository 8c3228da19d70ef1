//! Core units, constants, and shared primitives for the Kepler orbit calculator workspace.

pub mod body;

pub use body::{ConstantsError, PhysicalConstants};

/// Physical constants expressed in SI units (unless stated otherwise).
pub mod constants {
    /// Earth standard gravitational parameter, WGS-84 (m³/s²).
    pub const MU_EARTH_M3_S2: f64 = 3.986_004_418e14;
    /// Earth equatorial radius, WGS-84 (m).
    pub const R_EARTH_M: f64 = 6_378_137.0;
    /// Lunar standard gravitational parameter (m³/s²).
    pub const MU_MOON_M3_S2: f64 = 4.904_869_5e12;
    /// Lunar mean radius (m).
    pub const R_MOON_M: f64 = 1_737_400.0;
    /// Altitude below which Earth's atmosphere makes an unpowered orbit implausible (km).
    pub const EARTH_ATMOSPHERE_LIMIT_KM: f64 = 120.0;
}

/// Basic unit conversion helpers.
pub mod units {
    /// Convert kilometres to metres.
    #[inline]
    pub fn km_to_m(v: f64) -> f64 {
        v * 1_000.0
    }

    /// Convert metres to kilometres.
    #[inline]
    pub fn m_to_km(v: f64) -> f64 {
        v / 1_000.0
    }

    /// Convert metres per second to kilometres per second.
    #[inline]
    pub fn ms_to_kms(v: f64) -> f64 {
        v / 1_000.0
    }

    /// Convert kilometres per second to metres per second.
    #[inline]
    pub fn kms_to_ms(v: f64) -> f64 {
        v * 1_000.0
    }

    /// Convert a gravitational parameter from km³/s² to m³/s².
    #[inline]
    pub fn km3_to_m3(v: f64) -> f64 {
        v * 1.0e9
    }
}

/// Lightweight time utilities shared across crates.
pub mod time {
    /// Seconds per minute.
    pub const SECONDS_PER_MINUTE: f64 = 60.0;

    /// Convert seconds to minutes.
    #[inline]
    pub fn seconds_to_minutes(seconds: f64) -> f64 {
        seconds / SECONDS_PER_MINUTE
    }
}

#[cfg(test)]
mod tests {
    use super::{time, units};

    #[test]
    fn conversions_invert() {
        assert_eq!(units::m_to_km(units::km_to_m(400.0)), 400.0);
        assert!((units::ms_to_kms(units::kms_to_ms(7.67)) - 7.67).abs() < 1e-12);
        assert!((units::km3_to_m3(398_600.4418) - 3.986_004_418e14).abs() < 1.0);
        assert_eq!(time::seconds_to_minutes(5_400.0), 90.0);
    }
}
