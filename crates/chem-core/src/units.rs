// chem-core/src/units.rs

use uom::si::f64::ThermodynamicTemperature as UomThermodynamicTemperature;

// Public canonical unit types (SI, f64)
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

/// Kelvin value of a temperature.
#[inline]
pub fn to_kelvin(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::kelvin;
    t.get::<kelvin>()
}

pub mod constants {
    /// Freezing point of water, the default temperature of a new mixture.
    pub const ZERO_CELSIUS_K: f64 = 273.15;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{Tolerances, nearly_equal};

    #[test]
    fn kelvin_round_trip() {
        let tol = Tolerances::default();
        assert!(nearly_equal(to_kelvin(k(293.15)), 293.15, tol));
        assert!(nearly_equal(
            to_kelvin(k(constants::ZERO_CELSIUS_K)),
            constants::ZERO_CELSIUS_K,
            tol
        ));
    }
}
