// ak-core/src/units.rs

use uom::si::f64::{
    DynamicViscosity as UomDynamicViscosity, Length as UomLength, Pressure as UomPressure,
    ThermodynamicTemperature as UomThermodynamicTemperature, Time as UomTime,
    Volume as UomVolume,
};

// Public canonical unit types (SI, f64)
pub type DynVisc = UomDynamicViscosity;
pub type Length = UomLength;
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;
pub type Time = UomTime;
pub type Volume = UomVolume;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn m3(v: f64) -> Volume {
    use uom::si::volume::cubic_meter;
    Volume::new::<cubic_meter>(v)
}

#[inline]
pub fn s(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

#[inline]
pub fn pa_s(v: f64) -> DynVisc {
    use uom::si::dynamic_viscosity::pascal_second;
    DynVisc::new::<pascal_second>(v)
}

/// Temperature in kelvin as a plain SI number.
#[inline]
pub fn kelvin_of(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::kelvin;
    t.get::<kelvin>()
}

/// Length in nanometres.
#[inline]
pub fn nanometres_of(l: Length) -> f64 {
    use uom::si::length::nanometer;
    l.get::<nanometer>()
}

/// Dynamic viscosity in µPa·s.
#[inline]
pub fn micropascal_seconds_of(mu: DynVisc) -> f64 {
    use uom::si::dynamic_viscosity::pascal_second;
    mu.get::<pascal_second>() * 1e6
}

/// Fixed physical constants. Not configurable per call.
pub mod constants {
    /// Ideal gas constant [J/(mol·K)]
    pub const GAS_CONSTANT: f64 = 8.314_462_618_153_24;
    /// Avogadro's number [1/mol]
    pub const AVOGADRO: f64 = 6.022_140_76e23;
    /// Boltzmann constant [J/K]
    pub const BOLTZMANN: f64 = 1.380_649e-23;
    /// Reference temperature for tabulated viscosities [K]
    pub const T_REF_K: f64 = 298.15;
}
