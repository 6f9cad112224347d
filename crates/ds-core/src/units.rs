// ds-core/src/units.rs

use uom::si::f64::{
    AngularVelocity as UomAngularVelocity, Length as UomLength, Mass as UomMass,
    Ratio as UomRatio, Time as UomTime, Velocity as UomVelocity,
};

// Public canonical unit types (SI, f64)
pub type AngularVelocity = UomAngularVelocity;
pub type Length = UomLength;
pub type Mass = UomMass;
pub type Ratio = UomRatio;
pub type Time = UomTime;
pub type Velocity = UomVelocity;

#[inline]
pub fn kg(v: f64) -> Mass {
    use uom::si::mass::kilogram;
    Mass::new::<kilogram>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

#[inline]
pub fn s(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

#[inline]
pub fn rad_per_s(v: f64) -> AngularVelocity {
    use uom::si::angular_velocity::radian_per_second;
    AngularVelocity::new::<radian_per_second>(v)
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}
