//! Derived hydraulic quantities
//!
//! Dimensionless and dimensional quantities computed per design evaluation:
//! pressure head, specific work, blade velocities, head/flow coefficients,
//! specific speeds and diameters (the Cordier diagram axes), tip-speed
//! ratio, diameter number and the Murata gap ratio.
//!
//! Archive lengths are stored in millimetres and are converted to metres
//! here; speeds are rad/s, pressure differences Pa.

use crate::gen_csv::ArchiveRecord;
use cordier_core::{Point3d, PointCloud3d};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Working fluid and operating point of the design study
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FluidProperties {
    /// Fluid density in kg/m³
    pub density: f64,
    /// Gravitational acceleration in m/s²
    pub gravity: f64,
    /// Volume flow rate in m³/s
    pub volume_flow_rate: f64,
}

impl FluidProperties {
    /// Properties with a flow rate given in litres per minute
    pub fn with_flow_lpm(density: f64, gravity: f64, flow_lpm: f64) -> Self {
        Self {
            density,
            gravity,
            volume_flow_rate: flow_lpm / 60.0 / 1000.0,
        }
    }
}

impl Default for FluidProperties {
    /// The original study's operating point: blood at 5 L/min
    fn default() -> Self {
        Self::with_flow_lpm(1065.0, 9.81, 5.0)
    }
}

/// Rotational speed in rpm from angular velocity in rad/s
pub fn rpm_from_omega(omega: f64) -> f64 {
    omega / (2.0 * PI) * 60.0
}

/// Pressure head in metres from a pressure difference in Pa
pub fn pressure_head(pressure_diff: f64, fluid: &FluidProperties) -> f64 {
    pressure_diff / (fluid.gravity * fluid.density)
}

/// Specific energy in J/kg from a head in metres
pub fn specific_work(head: f64, gravity: f64) -> f64 {
    gravity * head
}

/// Circumferential blade velocity at a radius
pub fn circumferential_velocity(omega: f64, radius: f64) -> f64 {
    omega * radius
}

/// Meridian velocity through an annular gap
pub fn meridian_velocity(gap: f64, radius: f64, volume_flow: f64) -> f64 {
    volume_flow / (2.0 * PI * radius * gap)
}

/// Head coefficient ("Druckziffer")
pub fn head_coefficient(head: f64, outer_radius: f64, omega: f64, gravity: f64) -> f64 {
    head / (circumferential_velocity(omega, outer_radius).powi(2) / (2.0 * gravity))
}

/// Flow coefficient ("Durchflussziffer")
pub fn flow_coefficient(meridian: f64, circumferential: f64) -> f64 {
    meridian / circumferential
}

/// Tip-speed ratio ("Schnelllaufzahl")
pub fn tip_speed_ratio(head_coeff: f64, flow_coeff: f64) -> f64 {
    flow_coeff.sqrt() / head_coeff.powf(0.75)
}

/// Diameter number ("Durchmesserzahl")
pub fn diameter_number(head_coeff: f64, flow_coeff: f64) -> f64 {
    head_coeff.powf(0.25) / flow_coeff.sqrt()
}

/// Specific speed N_qy over the specific work
pub fn specific_speed_nqy(omega: f64, volume_flow: f64, spec_work: f64) -> f64 {
    omega / (2.0 * PI) * volume_flow.sqrt() / spec_work.powf(0.75)
}

/// Specific speed N_q over the head, with the speed in rpm
pub fn specific_speed_nq(rpm: f64, volume_flow: f64, head: f64) -> f64 {
    rpm * volume_flow.sqrt() / head.powf(0.75)
}

/// Specific speed n_s according to Balje
pub fn specific_speed_ns(omega: f64, volume_flow: f64, head: f64, gravity: f64) -> f64 {
    omega * volume_flow.sqrt() / (gravity * head).powf(0.75)
}

/// Specific diameter over the plain head
pub fn specific_diameter(radius: f64, head: f64, volume_flow: f64) -> f64 {
    2.0 * radius * head.powf(0.25) / volume_flow.sqrt()
}

/// Specific diameter d_s according to Balje
pub fn specific_diameter_balje(radius: f64, head: f64, volume_flow: f64, gravity: f64) -> f64 {
    2.0 * radius * (gravity * head).powf(0.25) / volume_flow.sqrt()
}

/// Murata gap ratio
pub fn murata_ratio(gap: f64, inner_radius: f64, omega: f64, volume_flow: f64) -> f64 {
    inner_radius * (2.0 * PI * gap * omega / volume_flow).sqrt()
}

/// The full derived-quantity set for one design evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedQuantities {
    /// Circumferential velocity at the inner radius
    pub u1: f64,
    /// Circumferential velocity at the outer radius
    pub u2: f64,
    /// Meridian velocity at the inner radius
    pub um1: f64,
    /// Meridian velocity at the outer radius
    pub um2: f64,
    pub rpm: f64,
    /// Pressure head in metres
    pub head: f64,
    /// Specific energy in J/kg
    pub specific_work: f64,
    pub head_coefficient: f64,
    pub flow_coefficient: f64,
    pub tip_speed_ratio: f64,
    pub diameter_number: f64,
    pub nqy: f64,
    pub nq: f64,
    /// Balje specific speed, abscissa of the Cordier diagram
    pub ns: f64,
    pub specific_diameter: f64,
    /// Balje specific diameter, ordinate of the Cordier diagram
    pub specific_diameter_balje: f64,
    pub murata_ratio: f64,
}

impl DerivedQuantities {
    /// Evaluate the full quantity set for one archive record
    pub fn from_record(record: &ArchiveRecord, fluid: &FluidProperties) -> Self {
        let flow = fluid.volume_flow_rate;
        // mm to m
        let inner_radius = record.inner_radius / 1000.0;
        let outer_radius = record.outer_radius / 1000.0;
        let volute_gap = record.volute_gap / 1000.0;
        let gap_width = record.gap_width / 1000.0;

        let u1 = circumferential_velocity(record.speed, inner_radius);
        let u2 = circumferential_velocity(record.speed, outer_radius);
        let um1 = meridian_velocity(volute_gap, inner_radius, flow);
        let um2 = meridian_velocity(volute_gap, outer_radius, flow);

        let rpm = rpm_from_omega(record.speed);
        let head = pressure_head(record.pressure_drop, fluid);
        let spec_work = specific_work(head, fluid.gravity);

        let psi = head_coefficient(head, outer_radius, record.speed, fluid.gravity);
        let phi = flow_coefficient(um2, u2);

        Self {
            u1,
            u2,
            um1,
            um2,
            rpm,
            head,
            specific_work: spec_work,
            head_coefficient: psi,
            flow_coefficient: phi,
            tip_speed_ratio: tip_speed_ratio(psi, phi),
            diameter_number: diameter_number(psi, phi),
            nqy: specific_speed_nqy(record.speed, flow, spec_work),
            nq: specific_speed_nq(rpm, flow, head),
            ns: specific_speed_ns(record.speed, flow, head, fluid.gravity),
            specific_diameter: specific_diameter(outer_radius, head, flow),
            specific_diameter_balje: specific_diameter_balje(
                outer_radius,
                head,
                flow,
                fluid.gravity,
            ),
            murata_ratio: murata_ratio(gap_width, inner_radius, record.speed, flow),
        }
    }
}

/// Map each record to its Cordier coordinates (n_s, d_s Balje, efficiency)
///
/// The resulting cloud is what the envelope extraction consumes; the point
/// at index `i` corresponds to `records[i]`.
pub fn cordier_point_cloud(records: &[ArchiveRecord], fluid: &FluidProperties) -> PointCloud3d {
    records
        .iter()
        .map(|record| {
            let derived = DerivedQuantities::from_record(record, fluid);
            Point3d::new(
                derived.ns,
                derived.specific_diameter_balje,
                record.efficiency,
            )
        })
        .collect()
}
