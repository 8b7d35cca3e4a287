//! Raw optimization-archive reading
//!
//! A `Gen.csv` archive holds one design evaluation per line, whitespace
//! delimited, without a header row. The column order is fixed per
//! optimization run but differs between runs, so each file is read against
//! an explicit [`ColumnLayout`]. The two layouts used by the original study
//! are available as constructors; custom layouts can be assembled from
//! [`Column`] values or parsed from header names.

use crate::error::{ArchiveError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// One column of a raw archive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Column {
    Id,
    Validity,
    ConstraintViolation,
    Efficiency,
    Hemolysis,
    GapWidth,
    InnerRadius,
    OuterRadius,
    VoluteConstraint,
    VoluteGap,
    BladeCount,
    DiskThickness,
    DiffuserAngle,
    DiffuserRatio,
    TongueRadius,
    InitialSpeed,
    IcemVersion,
    Speed,
    PressureDrop,
    Torque,
    EfficiencyReport,
    HemolysisReport,
}

impl Column {
    /// Parse a column from its archive header name
    pub fn from_header(header: &str) -> Option<Self> {
        match header.trim() {
            "ID" => Some(Column::Id),
            "Validity" => Some(Column::Validity),
            "constrainViolation" => Some(Column::ConstraintViolation),
            "efficiency" => Some(Column::Efficiency),
            "hemolysis" => Some(Column::Hemolysis),
            "dsp" => Some(Column::GapWidth),
            "rdin" => Some(Column::InnerRadius),
            "rdout" => Some(Column::OuterRadius),
            "volconstr" => Some(Column::VoluteConstraint),
            "volsp" => Some(Column::VoluteGap),
            "bladenum" => Some(Column::BladeCount),
            "dskth" => Some(Column::DiskThickness),
            "diffangle" => Some(Column::DiffuserAngle),
            "diffratio" => Some(Column::DiffuserRatio),
            "tonguerd" => Some(Column::TongueRadius),
            "initialspeed" => Some(Column::InitialSpeed),
            "icemversion" => Some(Column::IcemVersion),
            "speed" => Some(Column::Speed),
            "presdrop" => Some(Column::PressureDrop),
            "torque" => Some(Column::Torque),
            "effrep" => Some(Column::EfficiencyReport),
            "hemorep" => Some(Column::HemolysisReport),
            _ => None,
        }
    }
}

/// Ordered column layout of one optimization run's archive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnLayout {
    columns: Vec<Column>,
}

impl ColumnLayout {
    /// Create a layout from an explicit column order
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Parse a layout from archive header names
    pub fn from_headers(headers: &[&str]) -> Result<Self> {
        let columns = headers
            .iter()
            .map(|header| {
                Column::from_header(header)
                    .ok_or_else(|| ArchiveError::UnknownColumn((*header).to_string()))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { columns })
    }

    /// Layout of the five-parameter optimization run
    pub fn five_parameter() -> Self {
        Self::new(vec![
            Column::Id,
            Column::Validity,
            Column::ConstraintViolation,
            Column::Efficiency,
            Column::Hemolysis,
            Column::GapWidth,
            Column::InnerRadius,
            Column::OuterRadius,
            Column::VoluteConstraint,
            Column::VoluteGap,
            Column::BladeCount,
            Column::DiskThickness,
            Column::DiffuserAngle,
            Column::DiffuserRatio,
            Column::TongueRadius,
            Column::InitialSpeed,
            Column::IcemVersion,
            Column::Speed,
            Column::PressureDrop,
            Column::Torque,
            Column::EfficiencyReport,
            Column::HemolysisReport,
        ])
    }

    /// Layout of the three-parameter optimization run, which swaps the
    /// volute and radius columns relative to the five-parameter run
    pub fn three_parameter() -> Self {
        Self::new(vec![
            Column::Id,
            Column::Validity,
            Column::ConstraintViolation,
            Column::Efficiency,
            Column::Hemolysis,
            Column::GapWidth,
            Column::VoluteConstraint,
            Column::VoluteGap,
            Column::OuterRadius,
            Column::InnerRadius,
            Column::BladeCount,
            Column::DiskThickness,
            Column::DiffuserAngle,
            Column::DiffuserRatio,
            Column::TongueRadius,
            Column::InitialSpeed,
            Column::IcemVersion,
            Column::Speed,
            Column::PressureDrop,
            Column::Torque,
            Column::EfficiencyReport,
            Column::HemolysisReport,
        ])
    }

    /// Number of columns in the layout
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if the layout has no columns
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// The columns in archive order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }
}

/// One design evaluation from an optimization archive
///
/// Lengths (`gap_width`, radii, `volute_gap`) are in millimetres, `speed` in
/// rad/s, `pressure_drop` in Pa, as stored by the optimizer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArchiveRecord {
    pub id: u64,
    pub validity: i64,
    pub constraint_violation: f64,
    pub efficiency: f64,
    pub hemolysis: f64,
    pub gap_width: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub volute_constraint: f64,
    pub volute_gap: f64,
    pub blade_count: f64,
    pub disk_thickness: f64,
    pub diffuser_angle: f64,
    pub diffuser_ratio: f64,
    pub tongue_radius: f64,
    pub initial_speed: f64,
    pub icem_version: f64,
    pub speed: f64,
    pub pressure_drop: f64,
    pub torque: f64,
    pub efficiency_report: f64,
    pub hemolysis_report: f64,
}

impl ArchiveRecord {
    fn set(&mut self, column: Column, value: f64) {
        match column {
            Column::Id => self.id = value as u64,
            Column::Validity => self.validity = value as i64,
            Column::ConstraintViolation => self.constraint_violation = value,
            Column::Efficiency => self.efficiency = value,
            Column::Hemolysis => self.hemolysis = value,
            Column::GapWidth => self.gap_width = value,
            Column::InnerRadius => self.inner_radius = value,
            Column::OuterRadius => self.outer_radius = value,
            Column::VoluteConstraint => self.volute_constraint = value,
            Column::VoluteGap => self.volute_gap = value,
            Column::BladeCount => self.blade_count = value,
            Column::DiskThickness => self.disk_thickness = value,
            Column::DiffuserAngle => self.diffuser_angle = value,
            Column::DiffuserRatio => self.diffuser_ratio = value,
            Column::TongueRadius => self.tongue_radius = value,
            Column::InitialSpeed => self.initial_speed = value,
            Column::IcemVersion => self.icem_version = value,
            Column::Speed => self.speed = value,
            Column::PressureDrop => self.pressure_drop = value,
            Column::Torque => self.torque = value,
            Column::EfficiencyReport => self.efficiency_report = value,
            Column::HemolysisReport => self.hemolysis_report = value,
        }
    }
}

/// Read a whitespace-delimited archive from any buffered reader
///
/// Blank lines are skipped. Every data line must have exactly as many fields
/// as the layout has columns; errors carry the 1-based line number.
pub fn read_archive_from<R: BufRead>(reader: R, layout: &ColumnLayout) -> Result<Vec<ArchiveRecord>> {
    let mut records = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != layout.len() {
            return Err(ArchiveError::ColumnCount {
                line: line_number,
                expected: layout.len(),
                found: fields.len(),
            });
        }

        let mut record = ArchiveRecord::default();
        for (&column, field) in layout.columns().iter().zip(&fields) {
            let value = field.parse::<f64>().map_err(|e| ArchiveError::Parse {
                line: line_number,
                message: format!("invalid number {:?}: {}", field, e),
            })?;
            record.set(column, value);
        }
        records.push(record);
    }

    Ok(records)
}

/// Read a whitespace-delimited archive from a file
pub fn read_archive<P: AsRef<Path>>(path: P, layout: &ColumnLayout) -> Result<Vec<ArchiveRecord>> {
    let file = File::open(path)?;
    read_archive_from(BufReader::new(file), layout)
}

/// Concatenate the records of several optimization runs into one collection
pub fn merge_runs(runs: Vec<Vec<ArchiveRecord>>) -> Vec<ArchiveRecord> {
    runs.into_iter().flatten().collect()
}

/// Keep only valid, constraint-satisfying evaluations
///
/// Drops records with `validity <= 0` or a nonzero constraint violation, the
/// default filter applied before any plotting or envelope extraction.
pub fn retain_valid(records: &mut Vec<ArchiveRecord>) {
    records.retain(|record| record.validity > 0 && record.constraint_violation == 0.0);
}
