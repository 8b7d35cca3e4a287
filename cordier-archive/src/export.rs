//! Combined-archive export
//!
//! Writes raw records together with their derived quantities as one
//! comma-separated file. Column names follow the original study's combined
//! archive, so existing plotting scripts can keep reading it.

use crate::derived::{DerivedQuantities, FluidProperties};
use crate::error::Result;
use crate::gen_csv::ArchiveRecord;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const HEADER: &str = "ID,Validity,constrainViolation,efficiency,hemolysis,dsp,rdin,rdout,\
volconstr,volsp,bladenum,dskth,diffangle,diffratio,tonguerd,initialspeed,icemversion,\
speed,presdrop,torque,effrep,hemorep,u1,u2,um1,um2,rpm,head,specWork,druckziffer,\
durchflussziffer,schnelllaufzahl,durchmesserzahl,nqy,nq,ns,specificDia,specificDiaBalje,\
murataRatio";

/// Write records and their derived quantities to any writer
pub fn write_combined<W: Write>(
    writer: &mut W,
    records: &[ArchiveRecord],
    fluid: &FluidProperties,
) -> Result<()> {
    writeln!(writer, "{}", HEADER)?;

    for record in records {
        let d = DerivedQuantities::from_record(record, fluid);
        writeln!(
            writer,
            "{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},\
             {},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{}",
            record.id,
            record.validity,
            record.constraint_violation,
            record.efficiency,
            record.hemolysis,
            record.gap_width,
            record.inner_radius,
            record.outer_radius,
            record.volute_constraint,
            record.volute_gap,
            record.blade_count,
            record.disk_thickness,
            record.diffuser_angle,
            record.diffuser_ratio,
            record.tongue_radius,
            record.initial_speed,
            record.icem_version,
            record.speed,
            record.pressure_drop,
            record.torque,
            record.efficiency_report,
            record.hemolysis_report,
            d.u1,
            d.u2,
            d.um1,
            d.um2,
            d.rpm,
            d.head,
            d.specific_work,
            d.head_coefficient,
            d.flow_coefficient,
            d.tip_speed_ratio,
            d.diameter_number,
            d.nqy,
            d.nq,
            d.ns,
            d.specific_diameter,
            d.specific_diameter_balje,
            d.murata_ratio,
        )?;
    }

    Ok(())
}

/// Write the combined archive to a file
pub fn write_combined_file<P: AsRef<Path>>(
    path: P,
    records: &[ArchiveRecord],
    fluid: &FluidProperties,
) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_combined(&mut writer, records, fluid)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_combined() {
        let records = vec![
            ArchiveRecord {
                id: 7,
                validity: 1,
                efficiency: 0.5,
                inner_radius: 10.0,
                outer_radius: 20.0,
                volute_gap: 1.2,
                gap_width: 0.8,
                speed: 300.0,
                pressure_drop: 9000.0,
                ..Default::default()
            };
            2
        ];
        let fluid = FluidProperties::default();

        let mut buffer = Vec::new();
        write_combined(&mut buffer, &records, &fluid).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID,Validity,constrainViolation"));
        assert!(lines[0].ends_with("specificDiaBalje,murataRatio"));
        assert_eq!(lines[0].split(',').count(), 39);
        assert_eq!(lines[1].split(',').count(), 39);
        assert!(lines[1].starts_with("7,1,0,0.5,"));
    }

    #[test]
    fn test_write_combined_empty() {
        let mut buffer = Vec::new();
        write_combined(&mut buffer, &[], &FluidProperties::default()).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output.lines().count(), 1);
    }
}
