use cytoform_core::BodyStats;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

pub fn render(name: &str, stats: &BodyStats, format: ReportFormat) -> anyhow::Result<String> {
    match format {
        ReportFormat::Text => Ok(render_text(name, stats)),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(stats)?),
    }
}

/// Human readable summary. Map entries are sorted so output is stable.
#[must_use]
pub fn render_text(name: &str, stats: &BodyStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Body plan: {name}");
    let _ = writeln!(out, "  Speed:            {:.3}", stats.speed);
    let d = stats.maximum_speed_direction;
    let _ = writeln!(out, "  Best direction:   ({:.3}, {:.3}, {:.3})", d.x, d.y, d.z);
    match stats.readable_rotation_speed {
        Some(readable) => {
            let _ = writeln!(
                out,
                "  Rotation:         {:.3} (display {:.1})",
                stats.rotation_speed, readable
            );
        }
        None => {
            let _ = writeln!(out, "  Rotation:         {:.3} (undefined)", stats.rotation_speed);
        }
    }
    let _ = writeln!(out, "  Density:          {:.1}", stats.average_density);
    let _ = writeln!(out, "  Mass:             {:.1}", stats.mass);
    let _ = writeln!(out, "  Storage:          {:.1}", stats.nominal_capacity);

    let mut specific: Vec<_> = stats.specific_capacity.iter().collect();
    specific.sort_by_key(|(compound, _)| **compound);
    for (compound, capacity) in specific {
        let _ = writeln!(out, "    {compound:<16}{capacity:.1}");
    }

    let _ = writeln!(out, "  Digestion speed:  {:.2}", stats.digestion_speed);
    let mut efficiencies: Vec<_> = stats.digestion_efficiencies.iter().collect();
    efficiencies.sort_by_key(|(enzyme, _)| **enzyme);
    for (enzyme, efficiency) in efficiencies {
        let _ = writeln!(out, "    {enzyme:<16}{:.0}%", efficiency * 100.0);
    }
    out
}
