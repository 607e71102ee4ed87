//! CSV export of sample sequences
//!
//! # CSV Format
//!
//! ```csv
//! time [s],displacement,velocity,acceleration,potential [J],kinetic [J],total [J],phase [rad]
//! 0,1.5,0,-15,22.5,0,22.5,0
//! ```

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::sample::Sample;

/// Header row written before the samples
pub const CSV_HEADER: [&str; 8] = [
    "time [s]",
    "displacement",
    "velocity",
    "acceleration",
    "potential [J]",
    "kinetic [J]",
    "total [J]",
    "phase [rad]",
];

/// Write `samples` as CSV to any writer
pub fn write_csv<'a, W, I>(writer: W, samples: I) -> Result<()>
where
    W: io::Write,
    I: IntoIterator<Item = &'a Sample>,
{
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_HEADER)?;

    for s in samples {
        wtr.write_record([
            s.time.to_string(),
            s.displacement.to_string(),
            s.velocity.to_string(),
            s.acceleration.to_string(),
            s.potential_energy.to_string(),
            s.kinetic_energy.to_string(),
            s.total_energy.to_string(),
            s.phase.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Save `samples` to a CSV file, appending `.csv` when missing.
///
/// Returns the path actually written.
pub fn save_csv<'a, P, I>(path: P, samples: I) -> Result<PathBuf>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = &'a Sample>,
{
    let path = path.as_ref();
    let path = match path.extension() {
        Some(ext) if ext.eq_ignore_ascii_case("csv") => path.to_path_buf(),
        _ => {
            let mut name = path.as_os_str().to_owned();
            name.push(".csv");
            PathBuf::from(name)
        }
    };

    let file = std::fs::File::create(&path)?;
    write_csv(io::BufWriter::new(file), samples)?;
    debug!(path = %path.display(), "samples written");
    Ok(path)
}
