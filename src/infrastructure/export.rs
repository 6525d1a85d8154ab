//! CSV export of the week's travel records

use crate::domain::{Session, TravelRecord};
use crate::error::Result;
use chrono::NaiveDate;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Column order of the exported document
pub const CSV_HEADER: [&str; 6] = [
    "day",
    "traveled",
    "destination",
    "distance",
    "cost",
    "emission",
];

/// `travel_data_<name>_<YYYYMMDD>.csv`
///
/// Path separators and whitespace in the name become `_` so the result is
/// always a single file name.
pub fn export_file_name(name: &str, date: NaiveDate) -> String {
    let safe_name: String = name
        .chars()
        .map(|c| {
            if c == '/' || c == '\\' || c.is_whitespace() {
                '_'
            } else {
                c
            }
        })
        .collect();
    format!("travel_data_{}_{}.csv", safe_name, date.format("%Y%m%d"))
}

/// Write every record, traveled or not, as CSV
pub fn write_csv<W: Write>(records: &[TravelRecord], writer: W) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADER)?;
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write the session's records to `dir`, returning the path of the new file
pub fn export_to_dir(session: &Session, dir: &Path, date: NaiveDate) -> Result<PathBuf> {
    let profile = session.require_profile()?;

    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }

    let path = dir.join(export_file_name(profile.name(), date));
    let records = session.store().all();
    let file = fs::File::create(&path)?;
    write_csv(&records, file)?;

    info!(path = %path.display(), rows = records.len(), "exported travel data");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Day, DayAnswer};
    use crate::error::TrackerError;
    use tempfile::TempDir;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 17).unwrap()
    }

    #[test]
    fn test_file_name_embeds_name_and_date() {
        assert_eq!(
            export_file_name("Asha", date()),
            "travel_data_Asha_20250117.csv"
        );
        assert_eq!(
            export_file_name("Asha K/R", date()),
            "travel_data_Asha_K_R_20250117.csv"
        );
    }

    #[test]
    fn test_write_csv_includes_non_traveled_days() {
        let records = vec![
            TravelRecord::traveled(Day::Monday, "Mall", 10.0).unwrap(),
            TravelRecord::not_traveled(Day::Tuesday),
            TravelRecord::traveled(Day::Wednesday, "Old Town, East", 2.5).unwrap(),
        ];

        let mut buffer = Vec::new();
        write_csv(&records, &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "day,traveled,destination,distance,cost,emission");
        assert_eq!(lines[1], "Monday,true,Mall,10.0,750.0,1250.0");
        assert_eq!(lines[2], "Tuesday,false,,0.0,0.0,0.0");
        assert_eq!(lines[3], "Wednesday,true,\"Old Town, East\",2.5,187.5,312.5");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_write_csv_empty_has_header_only() {
        let mut buffer = Vec::new();
        write_csv(&[], &mut buffer).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "day,traveled,destination,distance,cost,emission\n"
        );
    }

    #[test]
    fn test_export_to_dir_writes_full_week() {
        let temp = TempDir::new().unwrap();
        let mut session = Session::new();
        session.setup("Asha", 30, "Swift", "Pune").unwrap();
        for day in Day::ALL {
            let answer = if day < Day::Saturday {
                DayAnswer::Traveled
            } else {
                DayAnswer::NotTraveled
            };
            session.save_day(day, answer, "Office", 6.0).unwrap();
        }

        let out_dir = temp.path().join("exports");
        let path = export_to_dir(&session, &out_dir, date()).unwrap();

        assert_eq!(path, out_dir.join("travel_data_Asha_20250117.csv"));
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 8);
        assert!(content.contains("Saturday,false,,0.0,0.0,0.0"));
        assert!(content.contains("Friday,true,Office,6.0,450.0,750.0"));
    }

    #[test]
    fn test_export_requires_setup() {
        let temp = TempDir::new().unwrap();
        let session = Session::new();
        let err = export_to_dir(&session, temp.path(), date()).unwrap_err();
        assert!(matches!(err, TrackerError::NotSetUp));
    }
}
