//! CSV ingest boundary: load and clean an applicant dataset.
//!
//! The engine itself never touches I/O; this module turns a HMDA-shaped CSV
//! into a validated [`ApplicantTable`]. Cleaning mirrors the upstream data
//! contract: headers are case-insensitive, the hispanic ethnicity marker
//! overrides the race column, race and sex are title-cased and combined into
//! the subgroup label, and rows whose debt-to-income ratio cannot be parsed
//! are skipped (counted, logged, never fatal).

use crate::score;
use crate::table::{Applicant, ApplicantTable};
use fl_common::{ApplicantId, Error, Result, SubgroupKey};
use std::collections::HashMap;
use std::path::Path;

/// Ethnicity value that overrides the race column.
const HISPANIC_MARKER: &str = "hispanic or latino";

/// A loaded table plus ingest accounting.
#[derive(Debug)]
pub struct Ingested {
    pub table: ApplicantTable,
    /// Data rows seen in the file, including skipped ones.
    pub rows_read: usize,
    /// Rows dropped because a field was malformed or unparseable.
    pub rows_skipped: usize,
}

/// Load applicants from a CSV file.
///
/// Required columns (any casing): `derived_ethnicity`, `derived_race`,
/// `derived_sex`, `debt_to_income_ratio`. An `id` column is honored when
/// present; otherwise ids are the 1-based row position. The creditworthiness
/// score is derived from the debt-to-income ratio via
/// [`score::dti_rating`].
pub fn load_applicants(path: &Path) -> Result<Ingested> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|err| Error::Ingest(format!("{}: {err}", path.display())))?;

    let headers = reader
        .headers()
        .map_err(|err| Error::Ingest(format!("{}: {err}", path.display())))?
        .clone();
    let columns: HashMap<String, usize> = headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (name.trim().to_lowercase(), idx))
        .collect();

    let column = |name: &str| -> Result<usize> {
        columns
            .get(name)
            .copied()
            .ok_or_else(|| Error::MissingColumn {
                column: name.to_string(),
            })
    };
    let ethnicity_col = column("derived_ethnicity")?;
    let race_col = column("derived_race")?;
    let sex_col = column("derived_sex")?;
    let dti_col = column("debt_to_income_ratio")?;
    let id_col = columns.get("id").copied();

    let mut applicants = Vec::new();
    let mut rows_read = 0usize;
    let mut rows_skipped = 0usize;

    for (row_idx, record) in reader.records().enumerate() {
        rows_read += 1;
        let row = row_idx + 1;

        let record = match record {
            Ok(record) => record,
            Err(err) => {
                rows_skipped += 1;
                tracing::debug!(row, %err, "skipping malformed row");
                continue;
            }
        };

        let dti = match record.get(dti_col).and_then(|raw| raw.parse::<f64>().ok()) {
            Some(dti) => dti,
            None => {
                rows_skipped += 1;
                tracing::debug!(row, "skipping row with unparseable debt_to_income_ratio");
                continue;
            }
        };
        let score = match score::dti_rating(dti) {
            Some(score) => score,
            None => {
                rows_skipped += 1;
                tracing::debug!(row, dti, "skipping row with non-finite debt_to_income_ratio");
                continue;
            }
        };

        let id = match id_col {
            Some(col) => match record.get(col).and_then(|raw| raw.parse::<u64>().ok()) {
                Some(id) => id,
                None => {
                    rows_skipped += 1;
                    tracing::debug!(row, "skipping row with unparseable id");
                    continue;
                }
            },
            None => row as u64,
        };

        let ethnicity = record.get(ethnicity_col).unwrap_or("").trim().to_lowercase();
        let race = if ethnicity == HISPANIC_MARKER {
            "Hispanic".to_string()
        } else {
            title_case(record.get(race_col).unwrap_or(""))
        };
        let sex = title_case(record.get(sex_col).unwrap_or(""));

        applicants.push(Applicant {
            id: ApplicantId(id),
            score,
            subgroup: SubgroupKey::new(format!("{race} {sex}")),
        });
    }

    if rows_skipped > 0 {
        tracing::warn!(rows_skipped, rows_read, "dropped unparseable applicant rows");
    }

    let table = ApplicantTable::new(applicants)?;
    tracing::info!(
        applicants = table.len(),
        subgroups = table.subgroup_count(),
        "applicant table loaded"
    );

    Ok(Ingested {
        table,
        rows_read,
        rows_skipped,
    })
}

/// Capitalize the first letter of each whitespace-separated word, lowercasing
/// the rest ("BLACK OR AFRICAN AMERICAN" → "Black Or African American").
fn title_case(value: &str) -> String {
    value
        .trim()
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn load(contents: &str) -> Result<Ingested> {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        load_applicants(file.path())
    }

    #[test]
    fn loads_and_labels_subgroups() {
        let ingested = load(
            "id,derived_ethnicity,derived_race,derived_sex,debt_to_income_ratio\n\
             1,Not Hispanic or Latino,WHITE,MALE,10\n\
             2,hispanic or latino,White,Female,20\n",
        )
        .unwrap();

        assert_eq!(ingested.rows_read, 2);
        assert_eq!(ingested.rows_skipped, 0);

        let applicants = ingested.table.applicants();
        assert_eq!(applicants[0].subgroup.as_str(), "White Male");
        // Ethnicity marker overrides the race column.
        assert_eq!(applicants[1].subgroup.as_str(), "Hispanic Female");
        assert!((applicants[0].score - 0.8).abs() < 1e-12);
        assert!((applicants[1].score - 0.6).abs() < 1e-12);
    }

    #[test]
    fn headers_are_case_insensitive() {
        let ingested = load(
            "ID,Derived_Ethnicity,DERIVED_RACE,derived_sex,Debt_To_Income_Ratio\n\
             5,Not Hispanic,Asian,Male,25\n",
        )
        .unwrap();
        assert_eq!(ingested.table.applicants()[0].id, ApplicantId(5));
    }

    #[test]
    fn skips_rows_with_bad_ratios() {
        let ingested = load(
            "derived_ethnicity,derived_race,derived_sex,debt_to_income_ratio\n\
             Not Hispanic,White,Male,not-a-number\n\
             Not Hispanic,White,Male,30\n\
             Not Hispanic,White,Male,\n",
        )
        .unwrap();
        assert_eq!(ingested.rows_read, 3);
        assert_eq!(ingested.rows_skipped, 2);
        assert_eq!(ingested.table.len(), 1);
    }

    #[test]
    fn synthesizes_ids_from_row_position() {
        let ingested = load(
            "derived_ethnicity,derived_race,derived_sex,debt_to_income_ratio\n\
             Not Hispanic,White,Male,10\n\
             Not Hispanic,Black,Female,20\n",
        )
        .unwrap();
        let ids: Vec<u64> = ingested
            .table
            .applicants()
            .iter()
            .map(|a| a.id.0)
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn missing_required_column_fails() {
        let err = load("derived_ethnicity,derived_race,derived_sex\nx,y,z\n").unwrap_err();
        assert!(
            matches!(err, Error::MissingColumn { ref column } if column == "debt_to_income_ratio")
        );
    }

    #[test]
    fn duplicate_ids_fail_table_validation() {
        let err = load(
            "id,derived_ethnicity,derived_race,derived_sex,debt_to_income_ratio\n\
             1,Not Hispanic,White,Male,10\n\
             1,Not Hispanic,Black,Female,20\n",
        )
        .unwrap_err();
        assert!(matches!(err, Error::DuplicateId { .. }));
    }

    #[test]
    fn title_case_normalizes_words() {
        assert_eq!(title_case("BLACK OR AFRICAN AMERICAN"), "Black Or African American");
        assert_eq!(title_case("  joint  "), "Joint");
        assert_eq!(title_case(""), "");
    }
}
