//! CSV collaborators for review datasets.
//!
//! All readers and writers are generic over `std::io::Read` /
//! `std::io::Write`, so callers can wire them to files, stdin, or
//! in-memory buffers. Column order never matters; columns are located
//! by header name.

use std::io::{Read, Write};

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{QualityError, Result};
use crate::tier::Tier;

/// One review row: free text and its numeric 1-5 rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    /// Review body.
    pub text: String,
    /// Numeric rating on the 1-5 scale.
    pub rating: f32,
}

/// Reads all review records from a CSV source with a header row.
///
/// The source must carry `text` and `rating` columns; any other columns
/// are ignored.
///
/// # Errors
///
/// Propagates CSV parse failures, including missing columns and
/// unparseable rating cells.
///
/// # Examples
///
/// ```
/// use calificar::dataset::read_reviews;
/// use std::io::Cursor;
///
/// let csv = "text,rating\ngreat food,4.5\nawful wait,1.0\n";
/// let records = read_reviews(Cursor::new(csv)).expect("well-formed csv");
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].text, "great food");
/// ```
pub fn read_reviews<R: Read>(source: R) -> Result<Vec<ReviewRecord>> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(source);
    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: ReviewRecord = row?;
        records.push(record);
    }
    debug!("read {} review records", records.len());
    Ok(records)
}

/// Reads a labeled dataset: review texts paired with their tiers.
///
/// Expects a `text` column and a `rating` column whose cells are tier
/// labels (`low`, `medium`, `high`), as written by
/// [`rewrite_categories`] or [`export_split`].
///
/// # Errors
///
/// Returns [`QualityError::MissingColumn`] when a required column is
/// absent and [`QualityError::UnknownTier`] on an unrecognized label.
pub fn read_labeled<R: Read>(source: R) -> Result<(Vec<String>, Vec<Tier>)> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(source);
    let headers = reader.headers()?.clone();
    let text_idx = column_index(&headers, "text")?;
    let rating_idx = column_index(&headers, "rating")?;

    let mut texts = Vec::new();
    let mut labels = Vec::new();
    for row in reader.records() {
        let row = row?;
        let text = row.get(text_idx).unwrap_or_default();
        let label = row.get(rating_idx).unwrap_or_default();
        texts.push(text.to_string());
        labels.push(label.parse()?);
    }
    debug!("read {} labeled records", texts.len());
    Ok((texts, labels))
}

/// Rewrites a review CSV, replacing each numeric rating with its tier
/// label.
///
/// Every column other than `rating` passes through unchanged, as does
/// the header row and the column order.
///
/// # Errors
///
/// Returns [`QualityError::MissingColumn`] when the source has no
/// `rating` column and [`QualityError::ParseRating`] on a cell that is
/// not a number.
pub fn rewrite_categories<R: Read, W: Write>(source: R, sink: W) -> Result<()> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(source);
    let mut writer = WriterBuilder::new().from_writer(sink);

    let headers = reader.headers()?.clone();
    let rating_idx = column_index(&headers, "rating")?;
    writer.write_record(&headers)?;

    let mut n_rows = 0usize;
    for row in reader.records() {
        let row = row?;
        let mut out = StringRecord::new();
        for (idx, cell) in row.iter().enumerate() {
            if idx == rating_idx {
                let rating: f32 =
                    cell.parse().map_err(|_| QualityError::ParseRating {
                        value: cell.to_string(),
                    })?;
                out.push_field(Tier::from_rating(rating).as_str());
            } else {
                out.push_field(cell);
            }
        }
        writer.write_record(&out)?;
        n_rows += 1;
    }
    writer.flush()?;
    debug!("rewrote {n_rows} rating cells into tier labels");
    Ok(())
}

/// Writes a labeled partition as a two-column CSV with a `text,rating`
/// header, one row per record.
///
/// # Errors
///
/// Returns [`QualityError::DimensionMismatch`] when the sequences
/// differ in length, and propagates write failures.
pub fn export_split<W: Write>(sink: W, texts: &[String], labels: &[Tier]) -> Result<()> {
    if texts.len() != labels.len() {
        return Err(QualityError::DimensionMismatch {
            expected: texts.len(),
            actual: labels.len(),
        });
    }
    let mut writer = WriterBuilder::new().from_writer(sink);
    writer.write_record(["text", "rating"])?;
    for (text, label) in texts.iter().zip(labels.iter()) {
        writer.write_record([text.as_str(), label.as_str()])?;
    }
    writer.flush()?;
    Ok(())
}

fn column_index(headers: &StringRecord, name: &'static str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or(QualityError::MissingColumn { name })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_reviews_ignores_column_order() {
        let csv = "rating,text\n4.5,great food and service\n1.2,never again\n";
        let records = read_reviews(Cursor::new(csv)).expect("well-formed csv");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].rating, 4.5);
        assert_eq!(records[1].text, "never again");
    }

    #[test]
    fn test_read_reviews_ignores_extra_columns() {
        let csv = "id,text,rating\n7,decent lunch,3.0\n";
        let records = read_reviews(Cursor::new(csv)).expect("well-formed csv");
        assert_eq!(
            records,
            vec![ReviewRecord {
                text: "decent lunch".to_string(),
                rating: 3.0
            }]
        );
    }

    #[test]
    fn test_rewrite_categories_replaces_ratings() {
        let csv = "text,rating\nawful,1.0\ndecent,3.0\nsuperb,4.8\n";
        let mut out = Vec::new();
        rewrite_categories(Cursor::new(csv), &mut out).expect("well-formed csv");

        let written = String::from_utf8(out).expect("utf-8 output");
        assert_eq!(
            written,
            "text,rating\nawful,low\ndecent,medium\nsuperb,high\n"
        );
    }

    #[test]
    fn test_rewrite_categories_preserves_other_columns() {
        let csv = "id,rating,text\n1,1.5,bad\n2,4.0,good\n";
        let mut out = Vec::new();
        rewrite_categories(Cursor::new(csv), &mut out).expect("well-formed csv");

        let written = String::from_utf8(out).expect("utf-8 output");
        assert_eq!(written, "id,rating,text\n1,low,bad\n2,high,good\n");
    }

    #[test]
    fn test_rewrite_categories_missing_rating_column() {
        let csv = "text,score\nbad,1.0\n";
        let mut out = Vec::new();
        assert!(matches!(
            rewrite_categories(Cursor::new(csv), &mut out),
            Err(QualityError::MissingColumn { name: "rating" })
        ));
    }

    #[test]
    fn test_rewrite_categories_unparseable_rating() {
        let csv = "text,rating\nbad,not-a-number\n";
        let mut out = Vec::new();
        assert!(matches!(
            rewrite_categories(Cursor::new(csv), &mut out),
            Err(QualityError::ParseRating { .. })
        ));
    }

    #[test]
    fn test_read_labeled_round_trip() {
        let texts = vec!["loved it".to_string(), "meh".to_string()];
        let labels = vec![Tier::High, Tier::Medium];

        let mut out = Vec::new();
        export_split(&mut out, &texts, &labels).expect("matching lengths");

        let (read_texts, read_labels) =
            read_labeled(Cursor::new(out)).expect("round-trips");
        assert_eq!(read_texts, texts);
        assert_eq!(read_labels, labels);
    }

    #[test]
    fn test_read_labeled_unknown_tier() {
        let csv = "text,rating\nfine,excellent\n";
        assert!(matches!(
            read_labeled(Cursor::new(csv)),
            Err(QualityError::UnknownTier { .. })
        ));
    }

    #[test]
    fn test_export_split_length_mismatch() {
        let texts = vec!["only one".to_string()];
        let mut out = Vec::new();
        assert!(matches!(
            export_split(&mut out, &texts, &[]),
            Err(QualityError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_rewrite_categories_through_files() {
        let dir = tempfile::tempdir().expect("temp dir");
        let in_path = dir.path().join("reviews.csv");
        let out_path = dir.path().join("labeled.csv");
        std::fs::write(&in_path, "text,rating\nquiet spot,2.0\n").expect("write input");

        let source = std::fs::File::open(&in_path).expect("open input");
        let sink = std::fs::File::create(&out_path).expect("create output");
        rewrite_categories(source, sink).expect("well-formed csv");

        let written = std::fs::read_to_string(&out_path).expect("read output");
        assert_eq!(written, "text,rating\nquiet spot,medium\n");
    }
}
