use super::*;
use crate::config::DEFAULT_HEADER;
use rust_xlsxwriter::Workbook;
use tempfile::TempDir;

fn write_workbook(dir: &std::path::Path, header: &[&str]) -> PathBuf {
    let path = dir.join("prices.xlsx");
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("tyres").unwrap();
    for (col, label) in header.iter().enumerate() {
        worksheet.write_string(2, col as u16, *label).unwrap();
    }
    let row = ["Мото", "Лето", "120/70 R17 Michelin Pilot Road 58W", "6", "8200", "Франция", "17"];
    for (col, cell) in row.iter().enumerate() {
        worksheet.write_string(3, col as u16, *cell).unwrap();
    }
    workbook.save(&path).unwrap();
    path
}

fn config(dir: &std::path::Path, input: PathBuf) -> ImportConfig {
    ImportConfig {
        input,
        sheet: "tyres".to_string(),
        database: dir.join("tires.db"),
        ..Default::default()
    }
}

// =========================================================================
// import
// =========================================================================

#[test]
fn test_import_dry_run() {
    let dir = TempDir::new().unwrap();
    let input = write_workbook(dir.path(), &DEFAULT_HEADER);

    let summary = import(config(dir.path(), input), true, None, false, true).unwrap();

    assert_eq!(summary.header_row, Some(2));
    assert_eq!(summary.records, 1);
    assert!(!dir.path().join("tires.db").exists());
}

#[test]
fn test_import_dry_run_writes_records_yaml() {
    let dir = TempDir::new().unwrap();
    let input = write_workbook(dir.path(), &DEFAULT_HEADER);
    let output = dir.path().join("records.yaml");

    let summary =
        import(config(dir.path(), input), true, Some(output.clone()), false, false).unwrap();

    assert_eq!(summary.records, 1);
    let yaml = std::fs::read_to_string(&output).unwrap();
    assert!(yaml.contains("category: BIKE"));
    assert!(yaml.contains("brand_name: Michelin"));
    assert!(yaml.contains("2017-01-01"));
    assert!(!dir.path().join("tires.db").exists());
}

#[test]
fn test_import_to_database() {
    let dir = TempDir::new().unwrap();
    let input = write_workbook(dir.path(), &DEFAULT_HEADER);

    let summary = import(config(dir.path(), input), false, None, false, false).unwrap();

    assert_eq!(summary.records, 1);
    let conn = rusqlite::Connection::open(dir.path().join("tires.db")).unwrap();
    let brand: String = conn
        .query_row("SELECT brand_name FROM tires", [], |r| r.get(0))
        .unwrap();
    assert_eq!(brand, "Michelin");
}

#[test]
fn test_import_without_header_is_empty_unless_strict() {
    let dir = TempDir::new().unwrap();
    let input = write_workbook(dir.path(), &["Type", "Season", "Name", "Stock", "Price", "Country", "Year"]);

    let summary = import(config(dir.path(), input.clone()), true, None, false, false).unwrap();
    assert_eq!(summary.header_row, None);
    assert_eq!(summary.records, 0);

    let result = import(config(dir.path(), input), true, None, true, false);
    assert!(matches!(result, Err(crate::ImportError::HeaderNotFound(_))));
}

#[test]
fn test_import_invalid_config() {
    let dir = TempDir::new().unwrap();
    let input = write_workbook(dir.path(), &DEFAULT_HEADER);
    let mut config = config(dir.path(), input);
    config.table = "bad name".to_string();

    assert!(import(config, true, None, false, false).is_err());
}

// =========================================================================
// decode / classify / sheets
// =========================================================================

#[test]
fn test_decode_command() {
    let texts = vec!["215/60 R16 95H".to_string(), String::new()];
    assert!(decode(texts.clone(), false).is_ok());
    assert!(decode(texts, true).is_ok());
}

#[test]
fn test_classify_command() {
    assert!(classify(vec!["Мото".to_string()]).is_ok());
}

#[test]
fn test_sheets_command() {
    let dir = TempDir::new().unwrap();
    let input = write_workbook(dir.path(), &DEFAULT_HEADER);

    assert!(sheets(input).is_ok());
    assert!(sheets(dir.path().join("missing.xlsx")).is_err());
}
