use crate::{Command, CsvToolError, CsvToolResult, Processor, Row};

const PEOPLE_CSV: &str = include_str!("../test/people.csv");
const EDIT_SCRIPT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/test/edit.csvt");

fn run(processor: &mut Processor, src: &str) -> CsvToolResult<()> {
    processor.execute_command(&src.parse::<Command>()?)
}

fn row(pairs: &[(&str, &str)]) -> Row {
    pairs.iter().copied().collect()
}

#[test]
fn ingest_fixture() -> CsvToolResult<()> {
    let mut processor = Processor::new();
    processor.import_from_bytes(PEOPLE_CSV.as_bytes())?;

    assert_eq!(processor.grid().get_headers(), &["name", "age"]);
    assert_eq!(
        processor.grid().get_rows(),
        &[
            row(&[("name", "Alice"), ("age", "30")]),
            row(&[("name", "Bob"), ("age", "25")]),
        ]
    );
    Ok(())
}

#[test]
fn command_session() -> CsvToolResult<()> {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let target = dir.path().join("out.csv");
    let mut processor = Processor::new();
    processor.import_from_bytes(PEOPLE_CSV.as_bytes())?;

    run(&mut processor, "edit 0,age 31")?;
    run(&mut processor, "e 1,0 'Bob Jr'")?;
    run(&mut processor, "draft name 'Doe, John'")?;
    run(&mut processor, "print-draft")?;
    let incomplete = run(&mut processor, "add-row");
    assert!(matches!(incomplete, Err(CsvToolError::Validation(_))));
    assert_eq!(processor.grid().get_row_count(), 2);

    run(&mut processor, "d 1 ''")?;
    run(&mut processor, "add-row")?;
    run(&mut processor, "print")?;
    run(&mut processor, &format!("export {}", target.display()))?;

    assert_eq!(
        std::fs::read_to_string(&target).expect("Failed to read export"),
        "name,age\r\nAlice,31\r\nBob Jr,25\r\n\"Doe, John\",\r\n"
    );
    Ok(())
}

#[test]
fn command_errors_leave_data_untouched() -> CsvToolResult<()> {
    let mut processor = Processor::new();
    processor.import_from_bytes(PEOPLE_CSV.as_bytes())?;

    assert!(matches!(
        run(&mut processor, "delete-row 2"),
        Err(CsvToolError::OutOfRange { index: 2, len: 2 })
    ));
    assert!(matches!(
        run(&mut processor, "edit 0,email x"),
        Err(CsvToolError::InvalidColumn(_))
    ));
    assert!(matches!(
        run(&mut processor, "edit zero,age 1"),
        Err(CsvToolError::Command(_))
    ));
    assert!(matches!(
        run(&mut processor, "import does/not/exist.csv"),
        Err(CsvToolError::Io(_))
    ));
    assert!(matches!(
        run(&mut processor, "delete-row"),
        Err(CsvToolError::Command(_))
    ));

    assert_eq!(processor.get_data_as_text()?, "name,age\r\nAlice,30\r\nBob,25\r\n");
    Ok(())
}

#[test]
fn clear_draft_discards_values() -> CsvToolResult<()> {
    let mut processor = Processor::new();
    processor.import_from_bytes(PEOPLE_CSV.as_bytes())?;

    run(&mut processor, "draft name Carol")?;
    run(&mut processor, "clear-draft")?;
    run(&mut processor, "draft age 41")?;

    assert_eq!(processor.grid().get_draft(), &row(&[("age", "41")]));
    Ok(())
}

#[test]
fn execute_script() -> CsvToolResult<()> {
    let mut processor = Processor::new();
    run(&mut processor, &format!("execute {}", EDIT_SCRIPT))?;

    assert_eq!(
        processor.grid().get_rows(),
        &[
            row(&[("name", "Bob"), ("age", "25")]),
            row(&[("name", "Carol"), ("age", "41")]),
        ]
    );
    assert!(processor.source_file().is_some());
    Ok(())
}

#[test]
fn script_stops_at_first_failure() {
    let mut processor = Processor::new();
    processor
        .import_from_bytes(PEOPLE_CSV.as_bytes())
        .expect("Failed to import");

    let result = processor.execute_script("delete-row 0\ndelete-row 5\ndelete-row 0\n");

    assert!(result.is_err());
    assert_eq!(processor.grid().get_row_count(), 1);
}

#[test]
fn semicolon_inside_quotes_stays_in_value() -> CsvToolResult<()> {
    let mut processor = Processor::new();
    processor.import_from_bytes(PEOPLE_CSV.as_bytes())?;

    processor.execute_script("edit 0,name 'a;b'\n")?;

    assert_eq!(processor.grid().get_cell(0, "name"), Some("a;b"));
    assert_eq!(processor.grid().get_row_count(), 2);
    Ok(())
}

#[test]
fn quoted_value_keeps_spacing() -> CsvToolResult<()> {
    let mut processor = Processor::new();
    processor.import_from_bytes(PEOPLE_CSV.as_bytes())?;

    run(&mut processor, "edit 0,name 'Bob   Smith'")?;
    run(&mut processor, "edit 1,name Bob   Smith")?;

    assert_eq!(processor.grid().get_cell(0, "name"), Some("Bob   Smith"));
    assert_eq!(processor.grid().get_cell(1, "name"), Some("Bob Smith"));
    Ok(())
}

#[test]
fn self_executing_script_is_bounded() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let script = dir.path().join("loop.csvt");
    std::fs::write(&script, format!("execute {}\n", script.display()))
        .expect("Failed to write script");
    let mut processor = Processor::new();

    let result = run(&mut processor, &format!("execute {}", script.display()));

    assert!(matches!(result, Err(CsvToolError::Command(_))));
    // A later script still runs once the nesting unwinds
    run(&mut processor, &format!("execute {}", EDIT_SCRIPT)).expect("Failed to execute");
    assert_eq!(processor.grid().get_row_count(), 2);
}
