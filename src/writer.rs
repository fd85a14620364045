use tbl::{Result, Statement};

use csv::Writer;

const HEADERS: [&str; 3] = ["date", "kind", "amount"];

pub fn write_to_string(writer: Writer<Vec<u8>>) -> Result<String> {
    let utf8 = writer.into_inner()?;
    let string = String::from_utf8(utf8)?;
    return Ok(string);
}

/// Renders the statement's records as CSV, header included even when there are no records
pub fn statement_to_csv(statement: &Statement) -> Result<String> {
    let rows = statement.rows();
    let mut wtr = Writer::from_writer(vec![]);

    if rows.is_empty() {
        wtr.write_record(HEADERS)?;
    }

    for row in rows.iter() {
        log::debug!("Serializing row: {row:?}");
        wtr.serialize(row)?;
    }

    return write_to_string(wtr);
}
