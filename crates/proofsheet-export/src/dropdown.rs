//! Spreadsheet list validations for the proof sheet.
//!
//! The sheet has a header row and one row per record; columns E through H
//! (stage, language, assembler, QC) are restricted to the fixed value lists in
//! [`Enumerations`]. This module only describes those validations; writing
//! them into a workbook is up to whoever builds the workbook.

use proofsheet_core::Enumerations;
use serde::Serialize;

/// A list validation over one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropdownColumn {
    /// Spreadsheet column letter.
    pub column: char,
    pub header: &'static str,
    pub options: Vec<String>,
    pub allow_blank: bool,
    pub prompt_title: &'static str,
    pub prompt: &'static str,
    pub error_title: &'static str,
    pub error: &'static str,
}

impl DropdownColumn {
    fn new(column: char, header: &'static str, options: &[String]) -> Self {
        Self {
            column,
            header,
            options: options.to_vec(),
            allow_blank: true,
            prompt_title: "Valid Options",
            prompt: "Please select from dropdown",
            error_title: "Dropdown Error",
            error: "Invalid option",
        }
    }

    /// List formula, e.g. `"PRESS,CPR,PRE PRESS"` including the quotes.
    pub fn formula(&self) -> String {
        format!("\"{}\"", self.options.join(","))
    }

    /// Cell range covering data rows `first_row..=last_row`, e.g. `E2:E40`.
    pub fn range(&self, first_row: usize, last_row: usize) -> String {
        let last_row = last_row.max(first_row);
        format!("{c}{first_row}:{c}{last_row}", c = self.column)
    }
}

/// Validations for the stage, language, assembler and QC columns.
pub fn dropdown_columns(enumerations: &Enumerations) -> Vec<DropdownColumn> {
    vec![
        DropdownColumn::new('E', "Proof", &enumerations.proof_stages),
        DropdownColumn::new('F', "Language", &enumerations.languages),
        DropdownColumn::new('G', "Page Assembler", &enumerations.assemblers),
        DropdownColumn::new('H', "QC", &enumerations.qc),
    ]
}
