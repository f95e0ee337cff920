//! Command mode: one workbook driven by text commands.

use sheetlink_core::{Column, ColumnType, Scalar, SheetId, SnapshotMode, Workbook};
use std::path::Path;

use crate::config::Config;
use crate::error::{CommandError, Result};

pub const COMMAND_HELP: &str = "\
Commands:
  create <NAME:TYPE>...     Create a sheet and select it (types: boolean, int, double, string)
  use <ID>                  Select an existing sheet
  set <COL> <ROW> <VALUE>   Set a cell (JSON scalar, lookup(COL,ROW), or bare text)
  get <COL> <ROW>           Print a cell's resolved value
  show                      Print the selected sheet as JSON
  export <PATH>             Write the selected sheet as JSON
  delete [ID]               Delete a sheet (default: the selected one)
  sheets                    List sheet ids";

/// Mutable state shared by the commands of one run.
pub struct Session {
    workbook: Workbook,
    current: Option<SheetId>,
    mode: SnapshotMode,
    pretty: bool,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Session {
            workbook: Workbook::new(),
            current: None,
            mode: config.snapshot_mode,
            pretty: config.pretty,
        }
    }

    #[cfg(test)]
    pub fn workbook(&self) -> &Workbook {
        &self.workbook
    }

    /// Run one command line. Returns text to print, if any.
    pub fn execute(&mut self, line: &str) -> Result<Option<String>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        let (command, rest) = split_word(line);

        match command {
            "create" => {
                let columns = rest
                    .split_whitespace()
                    .map(parse_column)
                    .collect::<Result<Vec<_>>>()?;
                let id = self.workbook.create_sheet(columns)?;
                self.current = Some(id.clone());
                Ok(Some(id.to_string()))
            }
            "use" => {
                if rest.is_empty() {
                    return Err(CommandError::Usage("use <ID>".to_string()));
                }
                let sheet = self.workbook.get_sheet(rest)?;
                self.current = Some(sheet.id().clone());
                Ok(None)
            }
            "set" => {
                let (column, rest) = split_word(rest);
                let (row, value) = split_word(rest);
                if column.is_empty() || row.is_empty() || value.is_empty() {
                    return Err(CommandError::Usage("set <COL> <ROW> <VALUE>".to_string()));
                }
                let row = parse_row(row)?;
                let id = self.current()?;
                self.workbook.set_cell(id.as_str(), column, row, parse_value(value))?;
                Ok(None)
            }
            "get" => {
                let (column, row) = split_word(rest);
                if column.is_empty() || row.is_empty() {
                    return Err(CommandError::Usage("get <COL> <ROW>".to_string()));
                }
                let row = parse_row(row)?;
                let id = self.current()?;
                let value = self.workbook.get_cell_value(id.as_str(), column, row)?;
                Ok(Some(format_value(value.as_ref())))
            }
            "show" => {
                let id = self.current()?;
                let snapshot = self.workbook.get_sheet_snapshot_with(id.as_str(), self.mode)?;
                Ok(Some(snapshot.to_json(self.pretty)?))
            }
            "export" => {
                if rest.is_empty() {
                    return Err(CommandError::Usage("export <PATH>".to_string()));
                }
                let id = self.current()?;
                let snapshot = self.workbook.get_sheet_snapshot_with(id.as_str(), self.mode)?;
                snapshot.write_json(Path::new(rest), self.pretty)?;
                log::info!("exported sheet {} to {}", id, rest);
                Ok(None)
            }
            "delete" => {
                let id = if rest.is_empty() {
                    self.current()?.clone()
                } else {
                    SheetId::from(rest)
                };
                self.workbook.delete_sheet(id.as_str())?;
                if self.current.as_ref() == Some(&id) {
                    self.current = None;
                }
                Ok(None)
            }
            "sheets" => {
                let ids: Vec<String> = self.workbook.sheet_ids().iter().map(|id| id.to_string()).collect();
                Ok(Some(ids.join("\n")))
            }
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }

    fn current(&self) -> Result<&SheetId> {
        self.current.as_ref().ok_or(CommandError::NoSheet)
    }
}

fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.find(char::is_whitespace) {
        Some(pos) => (&input[..pos], input[pos..].trim()),
        None => (input, ""),
    }
}

fn parse_column(text: &str) -> Result<Column> {
    let Some((name, ty)) = text.rsplit_once(':') else {
        return Err(CommandError::Usage(format!(
            "column must be NAME:TYPE, got '{}'",
            text
        )));
    };
    if name.is_empty() {
        return Err(CommandError::Usage(format!("empty column name in '{}'", text)));
    }
    let column_type = ty
        .parse::<ColumnType>()
        .map_err(|e| CommandError::Usage(e.to_string()))?;
    Ok(Column::new(name, column_type))
}

fn parse_row(text: &str) -> Result<u32> {
    text.parse::<u32>()
        .map_err(|_| CommandError::Usage(format!("row must be a positive integer, got '{}'", text)))
}

/// Interpret a command-line value: a JSON scalar if it parses as one,
/// otherwise the text itself.
fn parse_value(text: &str) -> Scalar {
    serde_json::from_str::<Scalar>(text).unwrap_or_else(|_| Scalar::Str(text.to_string()))
}

fn format_value(value: Option<&Scalar>) -> String {
    serde_json::to_string(&value).unwrap_or_else(|_| "null".to_string())
}
