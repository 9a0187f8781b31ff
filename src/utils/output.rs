use crate::utils::errors::Result;
use serde_json::Value;

/// Output format configuration
#[derive(Clone, Debug)]
pub struct OutputFormat {
    pub raw: bool,
}

impl OutputFormat {
    pub fn new(raw: bool) -> Self {
        Self { raw }
    }

    /// Print a JSON document - either raw (exactly as returned by the API)
    /// or pretty-printed.
    pub fn print_json(&self, json: &str) -> Result<()> {
        if self.raw {
            println!("{json}");
        } else {
            let value: Value = serde_json::from_str(json)?;
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        Ok(())
    }

    /// Print tabular data - either raw (tab-separated) or formatted (column-aligned)
    pub fn print_table<T>(&self, data: &[Vec<T>])
    where
        T: std::fmt::Display + AsRef<str>,
    {
        if data.is_empty() {
            return;
        }

        if self.raw {
            for row in data {
                let line = row
                    .iter()
                    .map(|cell| cell.as_ref())
                    .collect::<Vec<_>>()
                    .join("\t");
                println!("{line}");
            }
        } else {
            self.print_formatted_table(data);
        }
    }

    fn print_formatted_table<T>(&self, data: &[Vec<T>])
    where
        T: std::fmt::Display + AsRef<str>,
    {
        let num_cols = data[0].len();
        let mut col_widths = vec![0; num_cols];

        for row in data {
            for (i, cell) in row.iter().enumerate() {
                col_widths[i] = col_widths[i].max(cell.as_ref().len());
            }
        }

        for row in data {
            let formatted_cells: Vec<String> = row
                .iter()
                .enumerate()
                .map(|(i, cell)| {
                    if i == row.len() - 1 {
                        // Last column - no padding needed
                        cell.to_string()
                    } else {
                        format!("{:<width$}", cell.as_ref(), width = col_widths[i])
                    }
                })
                .collect();

            println!("{}", formatted_cells.join("  "));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_table_output() {
        let format = OutputFormat::new(true);
        let data = vec![vec!["id", "name"], vec!["1", "alice"]];

        // This would print:
        // id\tname
        // 1\talice
        format.print_table(&data);
    }

    #[test]
    fn test_pretty_json_rejects_garbage() {
        let format = OutputFormat::new(false);
        assert!(format.print_json("not json").is_err());
    }
}
