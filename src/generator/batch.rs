//! Tabular batch output.

use crate::value::Value;

/// One generated instance: variable bindings followed by the solution,
/// aligned with [`Batch::columns`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Row {
    values: Vec<Value>,
}

impl Row {
    pub(crate) fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// The solution cell (last column).
    pub fn solution(&self) -> Option<&Value> {
        self.values.last()
    }
}

/// A fixed-size table of solved instances.
///
/// Columns are the template's variable names in declaration order followed
/// by [`SOLUTION_NAME`](crate::SOLUTION_NAME). Rows are not deduplicated.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Batch {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Batch {
    pub(crate) fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell at `row` in the named column.
    pub fn value(&self, row: usize, column: &str) -> Option<&Value> {
        let col = self.column_index(column)?;
        self.rows.get(row)?.values.get(col)
    }

    /// All cells of the named column, top to bottom.
    pub fn column(&self, name: &str) -> Option<impl Iterator<Item = &Value> + '_> {
        let col = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| &row.values[col]))
    }

    /// Rows as ordered `(column, value)` records.
    pub fn to_records(&self) -> Vec<Vec<(String, Value)>> {
        self.rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .cloned()
                    .zip(row.values.iter().cloned())
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Batch {
        Batch::new(
            vec!["a".into(), "b".into(), "solution".into()],
            vec![
                Row::new(vec![Value::Int(1), Value::Int(2), Value::Int(3)]),
                Row::new(vec![Value::Int(4), Value::Int(5), Value::Int(9)]),
            ],
        )
    }

    #[test]
    fn test_lookup() {
        let batch = sample();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.value(1, "b"), Some(&Value::Int(5)));
        assert_eq!(batch.value(2, "b"), None);
        assert_eq!(batch.value(0, "c"), None);
        assert_eq!(batch.rows()[0].solution(), Some(&Value::Int(3)));
    }

    #[test]
    fn test_column() {
        let batch = sample();
        let solutions: Vec<_> = batch.column("solution").unwrap().cloned().collect();
        assert_eq!(solutions, vec![Value::Int(3), Value::Int(9)]);
        assert!(batch.column("nope").is_none());
    }

    #[test]
    fn test_records_keep_column_order() {
        let records = sample().to_records();
        let names: Vec<_> = records[0].iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(names, ["a", "b", "solution"]);
        assert_eq!(records[1][2], ("solution".to_string(), Value::Int(9)));
    }
}
