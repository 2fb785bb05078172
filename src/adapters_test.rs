/// Tests for the foreign-shape adapters

#[cfg(test)]
mod tests {
    use crate::adapters::*;
    use crate::align::Alignment;
    use crate::column::Column;
    use crate::error::TableError;
    use crate::format::TableFormat;
    use crate::row::Row;
    use crate::table::Table;
    use crate::value::CellValue;
    use crate::row;
    use serde_json::json;

    struct Crate {
        name: &'static str,
        downloads: u64,
    }

    impl Record for Crate {
        fn columns() -> Vec<Column> {
            vec![Column::new("name"), Column::new("downloads")]
        }

        fn row(&self) -> Row {
            row![self.name, self.downloads]
        }
    }

    #[test]
    fn test_from_records_derives_columns_from_the_type() {
        let items = [Crate { name: "log", downloads: 250 }, Crate { name: "serde", downloads: 300 }];
        let table = Table::from_records(&items).unwrap();

        assert_eq!(table.columns().len(), 2);
        assert_eq!(table.columns()[0].header(), "name");
        assert_eq!(table.row_count(), 2);
        // Adapter tables right-align numbers by default.
        assert_eq!(table.options().number_alignment, Some(Alignment::Right));
    }

    #[test]
    fn test_from_records_with_no_items() {
        let table = Table::from_records::<Crate>(&[]).unwrap();
        assert_eq!(table.columns().len(), 2);
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn test_from_rows_checks_arity() {
        let err = Table::from_rows(["a", "b"], [row![1, 2], row![3]]).unwrap_err();
        assert!(matches!(err, TableError::Arity(_)));
    }

    #[test]
    fn test_from_dataset() {
        let dataset = Dataset {
            columns: vec!["city".to_string(), "population".to_string()],
            rows: vec![
                vec![CellValue::from("Oslo"), CellValue::from(717_710u64)],
                vec![CellValue::from("Bergen"), CellValue::from(291_940u64)],
            ],
        };

        let table = Table::from_dataset(&dataset).unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.columns()[1].header(), "population");
    }

    #[test]
    fn test_from_dataset_without_columns() {
        let err = Table::from_dataset(&Dataset::default()).unwrap_err();
        assert!(matches!(
            err,
            TableError::Configuration(crate::error::ConfigError::EmptyInput)
        ));
    }

    #[test]
    fn test_from_json_first_objects_keys_become_columns() {
        let data = json!([
            { "name": "log", "version": "0.4", "downloads": 250 },
            { "name": "serde", "version": "1.0", "downloads": 300 }
        ]);

        let table = Table::from_json(&data).unwrap();
        let headers: Vec<&str> = table.columns().iter().map(|c| c.header()).collect();
        assert_eq!(headers, vec!["name", "version", "downloads"]);

        let text = table.render(&TableFormat::default()).unwrap();
        assert!(text.contains("| serde | 1.0     |       300 |"));
    }

    #[test]
    fn test_from_json_missing_keys_render_empty() {
        let data = json!([
            { "name": "log", "version": "0.4" },
            { "name": "serde" }
        ]);

        let table = Table::from_json(&data).unwrap();
        assert_eq!(table.rows()[1].get(1).unwrap().raw(), &CellValue::Null);
    }

    #[test]
    fn test_from_json_rejects_non_arrays() {
        let err = Table::from_json(&json!({ "not": "an array" })).unwrap_err();
        assert!(matches!(
            err,
            TableError::Configuration(crate::error::ConfigError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_from_json_rejects_empty_arrays() {
        let err = Table::from_json(&json!([])).unwrap_err();
        assert!(matches!(
            err,
            TableError::Configuration(crate::error::ConfigError::EmptyInput)
        ));
    }

    #[test]
    fn test_from_maps() {
        let mut first = serde_json::Map::new();
        first.insert("k".to_string(), json!("v"));
        first.insert("n".to_string(), json!(1));

        let table = Table::from_maps(&[first]).unwrap();
        assert_eq!(table.columns().len(), 2);
        assert_eq!(table.rows()[0].get(1).unwrap().raw(), &CellValue::Int(1));
    }

    #[test]
    fn test_json_scalar_mapping() {
        let data = json!([{
            "null": null,
            "flag": true,
            "int": -3,
            "big": 18_446_744_073_709_551_615u64,
            "float": 2.5,
            "text": "hi",
            "nested": [1, 2]
        }]);

        let table = Table::from_json(&data).unwrap();
        let cells = table.rows()[0].values();
        assert_eq!(cells[0].raw(), &CellValue::Null);
        assert_eq!(cells[1].raw(), &CellValue::Bool(true));
        assert_eq!(cells[2].raw(), &CellValue::Int(-3));
        assert_eq!(cells[3].raw(), &CellValue::UInt(u64::MAX));
        assert_eq!(cells[4].raw(), &CellValue::Float(2.5));
        assert_eq!(cells[5].raw(), &CellValue::Str("hi".to_string()));
        assert_eq!(cells[6].raw(), &CellValue::Str("[1,2]".to_string()));
    }
}
