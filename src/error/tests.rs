//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod chart_error_tests {
    use super::*;

    #[test]
    fn test_missing_batter_message_matches_api_payload() {
        let error = ChartError::MissingParameter {
            param: QueryParam::Batter,
        };
        assert_eq!(error.to_string(), "Batter name is required");
    }

    #[test]
    fn test_missing_pitcher_message() {
        let error = ChartError::MissingParameter {
            param: QueryParam::Pitcher,
        };
        assert_eq!(error.to_string(), "Pitcher name is required");
    }

    #[test]
    fn test_query_param_keys() {
        assert_eq!(QueryParam::Batter.key(), "batter");
        assert_eq!(QueryParam::Pitcher.key(), "pitcher");
    }

    #[test]
    fn test_workbook_error_is_server_side() {
        let error = ChartError::Workbook {
            message: "workbook has no sheets".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Workbook parsing failed: workbook has no sheets"
        );
        assert!(!error.is_client_error());
    }

    #[test]
    fn test_malformed_record_error() {
        let error = ChartError::MalformedRecord {
            row: 7,
            reason: "batter name 'Acuna' is not in 'Last, First' form".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("row 7"));
        assert!(error_string.contains("Last, First"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let chart_error = ChartError::from(io_error);

        match chart_error {
            ChartError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let chart_error = ChartError::from(json_error);

        match chart_error {
            ChartError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_missing_data_path_error() {
        let error = ChartError::MissingDataPath {
            env_var: "SPRAY_CHART_DATA".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("Data file not provided"));
        assert!(error_string.contains("SPRAY_CHART_DATA"));
    }

    #[test]
    fn test_client_error_classification() {
        assert!(ChartError::MissingParameter {
            param: QueryParam::Batter
        }
        .is_client_error());
        assert!(ChartError::BadRequest {
            message: "bad target".to_string()
        }
        .is_client_error());
        assert!(!ChartError::InvalidDate { serial: -1.0 }.is_client_error());
    }

    #[test]
    fn test_error_source_chain() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let chart_error = ChartError::from(io_error);

        let error_trait: &dyn std::error::Error = &chart_error;
        assert!(error_trait.source().is_some());
    }

    #[test]
    fn test_result_type_alias_error() {
        fn test_function() -> Result<String> {
            Err(ChartError::UnsupportedFormat {
                path: "data.xlsx".to_string(),
            })
        }

        match test_function().unwrap_err() {
            ChartError::UnsupportedFormat { path } => assert_eq!(path, "data.xlsx"),
            _ => panic!("Expected UnsupportedFormat error"),
        }
    }
}
