//! Tests for error formatting and conversion

#[cfg(test)]
mod tests {
    use rhombic_tiling::TilingError;
    use rhombic_tiling::io::error::{
        WithPath, cardinality_error, dimacs_error, invalid_parameter, solver_error,
    };
    use std::error::Error;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            invalid_parameter("n", &0, &"must be a positive integer").to_string(),
            "Invalid parameter 'n' = '0': must be a positive integer"
        );
        assert_eq!(
            dimacs_error(4, &"repeated problem line").to_string(),
            "Malformed DIMACS at line 4: repeated problem line"
        );
        assert_eq!(solver_error(&"interrupted").to_string(), "Solver failure: interrupted");
        assert_eq!(
            cardinality_error(&"ids exhausted").to_string(),
            "Cardinality encoding failure: ids exhausted"
        );
        assert_eq!(
            TilingError::InvalidSolution {
                index: 2,
                reason: "cell 0.0 hosts several tiles".to_string()
            }
            .to_string(),
            "Solution 2 violates the tiling rules: cell 0.0 hosts several tiles"
        );
    }

    // Tests file system failures keep the path, operation and cause
    // Verified by discarding the io::Error source
    #[test]
    fn test_with_path_wraps_io_errors() {
        let failure: io::Result<()> = Err(io::Error::new(io::ErrorKind::NotFound, "gone"));
        let error = failure.with_path("out/run.cnf", "create").unwrap_err();

        match &error {
            TilingError::FileSystem {
                path, operation, ..
            } => {
                assert_eq!(path, &PathBuf::from("out/run.cnf"));
                assert_eq!(*operation, "create");
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert!(error.to_string().contains("create on 'out/run.cnf': gone"));
        assert_eq!(error.source().unwrap().to_string(), "gone");
    }

    #[test]
    fn test_io_error_conversion() {
        let error = TilingError::from(io::Error::other("disk full"));
        assert!(matches!(error, TilingError::FileSystem { operation: "unknown", .. }));
        assert!(solver_error(&"x").source().is_none());
    }

    #[test]
    fn test_with_path_passes_success_through() {
        let value: io::Result<u8> = Ok(7);
        assert_eq!(value.with_path("unused", "read").unwrap(), 7);
    }
}
