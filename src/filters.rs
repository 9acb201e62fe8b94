//! Query filter parsing for list commands.
//!
//! Filters arrive as repeated `--filter key=op:value` arguments, where
//! the operator tag is one of the engine's fixed set (eq, neq, in, nin,
//! gt, gte, lt, lte, has). Values travel verbatim; the engine validates
//! operators server-side.

use anyhow::{bail, Result};

/// Parse raw filter arguments into ordered `(key, value)` pairs.
///
/// Each argument is split once on the first `=`; anything without an `=`
/// or with an empty key is a fatal argument error, raised before any
/// request is sent. Pair order is the argument order.
pub fn parse_filters(args: &[String]) -> Result<Vec<(String, String)>> {
    let mut filters = Vec::with_capacity(args.len());
    for raw in args {
        let Some((key, value)) = raw.split_once('=') else {
            bail!("Invalid filter: {raw}");
        };
        if key.is_empty() {
            bail!("Invalid filter: {raw}");
        }
        filters.push((key.to_string(), value.to_string()));
    }
    Ok(filters)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preserves_argument_order() {
        let args = vec![
            "status=eq:running".to_string(),
            "name=has:etl".to_string(),
            "count=gte:2".to_string(),
        ];
        let filters = parse_filters(&args).unwrap();
        assert_eq!(
            filters,
            vec![
                ("status".to_string(), "eq:running".to_string()),
                ("name".to_string(), "has:etl".to_string()),
                ("count".to_string(), "gte:2".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_splits_on_first_equals_only() {
        let filters = parse_filters(&["input=eq:a=b".to_string()]).unwrap();
        assert_eq!(filters, vec![("input".to_string(), "eq:a=b".to_string())]);
    }

    #[test]
    fn test_parse_rejects_missing_equals() {
        let err = parse_filters(&["name".to_string()]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid filter: name");
    }

    #[test]
    fn test_parse_rejects_empty_key() {
        assert!(parse_filters(&["=eq:x".to_string()]).is_err());
    }

    #[test]
    fn test_parse_empty_args() {
        assert!(parse_filters(&[]).unwrap().is_empty());
    }
}
