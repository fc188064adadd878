use racha_application::{ExpenseExtractor, ExtractionError, ImportRecord};

/// Reads the `[{"name", "paid", "description"?}]` array an AI extraction
/// service answers with.
///
/// The array may be wrapped in a fenced code block, as chat models tend to do.
#[derive(Default)]
pub struct JsonExpenseExtractor;

impl ExpenseExtractor for JsonExpenseExtractor {
    fn extract(&self, text: &str) -> Result<Vec<ImportRecord>, ExtractionError> {
        let payload = strip_code_fence(text);
        if payload.is_empty() {
            return Ok(Vec::new());
        }

        let records: Vec<ImportRecord> = serde_json::from_str(payload)
            .map_err(|err| ExtractionError::Malformed(err.to_string()))?;
        let before = records.len();
        let records: Vec<ImportRecord> = records
            .into_iter()
            .filter(|record| !record.name.trim().is_empty())
            .collect();
        if records.len() != before {
            tracing::debug!(dropped = before - records.len(), "unnamed records dropped");
        }
        Ok(records)
    }
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(body) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Skip the language tag on the opening fence.
    let body = body.split_once('\n').map_or("", |(_, rest)| rest);
    body.strip_suffix("```").unwrap_or(body).trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal::Decimal;

    #[rstest]
    #[case::plain(r#"[{"name":"Ana","paid":12.5,"description":"taxi"}]"#)]
    #[case::fenced("```json\n[{\"name\":\"Ana\",\"paid\":12.5,\"description\":\"taxi\"}]\n```")]
    #[case::string_amount(r#"[{"name":"Ana","paid":"12.50","description":"taxi"}]"#)]
    fn reads_records(#[case] text: &str) {
        let records = JsonExpenseExtractor
            .extract(text)
            .expect("extraction should succeed");
        assert_eq!(records, vec![ImportRecord::new("Ana", Decimal::new(125, 1), "taxi")]);
    }

    #[test]
    fn drops_unnamed_records() {
        let records = JsonExpenseExtractor
            .extract(r#"[{"name":" ","paid":3},{"name":"Bruno","paid":4}]"#)
            .expect("extraction should succeed");
        assert_eq!(records, vec![ImportRecord::new("Bruno", Decimal::new(4, 0), "")]);
    }

    #[rstest]
    #[case::empty("")]
    #[case::empty_array("[]")]
    fn nothing_to_extract(#[case] text: &str) {
        let records = JsonExpenseExtractor
            .extract(text)
            .expect("extraction should succeed");
        assert!(records.is_empty());
    }

    #[rstest]
    #[case::not_json("Ana paid 10")]
    #[case::object(r#"{"name":"Ana","paid":1}"#)]
    #[case::missing_paid(r#"[{"name":"Ana"}]"#)]
    fn rejects_malformed_payloads(#[case] text: &str) {
        assert!(matches!(
            JsonExpenseExtractor.extract(text),
            Err(ExtractionError::Malformed(_))
        ));
    }
}
