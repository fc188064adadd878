use racha_application::{ExpenseExtractor, ExtractionError, ImportRecord};
use racha_parser::{ExpenseLine, ParseError, parse_expenses};

/// Reads expenses from plain text lines such as `Ana paid 120 for dinner`.
#[derive(Default)]
pub struct LineExpenseExtractor;

impl ExpenseExtractor for LineExpenseExtractor {
    fn extract(&self, text: &str) -> Result<Vec<ImportRecord>, ExtractionError> {
        match parse_expenses(text) {
            Ok(sheet) => Ok(sheet.into_records().into_iter().map(to_record).collect()),
            Err(ParseError::SyntaxError { line, detail }) => {
                tracing::debug!(line, %detail, "expense text rejected");
                Err(ExtractionError::Syntax { line, detail })
            }
        }
    }
}

fn to_record(line: ExpenseLine<'_>) -> ImportRecord {
    let ExpenseLine {
        name,
        paid,
        description,
        ..
    } = line;
    ImportRecord::new(name, paid, description.unwrap_or_default())
}
