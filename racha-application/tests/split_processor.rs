use racha_application::{
    ExpenseExtractor, ExtractionError, ImportError, ImportRecord, Roster, RosterEntry,
    SplitOutcome, SplitProcessor,
};
use racha_domain::{Money, SplitEngine, SplitError, Transfer};
use rstest::{fixture, rstest};
use rust_decimal::Decimal;

// "name amount" per line, anything else is a syntax error.
struct PairExtractor;

impl ExpenseExtractor for PairExtractor {
    fn extract(&self, text: &str) -> Result<Vec<ImportRecord>, ExtractionError> {
        text.lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| {
                let mut parts = line.split_whitespace();
                let name = parts.next().unwrap_or_default();
                let paid = parts
                    .next()
                    .and_then(|amount| amount.parse::<Decimal>().ok())
                    .ok_or_else(|| ExtractionError::Syntax {
                        line: idx + 1,
                        detail: format!("no amount in {line:?}"),
                    })?;
                Ok(ImportRecord::new(name, paid, parts.collect::<Vec<_>>().join(" ")))
            })
            .collect()
    }
}

static TEST_EXTRACTOR: PairExtractor = PairExtractor;
static TEST_ENGINE: SplitEngine = SplitEngine::new();

#[fixture]
fn processor() -> SplitProcessor<'static> {
    SplitProcessor::new(&TEST_EXTRACTOR, &TEST_ENGINE)
}

fn dec(value: &str) -> Decimal {
    value.parse().expect("decimal")
}

fn roster(rows: &[(&str, &str)]) -> Roster {
    rows.iter()
        .map(|(name, paid)| RosterEntry::new(*name, dec(paid)))
        .collect()
}

fn transfer(from: &str, to: &str, cents: i64) -> Transfer {
    Transfer {
        from: from.to_string(),
        to: to.to_string(),
        amount: Money::from_cents(cents),
    }
}

#[rstest]
fn evaluate_settles_even_split(processor: SplitProcessor<'static>) {
    let roster = roster(&[("Ana", "120"), ("Bruno", "30"), ("Carla", "0")]);

    match processor.evaluate(&roster) {
        SplitOutcome::Settled(result) => {
            assert_eq!(result.total, Money::from_cents(15000));
            assert_eq!(result.per_unit_weight, dec("50"));
            assert_eq!(
                result.transfers,
                vec![transfer("Carla", "Ana", 5000), transfer("Bruno", "Ana", 2000)]
            );
        }
        other => panic!("expected settlement, got {other:?}"),
    }
}

#[rstest]
fn evaluate_ignores_unnamed_rows(processor: SplitProcessor<'static>) {
    let mut roster = roster(&[("Ana", "10"), ("Bruno", "0")]);
    roster.push(RosterEntry::new("", dec("500")));

    match processor.evaluate(&roster) {
        SplitOutcome::Settled(result) => {
            assert_eq!(result.total, Money::from_cents(1000));
            assert_eq!(result.transfers, vec![transfer("Bruno", "Ana", 500)]);
        }
        other => panic!("expected settlement, got {other:?}"),
    }
}

#[rstest]
fn evaluate_reports_duplicates_before_calculating(processor: SplitProcessor<'static>) {
    let roster = roster(&[("Ana", "10"), ("Bruno", "5"), ("ANA ", "3")]);

    assert_eq!(
        processor.evaluate(&roster),
        SplitOutcome::DuplicateNames(vec!["ana".to_string()])
    );
}

#[rstest]
#[case::empty(Roster::default())]
#[case::only_blank_rows(Roster::new(vec![RosterEntry::default(), RosterEntry::default()]))]
fn evaluate_without_named_rows(processor: SplitProcessor<'static>, #[case] roster: Roster) {
    assert_eq!(processor.evaluate(&roster), SplitOutcome::NoParticipants);
}

#[rstest]
fn evaluate_zero_weights_is_settled_empty(processor: SplitProcessor<'static>) {
    let roster = Roster::new(vec![
        RosterEntry::new("Ana", dec("10")).with_weight(Decimal::ZERO),
        RosterEntry::new("Bruno", dec("5")).with_weight(Decimal::ZERO),
    ]);

    match processor.evaluate(&roster) {
        SplitOutcome::Settled(result) => assert!(result.is_settled() && result.total.is_zero()),
        other => panic!("expected empty settlement, got {other:?}"),
    }
}

#[rstest]
fn evaluate_surfaces_engine_errors(processor: SplitProcessor<'static>) {
    let roster = roster(&[("Ana", "79228162514264337593543950335"), ("Bruno", "1")]);

    assert!(matches!(
        processor.evaluate(&roster),
        SplitOutcome::Failed(SplitError::AmountOutOfRange { .. })
    ));
}

#[rstest]
fn import_merges_into_existing_roster(processor: SplitProcessor<'static>) {
    let mut roster = roster(&[("Ana", "10")]);

    let merged = processor
        .import("ana 5 taxi\nBruno 7\n", &mut roster)
        .expect("import should succeed");

    assert_eq!(merged, 2);
    let rows: Vec<(&str, Decimal)> = roster
        .entries()
        .iter()
        .map(|entry| (entry.name.as_str(), entry.paid))
        .collect();
    assert_eq!(rows, vec![("Ana", dec("15")), ("Bruno", dec("7"))]);
    assert_eq!(roster.entries()[0].description, "taxi");
}

#[rstest]
#[case::blank_text("  \n\n")]
#[case::empty_text("")]
fn import_rejects_empty_extraction(processor: SplitProcessor<'static>, #[case] text: &str) {
    let mut roster = roster(&[("Ana", "10")]);
    let before = roster.clone();

    assert_eq!(
        processor.import(text, &mut roster),
        Err(ImportError::NothingExtracted)
    );
    assert_eq!(roster, before);
}

#[rstest]
fn import_propagates_extraction_errors(processor: SplitProcessor<'static>) {
    let mut roster = Roster::default();

    match processor.import("Ana 10\nBruno dez", &mut roster) {
        Err(ImportError::Extraction(ExtractionError::Syntax { line, .. })) => assert_eq!(line, 2),
        other => panic!("expected syntax error, got {other:?}"),
    }
    assert!(roster.is_empty());
}
