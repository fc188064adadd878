#![warn(clippy::uninlined_format_args)]

mod bootstrap;
mod output;

use bootstrap::{AppConfig, OutputMode, init_logging};
use racha_application::{
    ExpenseExtractor, ImportError, Roster, RosterStore, SplitOutcome, SplitProcessor,
};
use racha_domain::SplitEngine;
use racha_i18n as i18n;
use racha_infrastructure::{JsonExpenseExtractor, JsonFileRosterStore, LineExpenseExtractor};
use std::{borrow::Cow, env, fs, path::Path, process};

type CliResult<T> = Result<T, Cow<'static, str>>;

#[derive(Debug, PartialEq, Eq)]
struct CliArgs {
    path: String,
    json: bool,
    /// The file is an extraction service's JSON answer, not a saved roster.
    import_json: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let config = AppConfig::from_env()?;
    init_logging();
    let args = parse_args(env::args().skip(1))?;
    let output = if args.json {
        OutputMode::Json
    } else {
        config.output
    };

    let engine = SplitEngine::new();
    let extractor: &dyn ExpenseExtractor = if args.import_json {
        &JsonExpenseExtractor
    } else {
        &LineExpenseExtractor
    };
    let processor = SplitProcessor::new(extractor, &engine);
    let roster = load_roster(&processor, &args)?;

    match processor.evaluate(&roster) {
        SplitOutcome::Settled(result) => {
            let rendered = match output {
                OutputMode::Text => output::format_text(&result, &roster),
                OutputMode::Json => {
                    output::format_json(&result).map_err(i18n::split_failed)?
                }
            };
            println!("{rendered}");
            Ok(())
        }
        SplitOutcome::DuplicateNames(names) => Err(i18n::duplicate_names(&names).into()),
        SplitOutcome::NoParticipants => Err(i18n::NO_PARTICIPANTS.into()),
        SplitOutcome::Failed(err) => Err(i18n::split_failed(err).into()),
    }
}

fn parse_args<I>(args: I) -> CliResult<CliArgs>
where
    I: IntoIterator<Item = String>,
{
    let mut path = None;
    let mut json = false;
    let mut import_json = false;

    for arg in args {
        match arg.as_str() {
            "--json" => json = true,
            "--import-json" => import_json = true,
            flag if flag.starts_with("--") => return Err(i18n::USAGE.into()),
            _ if path.is_some() => return Err(i18n::USAGE.into()),
            _ => path = Some(arg),
        }
    }

    let path = path.ok_or(i18n::USAGE)?;
    Ok(CliArgs {
        path,
        json,
        import_json,
    })
}

fn is_roster_file(path: &str) -> bool {
    Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn load_roster(processor: &SplitProcessor<'_>, args: &CliArgs) -> CliResult<Roster> {
    let path = args.path.as_str();
    if is_roster_file(path) && !args.import_json {
        return JsonFileRosterStore::new(path)
            .load()
            .map_err(|err| i18n::failed_to_read(path, err).into());
    }

    let text = fs::read_to_string(path).map_err(|err| i18n::failed_to_read(path, err))?;
    let mut roster = Roster::default();
    match processor.import(&text, &mut roster) {
        Ok(_) => Ok(roster),
        Err(ImportError::NothingExtracted) => Err(i18n::NOTHING_EXTRACTED.into()),
        Err(err) => Err(i18n::import_failed(err).into()),
    }
}
