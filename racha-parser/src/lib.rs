#![warn(clippy::uninlined_format_args)]

mod i18n;

use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{
        tag, tag_no_case, take_till, take_till1, take_until, take_while_m_n, take_while1,
    },
    character::complete::{anychar, char, digit1, multispace1, one_of, satisfy, space0, space1},
    combinator::{map_res, not, opt, recognize},
    multi::{many0, many1},
    sequence::{delimited, preceded, terminated},
};
use rust_decimal::Decimal;

/// One expense extracted from a line of free text.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseLine<'a> {
    pub line: usize,
    pub name: &'a str,
    pub paid: Decimal,
    pub description: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExpenseSheet<'a> {
    pub records: Vec<ExpenseLine<'a>>,
}

impl<'a> ExpenseSheet<'a> {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<ExpenseLine<'a>> {
        self.records
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("Syntax error at line {line}: {detail}")]
    SyntaxError { line: usize, detail: String },
}

type Expense<'a> = (&'a str, Decimal, Option<&'a str>);

fn sp(input: &str) -> IResult<&str, &str> {
    fn comment(input: &str) -> IResult<&str, &str> {
        delimited(tag("/*"), take_until("*/"), tag("*/")).parse(input)
    }

    fn line_comment(input: &str) -> IResult<&str, &str> {
        recognize((tag("//"), take_till(|c| c == '\n'))).parse(input)
    }

    recognize(many0(alt((multispace1, comment, line_comment)))).parse(input)
}

fn comment_start(input: &str) -> IResult<&str, &str> {
    alt((tag("//"), tag("/*"))).parse(input)
}

// "Ana" or a quoted name with spaces: "Ana Maria"
fn name(input: &str) -> IResult<&str, &str> {
    alt((
        delimited(char('"'), take_till1(|c| c == '"'), char('"')).map(str::trim),
        take_while1(|c: char| c.is_alphanumeric() || matches!(c, '_' | '-' | '\'')),
    ))
    .parse(input)
}

fn currency(input: &str) -> IResult<&str, &str> {
    alt((tag_no_case("US$"), tag_no_case("R$"), tag("$"), tag("€"))).parse(input)
}

// R$ 12,50 | $12.5 | 40
fn amount(input: &str) -> IResult<&str, Decimal> {
    map_res(
        (
            opt(terminated(currency, space0)),
            digit1,
            opt(preceded(
                one_of(".,"),
                take_while_m_n(1, 2, |c: char| c.is_ascii_digit()),
            )),
            not(satisfy(|c: char| c.is_ascii_digit())),
        ),
        |(_, units, fraction, _)| match fraction {
            Some(fraction) => Decimal::from_str_exact(&format!("{units}.{fraction}")),
            None => Decimal::from_str_exact(units),
        },
    )
    .parse(input)
}

fn paid_keyword(input: &str) -> IResult<&str, &str> {
    alt((tag_no_case("paid"), tag_no_case("pagou"))).parse(input)
}

fn connective(input: &str) -> IResult<&str, &str> {
    alt((
        tag_no_case("for"),
        tag_no_case("pelo"),
        tag_no_case("pela"),
        tag_no_case("por"),
        tag_no_case("em"),
        tag_no_case("de"),
        tag_no_case("no"),
        tag_no_case("na"),
    ))
    .parse(input)
}

// Free text up to the end of the line or the start of a comment.
fn description(input: &str) -> IResult<&str, &str> {
    recognize(many1(preceded(not(comment_start), anychar)))
        .map(str::trim_end)
        .parse(input)
}

fn tail(input: &str) -> IResult<&str, Option<&str>> {
    opt(preceded(
        (space1, opt(terminated(connective, space1))),
        description,
    ))
    .parse(input)
}

// {name} paid {amount} [for {description}]
fn expense_with_keyword(input: &str) -> IResult<&str, Expense<'_>> {
    (name, space1, paid_keyword, space1, amount, tail)
        .map(|(name, _, _, _, paid, description)| (name, paid, description))
        .parse(input)
}

// {name}: {amount} [{description}]
fn expense_with_colon(input: &str) -> IResult<&str, Expense<'_>> {
    (name, space0, char(':'), space0, amount, tail)
        .map(|(name, _, _, _, paid, description)| (name, paid, description))
        .parse(input)
}

// {name} {amount} [{description}]
fn expense_bare(input: &str) -> IResult<&str, Expense<'_>> {
    (name, space1, amount, tail)
        .map(|(name, _, paid, description)| (name, paid, description))
        .parse(input)
}

fn expense(input: &str) -> IResult<&str, Expense<'_>> {
    alt((expense_with_keyword, expense_with_colon, expense_bare)).parse(input)
}

fn expense_with_sp(input: &str) -> IResult<&str, Expense<'_>> {
    (sp, expense, sp).map(|(_, expense, _)| expense).parse(input)
}

/// Parses free text into expense records, one per non-empty line.
///
/// The same name on several lines yields several records; merging is left to
/// the caller.
pub fn parse_expenses(input: &str) -> Result<ExpenseSheet<'_>, ParseError> {
    let mut records = Vec::new();

    for (idx, line) in input.lines().enumerate() {
        let (rest, _) = sp(line).map_err(|e| ParseError::SyntaxError {
            line: idx + 1,
            detail: i18n::syntax_error_detail(e),
        })?;
        if rest.trim().is_empty() {
            continue;
        }
        match expense_with_sp(rest) {
            Ok((rest, (name, paid, description))) => {
                if !rest.trim().is_empty() {
                    return Err(ParseError::SyntaxError {
                        line: idx + 1,
                        detail: i18n::syntax_error_unparsed_detail(rest.trim()),
                    });
                }
                records.push(ExpenseLine {
                    line: idx + 1,
                    name,
                    paid,
                    description: description.filter(|text| !text.is_empty()),
                });
            }
            Err(e) => {
                return Err(ParseError::SyntaxError {
                    line: idx + 1,
                    detail: i18n::syntax_error_detail(e),
                });
            }
        }
    }

    Ok(ExpenseSheet { records })
}
