use racha_application::Roster;
use racha_domain::SplitResult;
use racha_i18n as i18n;
use std::fmt::Write;

/// Renders the settlement, with the receiver's payment key under each
/// transfer when the roster has one.
pub fn format_text(result: &SplitResult, roster: &Roster) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}: {}", i18n::TOTAL, result.total);
    let _ = writeln!(
        out,
        "{}: {:.2}",
        i18n::PER_UNIT_WEIGHT,
        result.per_unit_weight.round_dp(2)
    );

    if result.is_settled() {
        let _ = write!(out, "{}", i18n::ALL_SETTLED);
        return out;
    }

    let _ = write!(out, "{}:", i18n::TRANSFERS);
    for transfer in &result.transfers {
        let _ = write!(
            out,
            "\n  {} {} {} {} {}",
            transfer.from,
            i18n::PAYS,
            transfer.amount,
            i18n::TO,
            transfer.to
        );
        if let Some(pix) = roster.pix_for(&transfer.to) {
            let _ = write!(out, "\n    {}: {pix}", i18n::PIX);
        }
    }
    out
}

pub fn format_json(result: &SplitResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}
