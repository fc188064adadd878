#[cfg(all(feature = "pt", feature = "en"))]
compile_error!("Cannot enable both 'pt' and 'en' features at the same time");

#[cfg(feature = "pt")]
pub mod strings {
    pub const TOTAL: &str = "Total";
    pub const PER_UNIT_WEIGHT: &str = "Por unidade de peso";
    pub const TRANSFERS: &str = "Transferências";
    pub const PAYS: &str = "paga";
    pub const TO: &str = "para";
    pub const ALL_SETTLED: &str = "Ninguém deve nada.";
    pub const PIX: &str = "PIX";
    pub const NO_PARTICIPANTS: &str = "Nenhum participante com nome foi informado.";
    pub const NOTHING_EXTRACTED: &str = "Nenhuma pessoa ou valor identificado.";
    pub const USAGE: &str = "Uso: racha_interpreter <arquivo.json|despesas.txt> [--json] [--import-json]";
}

#[cfg(not(feature = "pt"))]
pub mod strings {
    pub const TOTAL: &str = "Total";
    pub const PER_UNIT_WEIGHT: &str = "Per unit of weight";
    pub const TRANSFERS: &str = "Transfers";
    pub const PAYS: &str = "pays";
    pub const TO: &str = "to";
    pub const ALL_SETTLED: &str = "Nobody owes anything.";
    pub const PIX: &str = "PIX";
    pub const NO_PARTICIPANTS: &str = "No named participants were given.";
    pub const NOTHING_EXTRACTED: &str = "No person or amount could be identified.";
    pub const USAGE: &str = "Usage: racha_interpreter <roster.json|expenses.txt> [--json] [--import-json]";
}

pub use strings::*;

#[cfg(feature = "pt")]
pub fn duplicate_names(names: &[String]) -> String {
    format!("Nomes duplicados: {}", names.join(", "))
}

#[cfg(feature = "pt")]
pub fn failed_to_read(path: impl std::fmt::Display, error: impl std::fmt::Display) -> String {
    format!("Falha ao ler '{path}': {error}")
}

#[cfg(feature = "pt")]
pub fn split_failed(error: impl std::fmt::Display) -> String {
    format!("Falha ao calcular a divisão: {error}")
}

#[cfg(feature = "pt")]
pub fn import_failed(error: impl std::fmt::Display) -> String {
    format!("Falha ao importar despesas: {error}")
}

#[cfg(not(feature = "pt"))]
pub fn duplicate_names(names: &[String]) -> String {
    format!("Duplicate names: {}", names.join(", "))
}

#[cfg(not(feature = "pt"))]
pub fn failed_to_read(path: impl std::fmt::Display, error: impl std::fmt::Display) -> String {
    format!("Failed to read '{path}': {error}")
}

#[cfg(not(feature = "pt"))]
pub fn split_failed(error: impl std::fmt::Display) -> String {
    format!("Split calculation failed: {error}")
}

#[cfg(not(feature = "pt"))]
pub fn import_failed(error: impl std::fmt::Display) -> String {
    format!("Failed to import expenses: {error}")
}
