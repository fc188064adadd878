#[cfg(all(feature = "pt", feature = "en"))]
compile_error!("Cannot enable both 'pt' and 'en' features at the same time");

#[cfg(feature = "pt")]
pub fn syntax_error_detail(error: impl std::fmt::Display) -> String {
    format!("não foi possível ler a despesa ({error})")
}

#[cfg(feature = "pt")]
pub fn syntax_error_unparsed_detail(input: impl std::fmt::Display) -> String {
    format!("texto não reconhecido: {input}")
}

#[cfg(not(feature = "pt"))]
pub fn syntax_error_detail(error: impl std::fmt::Display) -> String {
    format!("could not read expense ({error})")
}

#[cfg(not(feature = "pt"))]
pub fn syntax_error_unparsed_detail(input: impl std::fmt::Display) -> String {
    format!("unrecognized input: {input}")
}
