/// Display name for a BCP-47-ish language code. Unknown codes pass
/// through verbatim so the model still sees the caller's intent.
pub fn language_name(code: &str) -> &str {
    match code {
        "en" => "English",
        "hi" => "Hindi",
        "ta" => "Tamil",
        "te" => "Telugu",
        "bn" => "Bengali",
        "mr" => "Marathi",
        "kn" => "Kannada",
        other => other,
    }
}

/// The fixed persona preamble sent as the system turn of every
/// completion.
pub fn system_instruction(language: &str) -> String {
    format!(
        "You are a helpful legal assistant specializing in Indian law. \
         Respond in {} language. \
         You provide accurate information based on Indian legal codes, \
         including the IPC, CrPC, and relevant Supreme Court judgments.",
        language_name(language)
    )
}
