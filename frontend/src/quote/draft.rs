use serde::Serialize;

/// Raw values exactly as they sit in the form controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    pub full_name: String,
    pub email: String,
    pub company: String,
    pub service: String,
    pub message: String,
}

/// Snapshot of the quote form taken at submission time. Lives only for the
/// duration of one submit event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteDraft {
    #[serde(rename = "fullname")]
    pub full_name: String,
    pub email: String,
    pub company: String,
    pub service: String,
    pub message: String,
}

/// Whitespace as browsers count it for `String.prototype.trim` and regex
/// `\s`: Unicode White_Space without U+0085, plus the U+FEFF byte order mark.
pub fn is_form_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

fn trim_form(value: &str) -> String {
    value.trim_matches(is_form_whitespace).to_string()
}

impl QuoteDraft {
    /// Trims every free-text field. The service value comes from a fixed
    /// option list and is kept verbatim.
    pub fn capture(fields: &FieldValues) -> Self {
        Self {
            full_name: trim_form(&fields.full_name),
            email: trim_form(&fields.email),
            company: trim_form(&fields.company),
            service: fields.service.clone(),
            message: trim_form(&fields.message),
        }
    }
}

impl From<FieldValues> for QuoteDraft {
    fn from(fields: FieldValues) -> Self {
        Self::capture(&fields)
    }
}
