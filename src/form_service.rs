use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

use crate::domain::{ContactField, ContactSubmission};

/// Characters left untouched by `encodeURIComponent`; everything else is escaped.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Where the pre-filled values go on the form service URL.
#[derive(serde::Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PrefillLocation {
    #[default]
    Query,
    /// Hidden fields passed after `#`, never sent to the server.
    Fragment,
}

impl PrefillLocation {
    fn separator(&self) -> char {
        match self {
            PrefillLocation::Query => '?',
            PrefillLocation::Fragment => '#',
        }
    }
}

/// The third-party form that receives dispatched submissions.
#[derive(Debug, Clone)]
pub struct FormServiceUrl {
    base: Url,
    prefill: PrefillLocation,
}

impl FormServiceUrl {
    pub fn parse(base_url: String, prefill: PrefillLocation) -> Result<FormServiceUrl, String> {
        let base = Url::parse(&base_url)
            .map_err(|e| format!("{} is not a valid form service url: {}", base_url, e))?;
        if base.cannot_be_a_base() {
            return Err(format!("{} cannot carry query parameters", base_url));
        }
        if prefill == PrefillLocation::Query && base.fragment().is_some() {
            return Err(format!("{} has a fragment, query prefill would land in it", base_url));
        }
        Ok(Self { base, prefill })
    }

    /// Build the URL that opens the form pre-filled with `submission`.
    pub fn prefill(&self, submission: &ContactSubmission) -> String {
        let pairs = [
            (ContactField::Name, submission.name.as_ref()),
            (ContactField::Email, submission.email.as_ref()),
            (ContactField::Subject, submission.subject.as_ref()),
            (ContactField::Message, submission.message.as_ref()),
        ]
        .iter()
        .map(|(field, value)| format!("{}={}", field, utf8_percent_encode(value, COMPONENT)))
        .collect::<Vec<_>>()
        .join("&");

        let base = self.base.as_str();
        let separator = self.prefill.separator();
        match base.find(separator) {
            // The base already carries a query or fragment of its own.
            Some(index) if index + 1 == base.len() => format!("{}{}", base, pairs),
            Some(_) => format!("{}&{}", base, pairs),
            None => format!("{}{}{}", base, separator, pairs),
        }
    }
}
