//! DNS record and resolver response types.

use serde::Deserialize;

/// Record types the resolver is asked for on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryType {
    /// Mail exchangers
    Mx,
    /// Text records
    Txt,
    /// IPv4 addresses
    A,
    /// Canonical name
    Cname,
    /// Name servers
    Ns,
    /// IPv6 addresses
    Aaaa,
}

impl QueryType {
    /// Value of the `type` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryType::Mx => "MX",
            QueryType::Txt => "TXT",
            QueryType::A => "A",
            QueryType::Cname => "CNAME",
            QueryType::Ns => "NS",
            QueryType::Aaaa => "AAAA",
        }
    }
}

impl std::fmt::Display for QueryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record types shown in the sheet.
///
/// The six direct types map one-to-one onto a [`QueryType`]. SPF, DMARC and
/// DKIM are derived from TXT lookups with their own query names and rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    /// MX records of the domain
    Mx,
    /// Every TXT record of the domain
    Txt,
    /// TXT records of the domain starting with `v=spf1`
    Spf,
    /// A records of the domain
    A,
    /// CNAME record of the domain
    Cname,
    /// NS records of the domain
    Ns,
    /// TXT records of the probed `{selector}._domainkey` names
    Dkim,
    /// TXT records of `_dmarc.{domain}`
    Dmarc,
    /// AAAA records of the domain
    Aaaa,
}

impl RecordType {
    /// Label used in headers and in "No ... records found" placeholders.
    pub fn label(&self) -> &'static str {
        match self {
            RecordType::Mx => "MX",
            RecordType::Txt => "TXT",
            RecordType::Spf => "SPF",
            RecordType::A => "A",
            RecordType::Cname => "CNAME",
            RecordType::Ns => "NS",
            RecordType::Dkim => "DKIM",
            RecordType::Dmarc => "DMARC",
            RecordType::Aaaa => "AAAA",
        }
    }

    /// Wire type queried to obtain this record.
    pub fn query_type(&self) -> QueryType {
        match self {
            RecordType::Mx => QueryType::Mx,
            RecordType::A => QueryType::A,
            RecordType::Cname => QueryType::Cname,
            RecordType::Ns => QueryType::Ns,
            RecordType::Aaaa => QueryType::Aaaa,
            RecordType::Txt | RecordType::Spf | RecordType::Dkim | RecordType::Dmarc => {
                QueryType::Txt
            }
        }
    }

    /// Whether the record is a plain lookup of the domain itself.
    pub fn is_direct(&self) -> bool {
        !matches!(
            self,
            RecordType::Spf | RecordType::Dkim | RecordType::Dmarc
        )
    }
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// JSON envelope returned by the resolver.
///
/// Only `Answer` matters; `Status`, `Question`, flags and the rest are ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct DohResponse {
    #[serde(rename = "Answer", default)]
    pub answer: Option<Vec<DohAnswer>>,
}

/// One entry of the `Answer` array.
#[derive(Debug, Deserialize)]
pub(crate) struct DohAnswer {
    pub data: String,
}

impl DohResponse {
    /// Data strings in resolver order; empty when no `Answer` was present.
    pub fn into_data(self) -> Vec<String> {
        self.answer
            .unwrap_or_default()
            .into_iter()
            .map(|answer| answer.data)
            .collect()
    }
}
