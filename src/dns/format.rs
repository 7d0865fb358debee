//! Display formatting of DNS answers.
//!
//! Every function here is pure: it receives answers already fetched and
//! returns the string written to the sheet cell.

use crate::config::RECORD_SEPARATOR;

use super::extract::extract_spf_records;
use super::types::RecordType;

/// Placeholder written when a lookup returned no records.
pub fn no_records_message(label: &str) -> String {
    format!("No {label} records found")
}

fn join_records<S: AsRef<str>>(records: &[S]) -> String {
    records
        .iter()
        .map(|record| record.as_ref())
        .collect::<Vec<&str>>()
        .join(RECORD_SEPARATOR)
}

/// Formats the answers of a lookup labelled `label`.
///
/// Answers are joined in resolver order; an empty answer renders the
/// "No {label} records found" placeholder.
pub fn format_records<S: AsRef<str>>(label: &str, records: &[S]) -> String {
    if records.is_empty() {
        no_records_message(label)
    } else {
        join_records(records)
    }
}

/// Formats the SPF cell from the domain's TXT answers.
pub fn format_spf(txt_records: &[String]) -> String {
    format_records(RecordType::Spf.label(), &extract_spf_records(txt_records))
}

/// Formats the DMARC cell from the TXT answers of `_dmarc.{domain}`.
///
/// Every TXT value found there is accepted; there is no `v=DMARC1` filter.
pub fn format_dmarc(txt_records: &[String]) -> String {
    format_records(RecordType::Dmarc.label(), txt_records)
}

/// Formats the DKIM cell from per-selector TXT answers.
///
/// Selectors without records are omitted. When no selector matched, the
/// cell is left empty.
pub fn format_dkim<S: AsRef<str>>(selectors: &[(S, Vec<String>)]) -> String {
    selectors
        .iter()
        .filter(|(_, records)| !records.is_empty())
        .map(|(selector, records)| format!("{}: {}", selector.as_ref(), join_records(records)))
        .collect::<Vec<_>>()
        .join(RECORD_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_empty_direct_answers_render_placeholder() {
        for label in ["MX", "TXT", "A", "CNAME", "NS", "AAAA"] {
            assert_eq!(
                format_records::<String>(label, &[]),
                format!("No {label} records found")
            );
        }
    }

    #[test]
    fn test_answers_joined_in_resolver_order() {
        let records = strings(&["20 b.example.com.", "10 a.example.com."]);
        assert_eq!(
            format_records("MX", &records),
            "20 b.example.com., 10 a.example.com."
        );
    }

    #[test]
    fn test_spf_filters_non_spf_values() {
        let records = strings(&["v=spf1 include:_spf.example.com ~all", "other=value"]);
        assert_eq!(format_spf(&records), "v=spf1 include:_spf.example.com ~all");
    }

    #[test]
    fn test_spf_accepts_quoted_values() {
        let records = strings(&["\"v=spf1 include:_spf.example.com ~all\""]);
        assert_eq!(
            format_spf(&records),
            "\"v=spf1 include:_spf.example.com ~all\""
        );
    }

    #[test]
    fn test_spf_without_match_renders_placeholder() {
        let records = strings(&["google-site-verification=xyz"]);
        assert_eq!(format_spf(&records), "No SPF records found");
        assert_eq!(format_spf(&[]), "No SPF records found");
    }

    #[test]
    fn test_dmarc_is_not_filtered() {
        let records = strings(&["not-a-dmarc-policy", "\"v=DMARC1; p=none\""]);
        assert_eq!(
            format_dmarc(&records),
            "not-a-dmarc-policy, \"v=DMARC1; p=none\""
        );
        assert_eq!(format_dmarc(&[]), "No DMARC records found");
    }

    #[test]
    fn test_dkim_omits_missing_selectors() {
        let selectors = vec![
            ("google", strings(&["v=DKIM1; k=rsa; p=AAA"])),
            ("google2", Vec::new()),
            ("selector1", Vec::new()),
            ("selector2", strings(&["v=DKIM1; p=BBB"])),
        ];
        assert_eq!(
            format_dkim(&selectors),
            "google: v=DKIM1; k=rsa; p=AAA, selector2: v=DKIM1; p=BBB"
        );
    }

    #[test]
    fn test_dkim_joins_multiple_values_of_one_selector() {
        let selectors = vec![("selector1", strings(&["part-a", "part-b"]))];
        assert_eq!(format_dkim(&selectors), "selector1: part-a, part-b");
    }

    #[test]
    fn test_dkim_without_any_match_is_empty() {
        let selectors: Vec<(&str, Vec<String>)> = vec![
            ("google", Vec::new()),
            ("google2", Vec::new()),
            ("selector1", Vec::new()),
            ("selector2", Vec::new()),
        ];
        assert_eq!(format_dkim(&selectors), "");
    }
}
