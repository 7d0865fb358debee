//! Sheet column layout.
//!
//! The layout is kept as an explicit ordered table so existing sheets keep
//! their exact column positions: DKIM sits at column 8 and AAAA at column 10,
//! after the other direct types.

use crate::dns::RecordType;

/// A column of the result sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// The user-supplied domain name.
    Domain,
    /// A formatted DNS record cell.
    Record(RecordType),
}

impl Field {
    /// Header label of the column.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Domain => "Domain",
            Field::Record(record_type) => record_type.label(),
        }
    }
}

/// Field → 1-based column index, in column order.
pub const COLUMN_PLAN: &[(Field, usize)] = &[
    (Field::Domain, 1),
    (Field::Record(RecordType::Mx), 2),
    (Field::Record(RecordType::Txt), 3),
    (Field::Record(RecordType::Spf), 4),
    (Field::Record(RecordType::A), 5),
    (Field::Record(RecordType::Cname), 6),
    (Field::Record(RecordType::Ns), 7),
    (Field::Record(RecordType::Dkim), 8),
    (Field::Record(RecordType::Dmarc), 9),
    (Field::Record(RecordType::Aaaa), 10),
];

/// Order in which a domain's records are fetched and written.
pub const LOOKUP_ORDER: &[RecordType] = &[
    RecordType::Mx,
    RecordType::Txt,
    RecordType::Spf,
    RecordType::A,
    RecordType::Cname,
    RecordType::Ns,
    RecordType::Aaaa,
    RecordType::Dkim,
    RecordType::Dmarc,
];

/// Column holding `field`.
pub fn column_of(field: Field) -> usize {
    COLUMN_PLAN
        .iter()
        .find(|(candidate, _)| *candidate == field)
        .map(|(_, column)| *column)
        // Every field variant is listed in the plan.
        .unwrap_or_else(|| unreachable!("{field:?} missing from COLUMN_PLAN"))
}

/// Column holding the domain name.
pub fn domain_column() -> usize {
    column_of(Field::Domain)
}

/// Column holding the formatted `record_type` value.
pub fn record_column(record_type: RecordType) -> usize {
    column_of(Field::Record(record_type))
}

/// Right-most column used by the layout.
pub fn last_column() -> usize {
    COLUMN_PLAN
        .iter()
        .map(|(_, column)| *column)
        .max()
        .unwrap_or(0)
}

/// Header labels, one per column from column 1 to `last_column()`.
pub fn header_labels() -> Vec<&'static str> {
    let mut labels = vec![""; last_column()];
    for (field, column) in COLUMN_PLAN {
        labels[column - 1] = field.label();
    }
    labels
}
