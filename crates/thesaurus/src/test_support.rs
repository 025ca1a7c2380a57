use crate::types::{DescriptorRecord, ROOT_NAME};

pub(crate) fn record(code: &str, name: &str, parent: Option<&str>) -> DescriptorRecord {
    DescriptorRecord::new(code, name, parent)
}

/// Root -> nut plants -> almond, plus tropical relatives sharing names.
pub(crate) fn almond_records() -> Vec<DescriptorRecord> {
    vec![
        record("R0", ROOT_NAME, None),
        record("B1213", "NUT PRODUCING PLANT", Some("R0")),
        record("B1062", "TEMPERATE-ZONE NUT PRODUCING PLANT", Some("B1213")),
        record("B1272", "ALMOND", Some("B1062")),
        record("B1503", "ALMOND, SWEET", Some("B1272")),
        record("B1504", "ALMOND, BITTER", Some("B1272")),
        record("B1064", "TROPICAL NUT PRODUCING PLANT", Some("B1213")),
        record("B2001", "JAVA-ALMOND", Some("B1064")),
        record("B2002", "JAVA-ALMOND", Some("B1064")),
        record("B2003", "TROPICAL ALMOND", Some("B1064")),
        record("B1347", "WALNUT", Some("B1062")),
        record("A0001", "PRODUCT TYPE", Some("R0")),
        record("A0150", "SNACK FOOD", Some("A0001")),
    ]
}

/// The four-record chain root -> B1213 -> B1062 -> B1272.
pub(crate) fn chain_records() -> Vec<DescriptorRecord> {
    vec![
        record("R0", ROOT_NAME, None),
        record("B1213", "NUT PRODUCING PLANT", Some("R0")),
        record("B1062", "TEMPERATE-ZONE NUT PRODUCING PLANT", Some("B1213")),
        record("B1272", "ALMOND", Some("B1062")),
    ]
}

pub(crate) fn codes<'a>(records: &[&'a DescriptorRecord]) -> Vec<&'a str> {
    records.iter().map(|r| r.code.as_str()).collect()
}
