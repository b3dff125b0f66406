use super::record::PageRecord;
use super::types::SortDirection;

/// Stable sort by the numeric `order` field, smallest first. Records with
/// a missing or non-numeric `order` compare as +infinity and land at the
/// end; equal keys keep their relative order.
pub fn sort_ascending(mut records: Vec<PageRecord>) -> Vec<PageRecord> {
    records.sort_by(|a, b| a.order_key().total_cmp(&b.order_key()));
    records
}

/// Stable sort by the numeric `order` field, largest first. Records with a
/// missing or non-numeric `order` compare as +infinity and land at the
/// front; equal keys keep their relative order.
pub fn sort_descending(mut records: Vec<PageRecord>) -> Vec<PageRecord> {
    records.sort_by(|a, b| b.order_key().total_cmp(&a.order_key()));
    records
}

pub fn sort_by_order(records: Vec<PageRecord>, direction: SortDirection) -> Vec<PageRecord> {
    match direction {
        SortDirection::Asc => sort_ascending(records),
        SortDirection::Desc => sort_descending(records),
    }
}
