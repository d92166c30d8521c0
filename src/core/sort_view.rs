use crate::domain::model::{Campsite, SortOption};
use std::cmp::Reverse;

/// 依排序方式回傳新的清單，不修改輸入。
///
/// All orders are stable: records with equal keys keep their input order.
pub fn reorder(records: &[Campsite], option: SortOption) -> Vec<Campsite> {
    let mut ordered = records.to_vec();
    match option {
        SortOption::NameAsc => ordered.sort_by_cached_key(|camp| camp.name.to_lowercase()),
        SortOption::NameDesc => {
            ordered.sort_by_cached_key(|camp| Reverse(camp.name.to_lowercase()))
        }
        SortOption::PlacesDesc => ordered.sort_by_key(|camp| Reverse(camp.places)),
    }
    ordered
}

/// Records plus the current sort selection, with the ordering memoized until
/// either of them changes.
#[derive(Debug, Clone, Default)]
pub struct CampsiteView {
    records: Vec<Campsite>,
    selected: SortOption,
    ordered: Option<Vec<Campsite>>,
}

impl CampsiteView {
    pub fn new(records: Vec<Campsite>) -> Self {
        Self::with_sort(records, SortOption::default())
    }

    pub fn with_sort(records: Vec<Campsite>, selected: SortOption) -> Self {
        Self {
            records,
            selected,
            ordered: None,
        }
    }

    pub fn selected(&self) -> SortOption {
        self.selected
    }

    /// Records in load order.
    pub fn records(&self) -> &[Campsite] {
        &self.records
    }

    pub fn select(&mut self, option: SortOption) {
        if option != self.selected {
            tracing::debug!("Sort changed: {} -> {}", self.selected, option);
            self.selected = option;
            self.ordered = None;
        }
    }

    pub fn replace_records(&mut self, records: Vec<Campsite>) {
        self.records = records;
        self.ordered = None;
    }

    pub fn ordered(&mut self) -> &[Campsite] {
        let (records, selected) = (&self.records, self.selected);
        self.ordered.get_or_insert_with(|| reorder(records, selected))
    }

    pub fn is_cached(&self) -> bool {
        self.ordered.is_some()
    }
}
