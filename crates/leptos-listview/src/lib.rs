//! Leptos ListView Utilities
//!
//! Client-side search, facet filtering and pagination over a collection that
//! was loaded in one piece. The free functions do the work so they can be
//! tested without a reactive runtime; `ListView` wires them to signals.

use leptos::prelude::*;
use std::collections::HashSet;

// ========================
// Row Contract
// ========================

/// A categorical value rows can be filtered on
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Facet {
    /// Value compared against the selected filter
    pub value: String,
    /// Text shown in the filter dropdown
    pub label: String,
}

impl Facet {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Facet whose label is its value
    pub fn plain(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
        }
    }
}

/// Anything that can be shown as a row of a list view
pub trait Listable {
    /// Stable identity, used for keyed rendering and local removal
    fn key(&self) -> String;

    /// Text attributes the search box matches against
    fn search_fields(&self) -> Vec<&str>;

    /// Value for the facet filter. Rows without one only match "all".
    fn facet(&self) -> Option<Facet>;
}

// ========================
// Query
// ========================

/// Search text, selected facet and 1-based page
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery {
    pub search: String,
    /// `None` is the "all" option
    pub facet: Option<String>,
    pub page: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            facet: None,
            page: 1,
        }
    }
}

impl ListQuery {
    /// Replace the search text. Always goes back to page 1.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    /// Replace the facet selection. Always goes back to page 1.
    pub fn set_facet(&mut self, facet: Option<String>) {
        self.facet = facet;
        self.page = 1;
    }

    pub fn matches<T: Listable>(&self, item: &T) -> bool {
        matches_search(item, &self.search) && matches_facet(item, self.facet.as_deref())
    }
}

/// Case-insensitive substring match over the row's search fields
pub fn matches_search<T: Listable>(item: &T, search: &str) -> bool {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    item.search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Exact match on the facet value
pub fn matches_facet<T: Listable>(item: &T, facet: Option<&str>) -> bool {
    match facet {
        None => true,
        Some(wanted) => item.facet().is_some_and(|f| f.value == wanted),
    }
}

pub fn filter_items<T: Listable + Clone>(items: &[T], query: &ListQuery) -> Vec<T> {
    items.iter().filter(|item| query.matches(*item)).cloned().collect()
}

// ========================
// Pagination
// ========================

/// Number of pages needed for `len` rows (0 when there are no rows)
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Keep `page` inside `[1, max(1, total_pages)]`
pub fn clamp_page(page: usize, len: usize, page_size: usize) -> usize {
    page.clamp(1, total_pages(len, page_size).max(1))
}

/// Rows shown on `page`
pub fn page_window<T: Clone>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    let page = clamp_page(page, items.len(), page_size);
    items
        .iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .cloned()
        .collect()
}

/// Distinct facets in first-seen order
pub fn facet_options<T: Listable>(items: &[T]) -> Vec<Facet> {
    let mut seen = HashSet::new();
    items
        .iter()
        .filter_map(Listable::facet)
        .filter(|facet| seen.insert(facet.value.clone()))
        .collect()
}

// ========================
// Local Mutation
// ========================

/// Remove the row with `key`. Returns whether anything was removed.
pub fn remove_by_key<T: Listable>(items: &mut Vec<T>, key: &str) -> bool {
    let before = items.len();
    items.retain(|item| item.key() != key);
    items.len() != before
}

/// Replace the row with the same key, or append it
pub fn upsert<T: Listable>(items: &mut Vec<T>, item: T) {
    let key = item.key();
    match items.iter_mut().find(|existing| existing.key() == key) {
        Some(slot) => *slot = item,
        None => items.push(item),
    }
}

// ========================
// Overlay State
// ========================

/// Open/closed state of a modal, carrying what it was opened for
#[derive(Clone, Debug, PartialEq)]
pub enum ModalState<T> {
    Closed,
    Open(T),
}

impl<T> Default for ModalState<T> {
    fn default() -> Self {
        ModalState::Closed
    }
}

impl<T> ModalState<T> {
    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open(_))
    }

    pub fn target(&self) -> Option<&T> {
        match self {
            ModalState::Open(target) => Some(target),
            ModalState::Closed => None,
        }
    }

    pub fn open(&mut self, target: T) {
        *self = ModalState::Open(target);
    }

    pub fn close(&mut self) {
        *self = ModalState::Closed;
    }
}

/// Single-record lookup backing a detail view
#[derive(Clone, Debug, PartialEq)]
pub enum DetailState<T> {
    Loading,
    Ready(T),
    /// The lookup finished and the record does not exist
    Missing,
    Failed(String),
}

impl<T> DetailState<T> {
    pub fn from_lookup<E: std::fmt::Display>(result: Result<Option<T>, E>) -> Self {
        match result {
            Ok(Some(item)) => DetailState::Ready(item),
            Ok(None) => DetailState::Missing,
            Err(e) => DetailState::Failed(e.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, DetailState::Loading)
    }
}

// ========================
// Reactive Handle
// ========================

/// Signals for one list page: the loaded rows, the query and derived views
pub struct ListView<T: Send + Sync + 'static> {
    pub items: RwSignal<Vec<T>>,
    pub query: RwSignal<ListQuery>,
    /// Rows matching search and facet
    pub filtered: Memo<Vec<T>>,
    /// Current page, clamped to the filtered length
    pub current_page: Memo<usize>,
    pub total_pages: Memo<usize>,
    /// Rows on the current page
    pub page_items: Memo<Vec<T>>,
    /// Filter options derived from the loaded rows
    pub facets: Memo<Vec<Facet>>,
    page_size: usize,
}

impl<T: Send + Sync + 'static> Clone for ListView<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListView<T> {}

/// Create the signals for a list page showing `page_size` rows at a time
pub fn create_list_view<T>(page_size: usize) -> ListView<T>
where
    T: Listable + Clone + PartialEq + Send + Sync + 'static,
{
    let items = RwSignal::new(Vec::<T>::new());
    let query = RwSignal::new(ListQuery::default());

    let filtered = Memo::new(move |_| {
        query.with(|q| items.with(|all| filter_items(all, q)))
    });
    let current_page = Memo::new(move |_| {
        let len = filtered.with(Vec::len);
        query.with(|q| clamp_page(q.page, len, page_size))
    });
    let total_pages = Memo::new(move |_| filtered.with(|rows| total_pages(rows.len(), page_size)));
    let page_items = Memo::new(move |_| {
        let page = current_page.get();
        filtered.with(|rows| page_window(rows, page, page_size))
    });
    let facets = Memo::new(move |_| items.with(|all| facet_options(all)));

    ListView {
        items,
        query,
        filtered,
        current_page,
        total_pages,
        page_items,
        facets,
        page_size,
    }
}

impl<T> ListView<T>
where
    T: Listable + Clone + PartialEq + Send + Sync + 'static,
{
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Replace the loaded rows, keeping the facet and page valid
    pub fn set_items(&self, rows: Vec<T>) {
        self.items.set(rows);
        self.settle();
    }

    pub fn set_search(&self, search: impl Into<String>) {
        let search = search.into();
        self.query.update(|q| q.set_search(search));
    }

    pub fn set_facet(&self, facet: Option<String>) {
        self.query.update(|q| q.set_facet(facet));
    }

    pub fn go_to(&self, page: usize) {
        let len = self.filtered.with_untracked(Vec::len);
        let page_size = self.page_size;
        self.query.update(|q| q.page = clamp_page(page, len, page_size));
    }

    pub fn next_page(&self) {
        self.go_to(self.current_page.get_untracked() + 1);
    }

    pub fn prev_page(&self) {
        self.go_to(self.current_page.get_untracked().saturating_sub(1));
    }

    /// Drop a row locally (after a successful delete)
    pub fn remove(&self, key: &str) -> bool {
        let mut removed = false;
        self.items.update(|rows| removed = remove_by_key(rows, key));
        self.settle();
        removed
    }

    /// Merge a record returned by the server
    pub fn upsert(&self, row: T) {
        self.items.update(|rows| upsert(rows, row));
        self.settle();
    }

    /// After the rows changed: drop a facet no row carries any more, then
    /// pull the page back into range
    fn settle(&self) {
        let stale = self.query.with_untracked(|q| match &q.facet {
            Some(value) => self
                .items
                .with_untracked(|all| all.iter().all(|row| row.facet().map_or(true, |f| &f.value != value))),
            None => false,
        });
        if stale {
            self.query.update(|q| q.set_facet(None));
        }
        let len = self.filtered.with_untracked(Vec::len);
        self.clamp_to(len);
    }

    fn clamp_to(&self, len: usize) {
        let page_size = self.page_size;
        self.query.update(|q| {
            let clamped = clamp_page(q.page, len, page_size);
            if clamped != q.page {
                q.page = clamped;
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        id: String,
        name: String,
        email: String,
        parent: Option<(String, String)>,
    }

    impl Listable for Row {
        fn key(&self) -> String {
            self.id.clone()
        }

        fn search_fields(&self) -> Vec<&str> {
            vec![self.name.as_str(), self.email.as_str()]
        }

        fn facet(&self) -> Option<Facet> {
            self.parent
                .as_ref()
                .map(|(id, name)| Facet::new(id.clone(), name.clone()))
        }
    }

    fn row(id: &str, name: &str, parent: Option<(&str, &str)>) -> Row {
        Row {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{}@example.com", id),
            parent: parent.map(|(a, b)| (a.to_string(), b.to_string())),
        }
    }

    fn numbered(n: usize) -> Vec<Row> {
        (0..n).map(|i| row(&format!("r{}", i), &format!("Row {}", i), None)).collect()
    }

    #[test]
    fn test_search_and_parent_filter() {
        let items = vec![row("a", "Tech", None), row("b", "Web", Some(("a", "Tech")))];

        let mut query = ListQuery::default();
        query.set_search("web");
        let found = filter_items(&items, &query);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "b");

        let mut query = ListQuery::default();
        query.set_facet(Some("a".to_string()));
        let found = filter_items(&items, &query);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "b");
    }

    #[test]
    fn test_search_is_case_insensitive_and_covers_all_fields() {
        let items = vec![row("ann", "Ann Lee", None), row("bob", "Bob Ray", None)];
        let mut query = ListQuery::default();

        query.set_search("LEE");
        assert_eq!(filter_items(&items, &query)[0].id, "ann");

        query.set_search("bob@example");
        assert_eq!(filter_items(&items, &query)[0].id, "bob");

        query.set_search("");
        assert_eq!(filter_items(&items, &query).len(), 2);
    }

    #[test]
    fn test_filtering_twice_is_idempotent() {
        let items = vec![
            row("1", "Rust Developer", None),
            row("2", "Data Analyst", None),
            row("3", "rust intern", None),
        ];
        let mut query = ListQuery::default();
        query.set_search("rust");

        let once = filter_items(&items, &query);
        let twice = filter_items(&once, &query);
        assert_eq!(once, twice);
        assert_eq!(once.len(), 2);
    }

    #[test]
    fn test_last_page_holds_the_remainder() {
        for (n, p) in [(1, 5), (5, 5), (6, 5), (23, 10), (30, 10)] {
            let rows = numbered(n);
            let pages = total_pages(n, p);
            assert_eq!(pages, (n + p - 1) / p);
            let last = page_window(&rows, pages, p);
            assert_eq!(last.len(), n - p * (pages - 1));
            assert!((1..=p).contains(&last.len()));
        }
        assert_eq!(total_pages(0, 10), 0);
    }

    #[test]
    fn test_page_window_clamps_out_of_range_pages() {
        let rows = numbered(12);
        assert_eq!(page_window(&rows, 0, 5)[0].id, "r0");
        assert_eq!(page_window(&rows, 9, 5).len(), 2);
        assert!(page_window(&Vec::<Row>::new(), 3, 5).is_empty());
        assert_eq!(clamp_page(7, 0, 5), 1);
    }

    #[test]
    fn test_search_and_facet_always_reset_page() {
        let mut query = ListQuery { page: 2, ..Default::default() };
        query.set_search("row");
        assert_eq!(query.page, 1);

        query.page = 3;
        query.set_facet(Some("x".to_string()));
        assert_eq!(query.page, 1);

        query.page = 2;
        query.set_facet(None);
        assert_eq!(query.page, 1);
    }

    #[test]
    fn test_facet_options_are_distinct_in_first_seen_order() {
        let items = vec![
            row("1", "A", Some(("p2", "Design"))),
            row("2", "B", None),
            row("3", "C", Some(("p1", "Tech"))),
            row("4", "D", Some(("p2", "Design"))),
        ];
        let options = facet_options(&items);
        assert_eq!(options, vec![Facet::new("p2", "Design"), Facet::new("p1", "Tech")]);
    }

    #[test]
    fn test_remove_by_key() {
        let mut rows = numbered(5);
        rows[2].id = "x".to_string();

        assert!(remove_by_key(&mut rows, "x"));
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| r.id != "x"));
        assert!(!remove_by_key(&mut rows, "x"));
    }

    #[test]
    fn test_upsert_replaces_or_appends() {
        let mut rows = numbered(2);
        let mut renamed = rows[0].clone();
        renamed.name = "Renamed".to_string();

        upsert(&mut rows, renamed);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Renamed");

        upsert(&mut rows, row("new", "New", None));
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn test_modal_state_lifecycle() {
        let mut modal = ModalState::<String>::default();
        assert!(!modal.is_open());

        modal.open("b".to_string());
        assert_eq!(modal.target().map(String::as_str), Some("b"));

        modal.close();
        assert_eq!(modal, ModalState::Closed);
    }

    #[test]
    fn test_detail_state_from_lookup() {
        assert_eq!(DetailState::from_lookup::<String>(Ok(Some(1))), DetailState::Ready(1));
        assert_eq!(DetailState::<i32>::from_lookup::<String>(Ok(None)), DetailState::Missing);
        assert_eq!(
            DetailState::<i32>::from_lookup(Err("boom")),
            DetailState::Failed("boom".to_string())
        );
    }

    #[test]
    fn test_list_view_signals() {
        Owner::new().with(|| {
            let view = create_list_view::<Row>(5);
            view.set_items(numbered(12));
            assert_eq!(view.total_pages.get_untracked(), 3);

            view.go_to(3);
            assert_eq!(view.current_page.get_untracked(), 3);
            assert_eq!(view.page_items.get_untracked().len(), 2);

            // still in bounds for the new result set, but reset anyway
            view.set_search("row");
            assert_eq!(view.current_page.get_untracked(), 1);

            view.go_to(3);
            view.set_facet(None);
            assert_eq!(view.current_page.get_untracked(), 1);

            view.next_page();
            view.next_page();
            view.next_page();
            assert_eq!(view.current_page.get_untracked(), 3);
            view.prev_page();
            assert_eq!(view.current_page.get_untracked(), 2);
        });
    }

    #[test]
    fn test_list_view_remove_clamps_page() {
        Owner::new().with(|| {
            let view = create_list_view::<Row>(5);
            view.set_items(numbered(6));
            view.go_to(2);

            assert!(view.remove("r5"));
            assert_eq!(view.items.get_untracked().len(), 5);
            assert_eq!(view.total_pages.get_untracked(), 1);
            assert_eq!(view.query.get_untracked().page, 1);
        });
    }

    #[test]
    fn test_list_view_drops_facet_nobody_has() {
        Owner::new().with(|| {
            let view = create_list_view::<Row>(5);
            view.set_items(vec![
                row("a", "Tech", None),
                row("b", "Web", Some(("a", "Tech"))),
                row("c", "Design", Some(("d", "Art"))),
            ]);
            view.set_facet(Some("a".to_string()));
            assert_eq!(view.filtered.get_untracked().len(), 1);

            // another row still carries "d"
            view.set_facet(Some("d".to_string()));
            view.remove("b");
            assert_eq!(view.query.get_untracked().facet, Some("d".to_string()));

            view.remove("c");
            assert_eq!(view.query.get_untracked().facet, None);
            assert_eq!(view.filtered.get_untracked().len(), 1);

            view.set_facet(Some("a".to_string()));
            view.set_items(vec![row("a", "Tech", None)]);
            assert_eq!(view.query.get_untracked().facet, None);
            assert!(view.facets.get_untracked().is_empty());
        });
    }
}
