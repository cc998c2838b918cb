//! List View State
//!
//! Page-local state for a server-paginated table: the loaded page, its
//! counters, the client-side search term, and a fetch generation so only the
//! latest response is committed.

use tracing::{debug, warn};

use crate::api::Listing;
use crate::error::ApiError;
use crate::models::{ActivityLog, BlogPost, Customer, Lead, Record, Role, User};

/// Pages shown at once in the pager
pub const PAGE_WINDOW: u32 = 5;

/// Issued by `begin_load`, redeemed by `commit`/`fail`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Client-side substring search over a few nominated fields
pub trait Searchable {
    /// `term` is the raw search box value
    fn matches(&self, term: &str) -> bool;
}

fn contains_folded(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

impl Searchable for Lead {
    fn matches(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        contains_folded(&self.first_name, &needle)
            || contains_folded(&self.last_name, &needle)
            || self.phone.contains(term)
    }
}

impl Searchable for Customer {
    fn matches(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        contains_folded(&self.first_name, &needle)
            || contains_folded(&self.last_name, &needle)
            || self.phone.contains(term)
    }
}

impl Searchable for User {
    fn matches(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        contains_folded(&self.first_name, &needle)
            || contains_folded(&self.last_name, &needle)
            || contains_folded(&self.email, &needle)
    }
}

impl Searchable for ActivityLog {
    fn matches(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        contains_folded(&self.description, &needle)
            || self.user.as_ref().is_some_and(|u| {
                contains_folded(&u.email, &needle) || contains_folded(&u.first_name, &needle)
            })
    }
}

impl Searchable for Role {
    fn matches(&self, term: &str) -> bool {
        contains_folded(&self.name, &term.to_lowercase())
    }
}

impl Searchable for BlogPost {
    fn matches(&self, term: &str) -> bool {
        contains_folded(&self.title, &term.to_lowercase())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListState<R> {
    items: Vec<R>,
    loading: bool,
    current_page: u32,
    total_count: u32,
    total_pages: u32,
    search_term: String,
    generation: u64,
}

impl<R: Record> Default for ListState<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> ListState<R> {
    /// Empty, loading, on page 1
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            current_page: 1,
            total_count: 0,
            total_pages: 1,
            search_term: String::new(),
            generation: 0,
        }
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_count(&self) -> u32 {
        self.total_count
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    // ========================
    // Fetch lifecycle
    // ========================

    /// Start a fetch; any ticket issued earlier becomes stale
    pub fn begin_load(&mut self) -> FetchTicket {
        self.generation += 1;
        self.loading = true;
        FetchTicket(self.generation)
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Apply a response. Returns false (and changes nothing) for a stale ticket.
    pub fn commit(&mut self, ticket: FetchTicket, listing: Listing<R>) -> bool {
        if !self.is_current(ticket) {
            debug!(ticket = ticket.0, latest = self.generation, "dropping stale response");
            return false;
        }
        self.items = listing.items;
        self.total_count = listing.total_count;
        self.total_pages = listing.total_pages.max(1);
        self.loading = false;
        true
    }

    /// A failed read leaves the table empty; the error is only logged
    pub fn fail(&mut self, ticket: FetchTicket, err: &ApiError) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        warn!(error = %err, page = self.current_page, "list fetch failed");
        self.items.clear();
        self.loading = false;
        true
    }

    // ========================
    // Filtering and paging
    // ========================

    /// Records of the loaded page matching the search term
    pub fn visible(&self) -> Vec<&R>
    where
        R: Searchable,
    {
        if self.search_term.is_empty() {
            return self.items.iter().collect();
        }
        self.items.iter().filter(|r| r.matches(&self.search_term)).collect()
    }

    /// Pager is hidden while searching (search only covers the loaded page)
    pub fn show_pagination(&self) -> bool {
        self.search_term.is_empty() && self.total_pages > 1
    }

    /// Move to `page`, clamped into range. Returns whether the page changed.
    pub fn set_page(&mut self, page: u32) -> bool {
        let page = page.clamp(1, self.total_pages.max(1));
        if page == self.current_page {
            return false;
        }
        self.current_page = page;
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.set_page(self.current_page.saturating_add(1))
    }

    pub fn prev_page(&mut self) -> bool {
        self.set_page(self.current_page.saturating_sub(1))
    }

    /// Back to page 1 without clamping (filters changed)
    pub fn reset_page(&mut self) {
        self.current_page = 1;
    }

    pub fn page_numbers(&self) -> Vec<u32> {
        page_window(self.current_page, self.total_pages)
    }

    // ========================
    // Optimistic local mutation
    // ========================

    /// Patch a loaded record in place. Returns false when it is not on this page.
    pub fn patch(&mut self, id: i64, f: impl FnOnce(&mut R)) -> bool {
        match self.items.iter_mut().find(|r| r.id() == id) {
            Some(record) => {
                f(record);
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.items.len();
        self.items.retain(|r| r.id() != id);
        if self.items.len() < before {
            self.total_count = self.total_count.saturating_sub(1);
            true
        } else {
            false
        }
    }
}

/// Up to five page numbers around `current`
pub fn page_window(current: u32, total: u32) -> Vec<u32> {
    let total = total.max(1);
    if total <= PAGE_WINDOW {
        return (1..=total).collect();
    }
    let start = if current <= 3 {
        1
    } else if current >= total - 2 {
        total - (PAGE_WINDOW - 1)
    } else {
        current - 2
    };
    (start..start + PAGE_WINDOW).collect()
}

/// `max(1, ceil(count / limit))`
pub fn total_pages_for(total_count: u32, limit: u32) -> u32 {
    if limit == 0 {
        return 1;
    }
    total_count.div_ceil(limit).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::FakeApi;
    use crate::api::{LeadQuery, RecordApi};
    use serde_json::json;

    fn lead(id: i64, first: &str, last: &str, phone: &str) -> Lead {
        serde_json::from_value(json!({
            "id": id, "firstName": first, "lastName": last, "phone": phone
        }))
        .unwrap()
    }

    fn loaded(items: Vec<Lead>, total_pages: u32) -> ListState<Lead> {
        let mut state = ListState::new();
        let ticket = state.begin_load();
        let total_count = items.len() as u32;
        state.commit(ticket, Listing { items, total_count, total_pages });
        state
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut state: ListState<Lead> = ListState::new();
        let first = state.begin_load();
        let second = state.begin_load();

        assert!(state.commit(second, Listing::unpaged(vec![lead(2, "Yeni", "Sayfa", "1")])));
        assert!(!state.commit(first, Listing::unpaged(vec![lead(1, "Eski", "Sayfa", "1")])));
        assert_eq!(state.items()[0].id, 2);
        assert!(!state.fail(first, &ApiError::Network("timeout".into())));
        assert_eq!(state.items().len(), 1);
    }

    #[test]
    fn test_failure_empties_list() {
        let mut state = loaded(vec![lead(1, "Ali", "Kaya", "0532")], 1);
        let ticket = state.begin_load();
        assert!(state.loading());
        state.fail(ticket, &ApiError::Network("offline".into()));
        assert!(state.items().is_empty());
        assert!(!state.loading());
    }

    #[test]
    fn test_search_is_case_insensitive_on_names_verbatim_on_phone() {
        let mut state = loaded(
            vec![
                lead(1, "Ayşe", "Demir", "0532 111 22 33"),
                lead(2, "Mehmet", "Kaya", "0544 999 88 77"),
            ],
            1,
        );
        state.set_search("KAYA");
        let ids: Vec<i64> = state.visible().iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![2]);

        state.set_search("111 22");
        assert_eq!(state.visible()[0].id, 1);

        state.set_search("");
        assert_eq!(state.visible().len(), 2);
    }

    #[test]
    fn test_search_only_covers_loaded_page_and_hides_pager() {
        // page 1 of 2 is loaded; a match that lives on page 2 is not found
        let mut state = loaded(vec![lead(1, "Ali", "Kaya", "0532")], 2);
        assert!(state.show_pagination());
        state.set_search("Zeynep");
        assert!(state.visible().is_empty());
        assert!(!state.show_pagination());
    }

    #[test]
    fn test_set_page_clamps() {
        let mut state = loaded(vec![], 3);
        assert!(!state.prev_page());
        assert!(state.set_page(9));
        assert_eq!(state.current_page(), 3);
        assert!(!state.next_page());
        state.reset_page();
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_page_window() {
        assert_eq!(page_window(1, 3), vec![1, 2, 3]);
        assert_eq!(page_window(2, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(6, 10), vec![4, 5, 6, 7, 8]);
        assert_eq!(page_window(9, 10), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(1, 0), vec![1]);
    }

    #[test]
    fn test_page_numbers_follow_current_page() {
        let mut state = loaded(vec![], 10);
        assert_eq!(state.page_numbers(), vec![1, 2, 3, 4, 5]);
        state.set_page(6);
        assert_eq!(state.page_numbers(), vec![4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_total_pages_for() {
        assert_eq!(total_pages_for(150, 100), 2);
        assert_eq!(total_pages_for(0, 100), 1);
        assert_eq!(total_pages_for(200, 100), 2);
    }

    #[test]
    fn test_patch_and_remove() {
        let mut state = loaded(vec![lead(1, "Ali", "Kaya", "0532"), lead(2, "Can", "Ak", "0533")], 1);
        assert!(state.patch(2, |l| l.listing_status = Some("sold".into())));
        assert_eq!(state.items()[1].listing_status.as_deref(), Some("sold"));
        assert!(!state.patch(9, |_| {}));
        assert!(state.remove(1));
        assert_eq!(state.total_count(), 1);
    }

    #[tokio::test]
    async fn test_paging_back_reproduces_first_page() {
        let api = FakeApi::with_leads(150);
        let mut state: ListState<Lead> = ListState::new();

        let ticket = state.begin_load();
        let page1 = api.list(&LeadQuery::new(1, 100).to_params()).await.unwrap();
        state.commit(ticket, page1);
        assert_eq!(state.total_pages(), 2);
        assert_eq!(state.total_count(), 150);
        let first_ids: Vec<i64> = state.items().iter().map(|l| l.id).collect();

        assert!(state.next_page());
        let ticket = state.begin_load();
        let page2 = api.list(&LeadQuery::new(state.current_page(), 100).to_params()).await.unwrap();
        state.commit(ticket, page2);
        assert_eq!(state.items().len(), 50);

        assert!(state.prev_page());
        let ticket = state.begin_load();
        let again = api.list(&LeadQuery::new(state.current_page(), 100).to_params()).await.unwrap();
        state.commit(ticket, again);
        let ids: Vec<i64> = state.items().iter().map(|l| l.id).collect();
        assert_eq!(ids, first_ids);
    }
}
