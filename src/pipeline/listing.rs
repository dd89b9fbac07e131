//! Listing state: the current criteria plus the page being viewed.
//!
//! Holds no catalog and computes nothing; callers feed [`ListingState::criteria`]
//! and [`ListingState::page_request`] into the pipeline on every change.

use super::criteria::FilterCriteria;
use super::paginate::PageRequest;
use crate::config::DEFAULT_PAGE_SIZE;

#[derive(Debug, Clone, PartialEq)]
pub struct ListingState {
    criteria: FilterCriteria,
    page: usize,
    page_size: usize,
}

impl Default for ListingState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ListingState {
    pub fn new(page_size: usize) -> Self {
        Self {
            criteria: FilterCriteria::default(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.page_size)
    }

    /// Replace the criteria. Any actual change sends the shopper back to page 1.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        if criteria != self.criteria {
            self.criteria = criteria;
            self.page = 1;
        }
    }

    /// Apply an in-place edit to the criteria, with the same page reset rule.
    pub fn update(&mut self, edit: impl FnOnce(&mut FilterCriteria)) {
        let mut next = self.criteria.clone();
        edit(&mut next);
        self.set_criteria(next);
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }
}
