//! Page-number pagination over a counted result set.
//!
//! Page numbers are 1-based. An empty result set still has one (empty) page.

use serde::Serialize;
use std::num::{IntErrorKind, ParseIntError};

/// Why a requested page number could not be served as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageError {
    /// The raw value is absent or not an integer.
    NotAnInteger,
    /// The integer is below 1 or beyond the last page.
    Empty,
}

impl PageError {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageError::NotAnInteger => "not_an_integer",
            PageError::Empty => "out_of_range",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    count: u64,
    per_page: u32,
}

impl Paginator {
    /// `per_page` of 0 is treated as 1.
    pub fn new(count: u64, per_page: u32) -> Self {
        Self {
            count,
            per_page: per_page.max(1),
        }
    }

    pub fn num_pages(&self) -> u32 {
        let per_page = u64::from(self.per_page);
        let pages = self.count.div_ceil(per_page).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Parse and range-check a raw page number.
    pub fn validate_number(&self, raw: Option<&str>) -> Result<u32, PageError> {
        let raw = raw.map(str::trim).ok_or(PageError::NotAnInteger)?;
        let number: i64 = raw.parse().map_err(|e: ParseIntError| match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => PageError::Empty,
            _ => PageError::NotAnInteger,
        })?;
        if number < 1 || number > i64::from(self.num_pages()) {
            return Err(PageError::Empty);
        }
        Ok(number as u32)
    }

    /// Resolve a raw page number to a servable one: unparsable input gives
    /// the first page, out-of-range input gives the last page.
    pub fn resolve(&self, raw: Option<&str>) -> (u32, Option<PageError>) {
        match self.validate_number(raw) {
            Ok(number) => (number, None),
            Err(PageError::NotAnInteger) => (1, Some(PageError::NotAnInteger)),
            Err(PageError::Empty) => (self.num_pages(), Some(PageError::Empty)),
        }
    }

    /// `(limit, offset)` window for a valid page number.
    pub fn window(&self, number: u32) -> (i64, i64) {
        let offset = u64::from(number.saturating_sub(1)) * u64::from(self.per_page);
        (i64::from(self.per_page), offset as i64)
    }

    pub fn page<T>(&self, number: u32, items: Vec<T>) -> Page<T> {
        let num_pages = self.num_pages();
        let (_, offset) = self.window(number);
        let (start_index, end_index) = if self.count == 0 {
            (0, 0)
        } else {
            let start = offset as u64 + 1;
            (start, offset as u64 + items.len() as u64)
        };

        Page {
            items,
            number,
            num_pages,
            count: self.count,
            per_page: self.per_page,
            has_next: number < num_pages,
            has_previous: number > 1,
            next_page_number: (number < num_pages).then_some(number + 1),
            previous_page_number: (number > 1).then(|| number - 1),
            start_index,
            end_index,
        }
    }
}

/// One page of results plus navigation metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub number: u32,
    pub num_pages: u32,
    pub count: u64,
    pub per_page: u32,
    pub has_next: bool,
    pub has_previous: bool,
    pub next_page_number: Option<u32>,
    pub previous_page_number: Option<u32>,
    /// 1-based index of the first item, 0 when there are no items
    pub start_index: u64,
    pub end_index: u64,
}
