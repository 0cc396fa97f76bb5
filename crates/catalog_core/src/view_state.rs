use crate::table::page_count;

/// Page sizes offered by the page-size selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    Five,
    #[default]
    Ten,
    Twenty,
    Fifty,
}

impl PageSize {
    pub const ALL: [PageSize; 4] = [PageSize::Five, PageSize::Ten, PageSize::Twenty, PageSize::Fifty];

    pub fn rows(self) -> usize {
        match self {
            PageSize::Five => 5,
            PageSize::Ten => 10,
            PageSize::Twenty => 20,
            PageSize::Fifty => 50,
        }
    }

    /// Maps a raw row count onto the enumerated set; anything else is rejected.
    pub fn from_rows(rows: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.rows() == rows)
    }

    /// Next larger size, wrapping around to the smallest.
    pub fn next(self) -> Self {
        let idx = self.position();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Next smaller size, wrapping around to the largest.
    pub fn previous(self) -> Self {
        let idx = self.position();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn position(self) -> usize {
        Self::ALL
            .iter()
            .position(|size| *size == self)
            .unwrap_or_default()
    }
}

/// Result of a pager move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMove {
    Moved,
    NoFurtherPage,
}

/// Search text and pagination cursor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    query: String,
    page_index: usize,
    page_size: PageSize,
}

impl ViewState {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            page_size,
            ..Self::default()
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
        self.page_index = 0;
    }

    pub fn set_page_size(&mut self, size: PageSize) {
        self.page_size = size;
        self.page_index = 0;
    }

    pub fn next_page(&mut self, filtered_count: usize) -> PageMove {
        let last = page_count(filtered_count, self.page_size) - 1;
        if self.page_index >= last {
            return PageMove::NoFurtherPage;
        }
        self.page_index += 1;
        PageMove::Moved
    }

    pub fn previous_page(&mut self) -> PageMove {
        if self.page_index == 0 {
            return PageMove::NoFurtherPage;
        }
        self.page_index -= 1;
        PageMove::Moved
    }

    pub(crate) fn reset_page(&mut self) {
        self.page_index = 0;
    }
}
