use crate::row::ROW_SIZE;

pub const PAGE_SIZE: usize = 4096;
pub const TABLE_MAX_PAGES: usize = 100;
pub const ROWS_PER_PAGE: usize = PAGE_SIZE / ROW_SIZE;
pub const TABLE_MAX_ROWS: usize = ROWS_PER_PAGE * TABLE_MAX_PAGES;

type Page = [u8; PAGE_SIZE];

/// Arena of up to `TABLE_MAX_PAGES` fixed-size pages. Pages are allocated
/// zeroed on first write and stay put for the lifetime of the table, so a
/// row slot is always found by pure arithmetic.
pub struct Pager {
    pages: Vec<Option<Box<Page>>>,
}

impl Pager {
    pub fn new() -> Self {
        Self {
            pages: (0..TABLE_MAX_PAGES).map(|_| None).collect(),
        }
    }

    /// Row `n` lives in page `n / ROWS_PER_PAGE` at byte offset
    /// `(n % ROWS_PER_PAGE) * ROW_SIZE`.
    fn locate(row_num: usize) -> (usize, usize) {
        debug_assert!(row_num < TABLE_MAX_ROWS);
        let page_num = row_num / ROWS_PER_PAGE;
        let byte_offset = (row_num % ROWS_PER_PAGE) * ROW_SIZE;
        (page_num, byte_offset)
    }

    /// Slot of a previously written row, or `None` if its page was never
    /// touched.
    pub fn row_slot(&self, row_num: usize) -> Option<&[u8]> {
        let (page_num, offset) = Self::locate(row_num);
        let page = self.pages[page_num].as_deref()?;
        Some(&page[offset..offset + ROW_SIZE])
    }

    /// Writable slot for a row, allocating its page on first touch.
    pub fn row_slot_mut(&mut self, row_num: usize) -> &mut [u8] {
        let (page_num, offset) = Self::locate(row_num);
        let page = self.pages[page_num].get_or_insert_with(|| Box::new([0; PAGE_SIZE]));
        &mut page[offset..offset + ROW_SIZE]
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new()
    }
}
