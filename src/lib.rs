pub mod pager;
pub mod repl;
pub mod row;
pub mod statement;
pub mod table;

pub use pager::{PAGE_SIZE, ROWS_PER_PAGE, TABLE_MAX_PAGES, TABLE_MAX_ROWS};
pub use row::{COLUMN_EMAIL_SIZE, COLUMN_USERNAME_SIZE, EMAIL_SIZE, ROW_SIZE, USERNAME_SIZE};
