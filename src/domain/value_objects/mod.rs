mod report_date;
mod sbs_no;
mod store_code;

pub use report_date::{ReportDate, REPORT_DATE_FORMAT};
pub use sbs_no::SbsNo;
pub use store_code::{StoreCode, StoreCodePolicy};
