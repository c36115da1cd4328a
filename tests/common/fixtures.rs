//! Static pasted-log corpora used across harnesses.
//!
//! Every corpus is resolved against [`reference`], Wednesday 25 June 2025 at
//! 10:00, so weekday timestamps land on fixed dates.

use chrono::{NaiveDate, NaiveDateTime};

/// Wednesday 25 June 2025, 10:00.
pub fn reference() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 25)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap()
}

/// Notification panel copied as-is: header, noise lines, four usable groups
/// (three triplets and one CORP batch placement) and one triplet whose
/// timestamp cannot be resolved.
pub const FREE_TEXT_LOG: &str = "\
Notifications
3 unread
Munish Balakrishnan, Tue 3:45 PM
D-WK25_Digital_Front
/Volumes/Walmart/WK25/press/Front.psd

Mark all as read? Confirm
Sakthivel S, Jun 24, 4:15 PM
AP-WK25 Rollback_02
/Volumes/Walmart/WK25/After_Press/Rollback_02.pdf
Naveen Kumar, Wed 11:20 AM
PR-WK26 Grocery
/Volumes/Walmart/WK26/Print_Ready/Grocery.pdf
Mohammed Siddik placed files
CORP [WK 25 Digital_7_Caribbean_Global]_01
/Volumes/Walmart/CORP/CPR/Caribbean.pdf
Prasanth As, Someday 1:00 PM
D-WK27_Insert
/Volumes/Walmart/WK27/PROOF1/Insert.pdf
Reduce file size
";

/// Strict name / path pairs with `<assembler>-<qc>-` code prefixes.
pub const CODED_LOG: &str = "\
MU-D-WK25_Front
/Volumes/Walmart/WK25/PrintReady/Front.pdf
SS-H-AP-WK25 Back
/Volumes/Walmart/WK25/press/Back.pdf
XX-Q-WK26 Promo
/Volumes/Walmart/WK26/CPR/Promo.pdf
";

/// Nothing in here matches any shape.
pub const UNMATCHED_LOG: &str = "\
Notifications
Munish Balakrishnan commented on a file
Open in browser
";

/// Line fragments that proptest strategies stitch together into random logs.
pub const LINE_POOL: &[&str] = &[
    "John Doe, Tue 3:45 PM",
    "Jane Roe, Jun 24, 4:15 PM",
    "Jane Roe, Someday 9:00 AM",
    "D-PAGE1",
    "AP-WK25 Front",
    "PR-WK26_Back",
    "MU-D-PAGE2",
    "CORP [WK 25 Digital_7]_01",
    "/Volumes/job/press/file.psd",
    "/Volumes/job/CPR/PROOF1/file.pdf",
    "/Volumes/job/PrintReady/",
    "Mohammed Siddik placed files",
    "3 unread",
    "Notifications",
    "",
];
