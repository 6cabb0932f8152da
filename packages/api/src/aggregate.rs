//! # Attendance aggregation
//!
//! Classifies backend status codes into three buckets and summarises a list of
//! [`AttendanceRecord`]s. The dashboard overview and the attendance page both go
//! through [`AttendanceSummary::from_records`], so they always agree.
//!
//! ## Classification
//!
//! | Bucket | Codes (case-insensitive, untrimmed) |
//! |--------|--------------------------|
//! | [`AttendanceStatus::Present`] | `ASISTIO`, `PRESENTE`, `A` |
//! | [`AttendanceStatus::Late`] | `TARDANZA`, `T` |
//! | [`AttendanceStatus::Absent`] | everything else, including unknown codes such as `PERMISO` |

use serde::{Deserialize, Serialize};

use crate::models::AttendanceRecord;

const PRESENT_CODES: [&str; 3] = ["ASISTIO", "PRESENTE", "A"];
const LATE_CODES: [&str; 2] = ["TARDANZA", "T"];

/// Presentation category of an attendance status code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Late,
    Absent,
}

/// Classify a raw status code.
pub fn classify(status: &str) -> AttendanceStatus {
    let code = status.to_uppercase();
    if PRESENT_CODES.contains(&code.as_str()) {
        AttendanceStatus::Present
    } else if LATE_CODES.contains(&code.as_str()) {
        AttendanceStatus::Late
    } else {
        AttendanceStatus::Absent
    }
}

/// Counts per bucket plus the attendance percentage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    pub total: usize,
    pub present: usize,
    pub late: usize,
    pub absent: usize,
    pub percentage: u32,
}

impl AttendanceSummary {
    pub fn from_records(records: &[AttendanceRecord]) -> Self {
        let total = records.len();
        let (present, late) = records
            .iter()
            .fold((0, 0), |(present, late), record| match record.category() {
                AttendanceStatus::Present => (present + 1, late),
                AttendanceStatus::Late => (present, late + 1),
                AttendanceStatus::Absent => (present, late),
            });
        Self {
            total,
            present,
            late,
            // Absent is whatever is left over
            absent: total - present - late,
            percentage: percentage(present, total),
        }
    }
}

/// `round(part / total * 100)` with halves rounded up; 0 when `total` is 0.
pub fn percentage(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((part * 200 + total) / (total * 2)) as u32
}

/// Client-side filter over already fetched records.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AttendanceFilter {
    #[default]
    All,
    Only(AttendanceStatus),
}

impl AttendanceFilter {
    pub fn matches(&self, record: &AttendanceRecord) -> bool {
        match self {
            AttendanceFilter::All => true,
            AttendanceFilter::Only(status) => record.category() == *status,
        }
    }

    pub fn apply(&self, records: &[AttendanceRecord]) -> Vec<AttendanceRecord> {
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(status: &str) -> AttendanceRecord {
        AttendanceRecord {
            date: Some("2024-03-15".to_string()),
            status: Some(status.to_string()),
            ..Default::default()
        }
    }

    fn records(statuses: &[&str]) -> Vec<AttendanceRecord> {
        statuses.iter().map(|s| record(s)).collect()
    }

    #[test]
    fn test_classification_is_case_insensitive() {
        for code in ["asistio", "ASISTIO", "A", "a", "Presente"] {
            assert_eq!(classify(code), AttendanceStatus::Present, "{code}");
        }
        for code in ["tardanza", "T", "t"] {
            assert_eq!(classify(code), AttendanceStatus::Late, "{code}");
        }
    }

    #[test]
    fn test_unknown_codes_are_absent() {
        for code in ["PERMISO", "F", "FALTA", "", "asistió"] {
            assert_eq!(classify(code), AttendanceStatus::Absent, "{code}");
        }
        for code in [" A ", "ASISTIO\n", " t"] {
            assert_eq!(classify(code), AttendanceStatus::Absent, "{code:?}");
        }
        let missing = AttendanceRecord::default();
        assert_eq!(missing.category(), AttendanceStatus::Absent);
    }

    #[test]
    fn test_summary_scenario_seven_two_one() {
        let mut statuses = vec!["ASISTIO"; 7];
        statuses.extend(["TARDANZA", "TARDANZA", "PERMISO"]);
        let summary = AttendanceSummary::from_records(&records(&statuses));
        assert_eq!(
            summary,
            AttendanceSummary {
                total: 10,
                present: 7,
                late: 2,
                absent: 1,
                percentage: 70,
            }
        );
    }

    #[test]
    fn test_empty_summary_is_zero() {
        assert_eq!(AttendanceSummary::from_records(&[]), AttendanceSummary::default());
    }

    #[test]
    fn test_buckets_always_add_up() {
        let samples: [&[&str]; 4] = [
            &["A", "T", "X"],
            &["presente", "PRESENTE", "tardanza", "", "F", "T"],
            &["A"],
            &["PERMISO", "PERMISO"],
        ];
        for statuses in samples {
            let s = AttendanceSummary::from_records(&records(statuses));
            assert_eq!(s.present + s.late + s.absent, s.total);
            assert_eq!(s.percentage, percentage(s.present, s.total));
        }
    }

    #[test]
    fn test_percentage_rounding() {
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 8), 13); // 12.5 rounds up
        assert_eq!(percentage(3, 3), 100);
    }

    #[test]
    fn test_filter_keeps_matching_records() {
        let all = records(&["A", "T", "PERMISO", "ASISTIO"]);
        assert_eq!(AttendanceFilter::All.apply(&all).len(), 4);
        assert_eq!(AttendanceFilter::Only(AttendanceStatus::Present).apply(&all).len(), 2);
        assert_eq!(AttendanceFilter::Only(AttendanceStatus::Late).apply(&all).len(), 1);
        let absent = AttendanceFilter::Only(AttendanceStatus::Absent).apply(&all);
        assert_eq!(absent, vec![record("PERMISO")]);
    }
}
