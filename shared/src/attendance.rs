//! 考勤标记状态机
//!
//! 针对 (员工, 选定日期) 的三个可观察状态：
//! - `NotMarked`: 拉取的列表中没有该员工的记录
//! - `Present`: 存在记录且 `is_present = true`
//! - `Absent`: 存在记录且 `is_present = false`
//!
//! 标记动作的分派规则：无记录 -> 创建；有记录 -> 按记录 id 更新，
//! 且只改动出勤标志。重复标记当前状态由按钮禁用挡住（纯 UI 约束）。

use crate::{Attendance, CreateAttendanceRequest, UpdateAttendanceRequest};

/// 某员工在选定日期的可观察考勤状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceStatus {
    NotMarked,
    Present,
    Absent,
}

impl AttendanceStatus {
    pub fn of(record: Option<&Attendance>) -> Self {
        match record {
            None => AttendanceStatus::NotMarked,
            Some(r) if r.is_present => AttendanceStatus::Present,
            Some(_) => AttendanceStatus::Absent,
        }
    }

    /// 状态徽章文本
    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::NotMarked => "Not Marked",
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
        }
    }

    /// "标记为出勤" 按钮是否可用
    pub fn can_mark_present(&self) -> bool {
        !matches!(self, AttendanceStatus::Present)
    }

    /// "标记为缺勤" 按钮是否可用
    pub fn can_mark_absent(&self) -> bool {
        !matches!(self, AttendanceStatus::Absent)
    }
}

/// 在已拉取的列表中按员工 id 线性查找记录
pub fn find_record(records: &[Attendance], employee_id: i64) -> Option<&Attendance> {
    records.iter().find(|r| r.employee == employee_id)
}

/// 标记动作：创建新记录，或按 id 更新既有记录
#[derive(Debug, Clone, PartialEq)]
pub enum MarkAction {
    Create(CreateAttendanceRequest),
    Update {
        id: i64,
        body: UpdateAttendanceRequest,
    },
}

/// 根据既有记录决定创建还是更新
pub fn plan_mark(
    employee_id: i64,
    date: &str,
    existing: Option<&Attendance>,
    is_present: bool,
) -> MarkAction {
    match existing {
        Some(record) => MarkAction::Update {
            id: record.id,
            body: UpdateAttendanceRequest { is_present },
        },
        None => MarkAction::Create(CreateAttendanceRequest {
            employee: employee_id,
            date: date.to_string(),
            is_present,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, employee: i64, is_present: bool) -> Attendance {
        Attendance {
            id,
            employee,
            employee_name: "Jane Doe".to_string(),
            date: "2024-03-01".to_string(),
            is_present,
            created_by: 1,
            created_by_name: "admin".to_string(),
            created_at: "2024-03-01T09:00:00Z".to_string(),
            updated_at: "2024-03-01T09:00:00Z".to_string(),
        }
    }

    #[test]
    fn status_is_not_marked_without_a_record_and_both_buttons_enabled() {
        let status = AttendanceStatus::of(None);
        assert_eq!(status, AttendanceStatus::NotMarked);
        assert_eq!(status.label(), "Not Marked");
        assert!(status.can_mark_present());
        assert!(status.can_mark_absent());
    }

    #[test]
    fn present_record_disables_only_the_present_button() {
        let r = record(10, 7, true);
        let status = AttendanceStatus::of(Some(&r));
        assert_eq!(status, AttendanceStatus::Present);
        assert_eq!(status.label(), "Present");
        assert!(!status.can_mark_present());
        assert!(status.can_mark_absent());
    }

    #[test]
    fn absent_record_disables_only_the_absent_button() {
        let r = record(10, 7, false);
        let status = AttendanceStatus::of(Some(&r));
        assert_eq!(status, AttendanceStatus::Absent);
        assert_eq!(status.label(), "Absent");
        assert!(status.can_mark_present());
        assert!(!status.can_mark_absent());
    }

    #[test]
    fn find_record_scans_by_employee_id() {
        let records = vec![record(10, 7, true), record(11, 8, false)];
        assert_eq!(find_record(&records, 8).map(|r| r.id), Some(11));
        assert_eq!(find_record(&records, 9), None);
    }

    #[test]
    fn marking_without_a_record_plans_a_create_with_date_and_flag() {
        let action = plan_mark(7, "2024-03-01", None, true);
        assert_eq!(
            action,
            MarkAction::Create(CreateAttendanceRequest {
                employee: 7,
                date: "2024-03-01".to_string(),
                is_present: true,
            })
        );
    }

    #[test]
    fn marking_over_a_record_plans_an_update_addressed_by_record_id() {
        let existing = record(42, 7, true);
        let action = plan_mark(7, "2024-03-01", Some(&existing), false);
        assert_eq!(
            action,
            MarkAction::Update {
                id: 42,
                body: UpdateAttendanceRequest { is_present: false },
            }
        );
    }
}
