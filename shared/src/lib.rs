use serde::{Deserialize, Serialize};

pub mod attendance;
pub mod date;

pub use attendance::{AttendanceStatus, MarkAction};

// =========================================================
// 常量定义 (Constants)
// =========================================================

pub const STORAGE_TOKEN_KEY: &str = "hrdesk_token";
pub const STORAGE_USER_KEY: &str = "hrdesk_user";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 员工角色标签
///
/// 服务端只认两个值："HR" 与 "NORMAL"。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum EmployeeRole {
    Hr,
    #[default]
    Normal,
}

impl EmployeeRole {
    /// 返回服务端使用的角色字符串（同时也是徽章文本）
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeRole::Hr => "HR",
            EmployeeRole::Normal => "NORMAL",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "HR" => Some(EmployeeRole::Hr),
            "NORMAL" => Some(EmployeeRole::Normal),
            _ => None,
        }
    }
}

impl std::fmt::Display for EmployeeRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 员工记录，由远端 API 持有；客户端从不计算派生字段
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub employee_type: EmployeeRole,
    pub first_name: String,
    pub last_name: String,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// 考勤记录
///
/// 每个 (employee, date) 组合最多一条记录，由服务端保证；
/// 客户端在已拉取的列表中线性查找。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attendance {
    pub id: i64,
    pub employee: i64,
    pub employee_name: String,
    /// "YYYY-MM-DD"
    pub date: String,
    pub is_present: bool,
    pub created_by: i64,
    pub created_by_name: String,
    pub created_at: String,
    pub updated_at: String,
}

/// 仪表盘快照，只读，每次拉取由服务端重新计算
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DashboardStats {
    pub total_employees: u32,
    pub present_today: u32,
    pub absent_today: u32,
    pub recent_activities: Vec<Activity>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub timestamp: String,
}

// =========================================================
// 请求 / 响应载荷 (Wire Payloads)
// =========================================================

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access: String,
    /// 登录端点会签发 refresh token，但客户端不使用它
    pub refresh: String,
    pub user: Employee,
}

/// 创建员工：密码只在创建时采集
#[derive(Debug, Clone, Serialize)]
pub struct CreateEmployeeRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub employee_type: EmployeeRole,
}

/// 更新员工：类型层面不存在密码字段，
/// 因此更新载荷在任何情况下都不可能携带密码。
#[derive(Debug, Clone, Serialize)]
pub struct UpdateEmployeeRequest {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub employee_type: EmployeeRole,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateAttendanceRequest {
    pub employee: i64,
    pub date: String,
    pub is_present: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateAttendanceRequest {
    pub is_present: bool,
}

// =========================================================
// 统计周期 (Period)
// =========================================================

/// 考勤查询的聚合粒度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    #[default]
    Day,
    Week,
    Month,
    Year,
}

impl Period {
    pub const ALL: [Period; 4] = [Period::Day, Period::Week, Period::Month, Period::Year];

    /// 查询参数中使用的小写值
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Day => "day",
            Period::Week => "week",
            Period::Month => "month",
            Period::Year => "year",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "day" => Some(Period::Day),
            "week" => Some(Period::Week),
            "month" => Some(Period::Month),
            "year" => Some(Period::Year),
            _ => None,
        }
    }

    /// 选择器中展示的标签
    pub fn label(&self) -> &'static str {
        match self {
            Period::Day => "Day",
            Period::Week => "Week",
            Period::Month => "Month",
            Period::Year => "Year",
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 导出文件名：`attendance_<period>_<date>.csv`
pub fn export_filename(period: Period, date: &str) -> String {
    format!("attendance_{}_{}.csv", period.as_str(), date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_employee() -> Employee {
        Employee {
            id: 7,
            username: "jdoe".to_string(),
            email: "jdoe@example.com".to_string(),
            employee_type: EmployeeRole::Hr,
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
        }
    }

    #[test]
    fn role_tag_round_trips_through_wire_format() {
        for (role, tag) in [(EmployeeRole::Hr, "HR"), (EmployeeRole::Normal, "NORMAL")] {
            let json = serde_json::to_value(role).unwrap();
            assert_eq!(json, serde_json::json!(tag));
            assert_eq!(serde_json::from_value::<EmployeeRole>(json).unwrap(), role);
            assert_eq!(EmployeeRole::from_str(tag), Some(role));
        }
        assert_eq!(EmployeeRole::from_str("ADMIN"), None);
    }

    #[test]
    fn employee_deserializes_from_api_shape() {
        let e: Employee = serde_json::from_str(
            r#"{"id":7,"username":"jdoe","email":"jdoe@example.com",
                "employee_type":"HR","first_name":"Jane","last_name":"Doe"}"#,
        )
        .unwrap();
        assert_eq!(e, sample_employee());
        assert_eq!(e.full_name(), "Jane Doe");
    }

    #[test]
    fn update_payload_never_contains_a_password_field() {
        let update = UpdateEmployeeRequest {
            username: "jdoe".to_string(),
            email: "jdoe@example.com".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            employee_type: EmployeeRole::Normal,
        };
        let value = serde_json::to_value(&update).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        assert!(!keys.contains(&"password"));
        assert_eq!(
            keys,
            ["username", "email", "first_name", "last_name", "employee_type"]
        );
    }

    #[test]
    fn create_payload_carries_the_password() {
        let create = CreateEmployeeRequest {
            username: "jdoe".to_string(),
            email: "jdoe@example.com".to_string(),
            password: "s3cret".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            employee_type: EmployeeRole::Normal,
        };
        let value = serde_json::to_value(&create).unwrap();
        assert_eq!(value["password"], "s3cret");
        assert_eq!(value["employee_type"], "NORMAL");
    }

    #[test]
    fn activity_type_field_maps_to_kind() {
        let a: Activity = serde_json::from_str(
            r#"{"id":1,"type":"attendance","description":"Jane marked present",
                "timestamp":"2024-03-01T09:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(a.kind, "attendance");
    }

    #[test]
    fn period_query_values_round_trip() {
        for period in Period::ALL {
            assert_eq!(Period::from_str(period.as_str()), Some(period));
        }
        assert_eq!(Period::from_str("quarter"), None);
        assert_eq!(Period::Month.to_string(), "month");
    }

    #[test]
    fn export_filename_is_named_by_period_and_date() {
        assert_eq!(
            export_filename(Period::Week, "2024-03-01"),
            "attendance_week_2024-03-01.csv"
        );
    }
}
