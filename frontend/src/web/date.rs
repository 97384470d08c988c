//! 浏览器本地日期
//!
//! 取"今天"必须经过 js 时钟；纯字符串层面的日期工具放在
//! `hrdesk_shared::date`，与宿主环境共享。

/// 以浏览器本地时区返回今天的 "YYYY-MM-DD"
pub fn today_iso_date() -> String {
    let now = js_sys::Date::new_0();
    format!(
        "{:04}-{:02}-{:02}",
        now.get_full_year(),
        now.get_month() + 1,
        now.get_date()
    )
}
