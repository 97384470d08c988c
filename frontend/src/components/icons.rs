//! 线条图标组件（lucide 风格）
//!
//! 每个图标渲染一个继承 currentColor 的 24x24 svg，
//! 样式类通过 `attr:class` 从调用点传入。

#![allow(non_snake_case)]

use leptos::prelude::*;

macro_rules! icon {
    ($name:ident, $body:expr) => {
        #[component]
        pub fn $name() -> impl IntoView {
            view! {
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    inner_html=$body
                ></svg>
            }
        }
    };
}

icon!(
    Home,
    "<path d='M3 9.5 12 3l9 6.5V21a1 1 0 0 1-1 1H4a1 1 0 0 1-1-1Z'/><path d='M9 22V12h6v10'/>"
);

icon!(
    Users,
    "<path d='M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2'/><circle cx='9' cy='7' r='4'/><path d='M22 21v-2a4 4 0 0 0-3-3.87'/><path d='M16 3.13a4 4 0 0 1 0 7.75'/>"
);

icon!(
    UserCheck,
    "<path d='M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2'/><circle cx='9' cy='7' r='4'/><polyline points='16 11 18 13 22 9'/>"
);

icon!(
    UserX,
    "<path d='M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2'/><circle cx='9' cy='7' r='4'/><line x1='17' y1='8' x2='22' y2='13'/><line x1='22' y1='8' x2='17' y2='13'/>"
);

icon!(
    UserRound,
    "<circle cx='12' cy='8' r='5'/><path d='M20 21a8 8 0 0 0-16 0'/>"
);

icon!(
    CalendarDays,
    "<rect x='3' y='4' width='18' height='18' rx='2'/><line x1='16' y1='2' x2='16' y2='6'/><line x1='8' y1='2' x2='8' y2='6'/><line x1='3' y1='10' x2='21' y2='10'/>"
);

icon!(Check, "<polyline points='20 6 9 17 4 12'/>");

icon!(XMark, "<path d='M18 6 6 18'/><path d='m6 6 12 12'/>");

icon!(Plus, "<path d='M5 12h14'/><path d='M12 5v14'/>");

icon!(
    Pencil,
    "<path d='M17 3a2.85 2.83 0 1 1 4 4L7.5 20.5 2 22l1.5-5.5Z'/><path d='m15 5 4 4'/>"
);

icon!(
    Trash2,
    "<path d='M3 6h18'/><path d='M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6'/><path d='M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2'/><line x1='10' y1='11' x2='10' y2='17'/><line x1='14' y1='11' x2='14' y2='17'/>"
);

icon!(
    Download,
    "<path d='M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4'/><polyline points='7 10 12 15 17 10'/><line x1='12' y1='15' x2='12' y2='3'/>"
);

icon!(
    Filter,
    "<polygon points='22 3 2 3 10 12.46 10 19 14 21 14 12.46'/>"
);

icon!(
    LogOut,
    "<path d='M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4'/><polyline points='16 17 21 12 16 7'/><line x1='21' y1='12' x2='9' y2='12'/>"
);

icon!(
    Building2,
    "<path d='M6 22V4a2 2 0 0 1 2-2h8a2 2 0 0 1 2 2v18Z'/><path d='M6 12H4a2 2 0 0 0-2 2v8h4'/><path d='M18 9h2a2 2 0 0 1 2 2v11h-4'/><path d='M10 6h4'/><path d='M10 10h4'/><path d='M10 14h4'/><path d='M10 18h4'/>"
);
