use crate::domain::model::{ConfigRequest, Toggle};
use chrono::{Local, NaiveDate};

pub const VERSION_TOKEN: &str = "@VERSION@";
pub const JPEG_LIB_VERSION_TOKEN: &str = "@JPEG_LIB_VERSION@";
pub const BUILD_TOKEN: &str = "@BUILD@";
pub const PROJECT_NAME_TOKEN: &str = "@CMAKE_PROJECT_NAME@";

pub const C_ARITH_DEFINE: &str = "C_ARITH_CODING_SUPPORTED";
pub const D_ARITH_DEFINE: &str = "D_ARITH_CODING_SUPPORTED";
pub const MEM_SRCDST_DEFINE: &str = "MEM_SRCDST_SUPPORTED";

const CMAKEDEFINE_MARKER: &str = "#cmakedefine";

/// Naive global scan-and-replace of a placeholder token. Case-sensitive, no
/// escaping, no partial-match guard; every occurrence is substituted.
pub fn substitute_var(text: &str, token: &str, value: &str) -> String {
    text.replace(token, value)
}

/// Turns a `#cmakedefine NAME` marker into `#define NAME` or `#undef NAME`
/// depending on the toggle. A template without the marker passes through
/// unchanged; that mirrors the original build script, which never checked.
pub fn substitute_define(text: &str, name: &str, toggle: Toggle) -> String {
    let directive = if toggle.is_enabled() { "define" } else { "undef" };
    text.replace(
        &format!("{} {}", CMAKEDEFINE_MARKER, name),
        &format!("#{} {}", directive, name),
    )
}

/// Eight-digit YYYYMMDD stamp for the given date.
pub fn build_stamp(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Stamp for today's local date. Volatile across days by design.
pub fn today_stamp() -> String {
    build_stamp(Local::now().date_naive())
}

/// Renders jconfig.h: version placeholders plus the three feature markers.
pub fn render_jpeg_config(template: &str, request: &ConfigRequest) -> String {
    let mut rendered = substitute_var(template, VERSION_TOKEN, &request.version);
    rendered = substitute_var(
        &rendered,
        JPEG_LIB_VERSION_TOKEN,
        request.jpeg_lib_version.as_str(),
    );
    rendered = substitute_define(&rendered, C_ARITH_DEFINE, request.arith_enc);
    rendered = substitute_define(&rendered, D_ARITH_DEFINE, request.arith_dec);
    substitute_define(&rendered, MEM_SRCDST_DEFINE, request.mem_srcdst)
}

/// Renders config.h: version, build stamp and project name placeholders.
pub fn render_build_config(template: &str, request: &ConfigRequest, build: &str) -> String {
    let mut rendered = substitute_var(template, VERSION_TOKEN, &request.version);
    rendered = substitute_var(&rendered, BUILD_TOKEN, build);
    substitute_var(&rendered, PROJECT_NAME_TOKEN, &request.project)
}
