use std::ffi::OsStr;

pub fn os_str_to_str(str: Option<&OsStr>) -> String {
    str.map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
