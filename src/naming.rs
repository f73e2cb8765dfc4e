use std::ffi::OsString;
use std::path::{Path, PathBuf};

const OUTPUT_SUFFIX: &str = "_c";

/// `dir/name.ext` -> `dir/name_c.ext`. Used for both directions.
pub fn default_output_path(input: &Path) -> PathBuf {
    let mut file_name = OsString::from(input.file_stem().unwrap_or_default());
    file_name.push(OUTPUT_SUFFIX);
    if let Some(extension) = input.extension() {
        file_name.push(".");
        file_name.push(extension);
    }
    input.with_file_name(file_name)
}
