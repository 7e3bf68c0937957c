//! Integration tests for the processor module
//!
//! Runs the complete conversion pipeline over temporary directories of
//! LAS files.


use std::fs;
use std::path::{Path, PathBuf};

/// A complete well with gas curves and one sentinel reading
pub fn gas_well_las(well_name: &str) -> String {
    format!(
        "~Version Information\n\
         VERS.   2.0 : CWLS LOG ASCII STANDARD\n\
         ~Well Information\n\
         STRT.F  1000.0 : START DEPTH\n\
         STOP.F  1003.0 : STOP DEPTH\n\
         STEP.F  1.0    : STEP\n\
         NULL.   -999.25 : NULL VALUE\n\
         WELL.   {} : WELL\n\
         ~Curve Information\n\
         DEPT.F    : Depth\n\
         HC1 .ppm  : Methane\n\
         HC2 .ppm  : Ethane\n\
         HC3 .ppm  : Propane\n\
         ~ASCII\n\
         1000.0 80.0 10.0 5.0\n\
         1001.0 80.0 10.0 5.0\n\
         1002.0 -999.25 10.0 5.0\n\
         1003.0 80.0 10.0 5.0\n",
        well_name
    )
}

/// Write `content` to `dir/name`, creating parent directories
pub fn write_las(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}
