//! Test fixtures shared by the LAS parser tests

use std::io::Write;
use tempfile::NamedTempFile;


/// A small but complete LAS 2.0 file with a duplicated curve
pub fn create_test_las() -> String {
    r#"~Version Information
 VERS.                 2.0 :   CWLS LOG ASCII STANDARD - VERSION 2.0
 WRAP.                 NO  :   ONE LINE PER DEPTH STEP
~Well Information
#MNEM.UNIT       DATA TYPE    INFORMATION
 STRT.F          8665.00:  START DEPTH
 STOP.F          8668.00:  STOP DEPTH
 STEP.F             1.00:  STEP
 NULL.          -999.25 :  NULL VALUE
 COMP.   ACME EXPLORATION :  COMPANY
 WELL.   EAGLE-7          :  WELL
 FLD .   NORTH BASIN      :  FIELD
 LOC .   BLOCK 12         :  LOCATION
 CTRY.   NORWAY           :  COUNTRY
 DATE.   2023-05-14       :  DATE ANALYSED
~Curve Information
#MNEM.UNIT      API CODE     CURVE DESCRIPTION
 DEPT.F                   :  Depth
 HC1 .ppm                 :  Methane
 HC2 .ppm                 :  Ethane
 HC3 .ppm                 :  Propane
 ROP .ft/hr               :  Rate of penetration
 ROP .ft/hr               :  Rate of penetration (raw)
~ASCII
8665.00   80.0   10.0   5.0   35.2   35.9
8666.00   82.0   11.0   5.5   36.0   36.4
8667.00 -999.25   9.0   4.5   30.1   30.0
8668.00   78.0   10.0   5.0   33.3   33.1
"#
    .to_string()
}

/// Minimal file: curves and data only
pub fn create_minimal_las() -> String {
    "~C\nDEPT.F : depth\nGR.GAPI : gamma\n~A\n100.0 45.0\n101.0 47.5\n".to_string()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}
