/// Sentinel member present at the head of every generated enumeration.
pub const NONE: &str = "None";

pub const CONSTANTS_FILE_NAME: &str = "BuildConstants.cs";
pub const CONSTANTS_CLASS_NAME: &str = "BuildConstants";

pub const DEFAULT_SEARCH_ROOT: &str = "Assets";
pub const DEFAULT_OUTPUT_DIR: &str = "SuperUnityBuild";

pub const GENERATED_HEADER: &str = "// This file is auto-generated. Do not modify or move this file.";

pub const TEMP_FILE_MARKER: &str = "tmp-";

pub mod time {
    /// Seconds between 0001-01-01T00:00:00Z and the Unix epoch.
    pub const EPOCH_OFFSET_SECS: i64 = 62_135_596_800;
    pub const TICKS_PER_SECOND: i64 = 10_000_000;
    pub const NANOS_PER_TICK: i64 = 100;
    /// Year range of the generated `DateTime`.
    pub const MIN_YEAR: i32 = 1;
    pub const MAX_YEAR: i32 = 9999;
}
