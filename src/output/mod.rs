//! Output files for collected metrics.

pub mod csv_writer;

pub use csv_writer::{
    merged_rows, write_merged, write_merged_file, write_series, write_split_files, OutputRow,
    HRV_FILE, HRV_HEADERS, MERGED_HEADERS, REST_HEART_RATE_FILE, REST_HEART_RATE_HEADERS,
};
