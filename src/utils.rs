pub mod stats_utils;
