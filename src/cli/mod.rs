// Command-line interface definitions (clap derive types).

pub mod cmd_enums;
