pub mod base_commands;
pub mod capex_cmd;
pub mod init_cmd;
pub mod opex_cmd;
pub mod project_cmd;
pub mod report_cmd;
pub mod report_format;
