mod config_files;
mod preview_command;
