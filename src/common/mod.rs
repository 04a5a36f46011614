pub mod file;
#[cfg(test)]
pub mod mock_console;
