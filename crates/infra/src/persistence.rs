//! 永続化アダプタ (履歴・設定ファイル)

mod file_reader;
mod file_writer;
mod history_file;
mod settings_file;
mod state_dir;

pub use file_reader::FileReader;
pub use file_writer::FileWriter;
pub use history_file::{HISTORY_VERSION, JsonHistoryRepository};
pub use settings_file::{JsonSettingsRepository, SETTINGS_FILE_NAME};
pub use state_dir::{resolve_state_dir, resolve_state_dir_from};
