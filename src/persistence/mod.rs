pub mod files;
pub mod settings;
pub mod storage;

pub use files::{
    atomic_write, ensure_data_dir, init_local_data_dir, log_file, resolve_data_dir, settings_file,
};
pub use settings::{load_settings, save_settings, Settings};
pub use storage::{JsonFileStorage, TaskStorage};
