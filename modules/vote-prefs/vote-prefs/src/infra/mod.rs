pub mod notifier;
pub mod storage;
