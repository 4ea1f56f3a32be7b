pub mod dom;
pub mod scheduler;
pub mod storage;
