pub mod done;
pub mod init;
pub mod job;
pub mod next;
pub mod stage;
pub mod status;
