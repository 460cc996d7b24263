/// Build the mansion, explore it on stdin/stdout, then tear it down.
pub mod play;
