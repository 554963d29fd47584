mod remote_control;

pub use remote_control::RemoteControl;
