pub(crate) mod png;
pub(crate) mod scheduler;
pub(crate) mod sink;
