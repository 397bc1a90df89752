pub(crate) mod script;
pub(crate) mod session;
pub(crate) mod spec;
