pub(crate) mod alloc;
pub(crate) mod io;
