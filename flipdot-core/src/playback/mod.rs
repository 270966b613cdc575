pub(crate) mod player;
pub(crate) mod show;
pub(crate) mod sink;
