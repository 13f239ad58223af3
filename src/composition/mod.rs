pub(crate) mod compositor;
pub(crate) mod fingerprint;
pub(crate) mod input;
pub(crate) mod motion;
pub(crate) mod palette;
pub(crate) mod tables;
pub(crate) mod tags;
pub(crate) mod typography;
