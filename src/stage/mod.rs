pub(crate) mod model;
pub(crate) mod orchestrator;
pub(crate) mod timer;
pub(crate) mod timing;
