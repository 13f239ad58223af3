pub(crate) mod breath;
pub(crate) mod ease;
