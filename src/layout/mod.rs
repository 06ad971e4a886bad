pub(crate) mod document;
pub(crate) mod engine;
pub(crate) mod host;
pub(crate) mod measure;
pub(crate) mod model;
