pub(crate) mod matrices;
