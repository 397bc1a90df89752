pub(crate) mod entrance;
