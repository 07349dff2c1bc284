pub(crate) mod audio;
pub(crate) mod catalog;
pub(crate) mod config;
pub(crate) mod context;
pub(crate) mod debounce;
pub(crate) mod episode_grid;
pub(crate) mod gen_components;
pub mod gen_funcs;
pub(crate) mod home;
pub mod logging;
pub(crate) mod modal;
pub(crate) mod search;
