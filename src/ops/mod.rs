pub mod apply;
pub mod debounce;
pub mod live;
