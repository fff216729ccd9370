//! Library screens: full log listing, single-log detail, edit form

pub mod service;

pub use service::LibraryService;
