//! Static content: the workspace layout and the portfolio pages.

pub mod pages;
pub mod workspace;
